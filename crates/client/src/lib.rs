//! Enka Network player asset client.
//!
//! Fetches a player's public profile, resolves character, profile picture
//! and name card ids against the Enka reference datasets, and caches the
//! URL-annotated result. Start from [`EnkaAssets`].

pub mod api;
pub mod assets;
pub mod config;
pub mod http;
pub mod reference;
pub mod resolver;

pub use assets::EnkaAssets;
pub use enka_core::config::{ConfigUpdate, EnkaConfig};
pub use enka_core::error::EnkaError;
