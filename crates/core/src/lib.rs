//! Core types for the Enka asset library.
//!
//! Holds everything that does not touch the network: the raw and resolved
//! data model, the error taxonomy, configuration, the TTL cache and the
//! pure URL/naming helpers used during resolution.

pub mod assets;
pub mod cache;
pub mod config;
pub mod error;
pub mod naming;
pub mod profile;
pub mod reference;
pub mod types;
pub mod url;
