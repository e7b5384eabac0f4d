//! Argument handling for the `enka-assets` binary.

pub mod args;
