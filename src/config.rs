//! Configuration loader and schema types.
//!
//! This module exposes the settings that tune template lookup, track scanning
//! and console output, plus helpers to load them from disk and environment.

mod load;
mod schema;

pub use schema::*;
