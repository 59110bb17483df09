//!
//! # Basic Data Structures
//!
//! Raw structures with no validation layer. The typed, validating wrappers
//! live in the `dictx` crate.
//!

/// A module for the raw, counted map implementation.
pub mod dict_raw;
