//! # dictx_core
//!
//! `dictx_core` provides the low-level building blocks for `dictx`: the closed
//! value model, the key rules, the tagged `Outcome` type and the raw counted
//! store. It is not typically used directly by end-users, but forms the
//! foundation of the `dictx` dictionary.

#![deny(warnings)]
#![cfg_attr(test, allow(warnings))]
#![recursion_limit = "512"]

/// Shared types: values, kinds, outcomes and key validation.
///
/// Everything a caller hands to a dictionary passes through this module
/// exactly once, at the API boundary.
pub mod common;

/// Contains raw, unvalidated data structures.
///
/// This module provides `DictRaw`, a counted string-keyed map that performs no
/// validation of its own. It serves as the storage of the user-facing
/// `Dictionary` in the `dictx` crate.
pub mod basic;

/// A raw, counted, string-keyed map.
pub use basic::dict_raw::DictRaw;

/// Commonly used items, re-exported for convenience.
pub use common::{
    is_valid_key, IntoValue, JsonMap, JsonValue, Kind, Outcome, Value,
};
