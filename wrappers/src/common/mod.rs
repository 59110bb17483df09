//!
//! # Common Components
//!
//! This module provides common components used throughout the `dictx` wrappers.
//! It re-exports items from `dictx_core::common` and adds the search pattern
//! builder, the record-like sources accepted by bulk merges, and the helper
//! macros.
//!

pub mod macros;
pub mod pattern;
pub mod source;


pub use dictx_core::common::*;
