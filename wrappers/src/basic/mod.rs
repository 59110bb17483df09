//!
//! # Basic Data Structures
//!
//! The user-facing dictionary, wrapping the raw counted store from
//! `dictx_core` with validation, bulk merges and search, plus a lock-guarded
//! handle for sharing one dictionary between threads.
//!

pub mod dictionary;
pub mod shared;
