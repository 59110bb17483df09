//!
//! A cloneable, thread-safe handle to one [`Dictionary`].
//!
//! Mutations take the write lock and reads share the read lock, so every
//! operation observes `size` and the entries in step.
//!
//! # Examples
//!
//! ```
//! use dictx::{Outcome, SharedDictionary};
//! use std::thread;
//!
//! let d = SharedDictionary::new();
//!
//! let handles = (0..4)
//!     .map(|i| {
//!         let d = d.clone();
//!         thread::spawn(move || {
//!             assert!(d.add(&format!("k{}", i), i).is_done());
//!         })
//!     })
//!     .collect::<Vec<_>>();
//! handles.into_iter().for_each(|h| h.join().unwrap());
//!
//! assert_eq!(d.size(), 4);
//! assert_eq!(d.remove("k0"), Outcome::Done(true));
//! ```
//!

#[cfg(test)]
mod test;

use crate::{
    basic::dictionary::Dictionary,
    common::{pattern::SearchOpts, source::Source},
    define_locked_methods,
};
use dictx_core::{IntoValue, JsonValue, Outcome, Value};
use parking_lot::RwLock;
use std::{collections::BTreeMap, sync::Arc};

#[derive(Clone, Debug, Default)]
pub struct SharedDictionary {
    inner: Arc<RwLock<Dictionary>>,
}

impl SharedDictionary {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    define_locked_methods! {
        read;
        /// The number of entries.
        fn size(&self) -> usize;
        fn is_empty(&self) -> bool;
        fn has_key(&self, key: &str) -> bool;
        fn has_key_dyn(&self, key: &JsonValue) -> Outcome<bool>;
        /// An owned copy of all entries, in key order.
        fn snapshot(&self) -> BTreeMap<String, Value>;
        fn search(&self, key: &str, value: impl IntoValue, strict: bool, exact_match: bool) -> Outcome<bool>;
        fn search_with(&self, key: &str, value: impl IntoValue, opts: &SearchOpts) -> Outcome<bool>;
    }

    define_locked_methods! {
        write;
        fn add(&self, key: &str, value: impl IntoValue) -> Outcome<usize>;
        fn add_all(&self, source: impl Source, own_only: bool) -> Outcome<usize>;
        fn remove(&self, key: &str) -> Outcome<bool>;
        fn remove_all(&self) -> usize;
    }

    /// A copy of the value stored under `key`.
    #[inline(always)]
    pub fn get(&self, key: &str) -> Outcome<Value> {
        self.inner.read().get(key).cloned()
    }

    /// Runs `f` under the read lock.
    #[inline(always)]
    pub fn read<T>(&self, f: impl FnOnce(&Dictionary) -> T) -> T {
        f(&*self.inner.read())
    }

    /// Runs `f` under the write lock, for compound updates that must not
    /// interleave with other writers.
    #[inline(always)]
    pub fn write<T>(&self, f: impl FnOnce(&mut Dictionary) -> T) -> T {
        f(&mut *self.inner.write())
    }

    /// Takes the dictionary out if this is the last handle.
    pub fn try_unwrap(self) -> Result<Dictionary, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl From<Dictionary> for SharedDictionary {
    fn from(d: Dictionary) -> Self {
        Self {
            inner: Arc::new(RwLock::new(d)),
        }
    }
}
