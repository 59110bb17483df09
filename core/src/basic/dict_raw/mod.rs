//!
//! A `HashMap`-like structure that keeps its own entry count.
//!
//! NOTE:
//! - Neither keys nor values are validated in this structure
//!
//! # Examples
//!
//! ```
//! use dictx_core::{DictRaw, Value};
//!
//! let mut l = DictRaw::new();
//!
//! l.insert("a".to_owned(), Value::from(0));
//! l.insert("a".to_owned(), Value::from(0));
//! l.insert("b".to_owned(), Value::from(0));
//!
//! l.iter().for_each(|(_, v)| {
//!     assert_eq!(v, &Value::from(0));
//! });
//!
//! l.remove("b");
//! assert_eq!(l.len(), 1);
//!
//! l.clear();
//! assert_eq!(l.len(), 0);
//! ```
//!


use crate::common::Value;
use std::collections::{hash_map, HashMap};

pub type DictRawIter<'a> = hash_map::Iter<'a, String, Value>;
pub type DictRawKeys<'a> = hash_map::Keys<'a, String, Value>;
pub type DictRawValues<'a> = hash_map::Values<'a, String, Value>;
pub type DictRawIntoIter = hash_map::IntoIter<String, Value>;

#[derive(Clone, PartialEq, Debug, Default)]
pub struct DictRaw {
    inner: HashMap<String, Value>,
    // kept in step with `inner` by every mutation below
    len: usize,
}

impl DictRaw {
    #[inline(always)]
    pub fn new() -> Self {
        DictRaw {
            inner: HashMap::new(),
            len: 0,
        }
    }

    #[inline(always)]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    #[inline(always)]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.inner.get_mut(key)
    }

    #[inline(always)]
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.len, self.inner.len());
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        0 == self.len()
    }

    #[inline(always)]
    pub fn iter(&self) -> DictRawIter<'_> {
        self.inner.iter()
    }

    #[inline(always)]
    pub fn keys(&self) -> DictRawKeys<'_> {
        self.inner.keys()
    }

    #[inline(always)]
    pub fn values(&self) -> DictRawValues<'_> {
        self.inner.values()
    }

    /// Returns the replaced value, if any.
    #[inline(always)]
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        let old = self.inner.insert(key, value);
        if old.is_none() {
            self.len += 1;
        }
        old
    }

    #[inline(always)]
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let old = self.inner.remove(key);
        if old.is_some() {
            self.len -= 1;
        }
        old
    }

    /// Swaps in a fresh, empty store.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.inner = HashMap::new();
        self.len = 0;
    }
}

impl IntoIterator for DictRaw {
    type Item = (String, Value);
    type IntoIter = DictRawIntoIter;
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a DictRaw {
    type Item = (&'a String, &'a Value);
    type IntoIter = DictRawIter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
