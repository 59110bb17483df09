//!
//! A `HashMap`-like dictionary from non-blank string keys to values of a
//! closed set of kinds.
//!
//! Input is validated once, when it enters the dictionary. Failures are
//! reported through [`Outcome`] and never leave the dictionary half-updated.
//!
//! # Examples
//!
//! ```
//! use dictx::{Dictionary, Outcome, Value};
//!
//! let mut d = Dictionary::new();
//!
//! // Insert key-value pairs
//! assert_eq!(d.add("x", 1), Outcome::Done(1));
//! assert_eq!(d.add("y", 2), Outcome::Done(2));
//!
//! // Replacing keeps the size
//! assert_eq!(d.add("y", "two"), Outcome::Done(2));
//!
//! // Refused input
//! assert_eq!(d.add("", 1), Outcome::Invalid);
//! assert_eq!(d.add("z", None::<i32>), Outcome::Invalid);
//!
//! // Retrieve a value
//! assert_eq!(d.get("y"), Outcome::Done(&Value::from("two")));
//! assert_eq!(d.get("z"), Outcome::Absent);
//!
//! // Iterate over the dictionary
//! for (k, v) in d.get_all() {
//!     println!("key: {}, val: {:?}", k, v);
//! }
//!
//! // Remove a key
//! assert_eq!(d.remove("x"), Outcome::Done(true));
//! assert_eq!(d.remove("x"), Outcome::Done(false));
//!
//! // Clear the entire dictionary
//! assert_eq!(d.remove_all(), 0);
//! ```
//!


use crate::common::{pattern::SearchOpts, source::Source};
use dictx_core::{
    basic::dict_raw::{DictRaw, DictRawIntoIter, DictRawIter, DictRawKeys, DictRawValues},
    is_valid_key, IntoValue, JsonValue, Outcome, Value,
};
use ruc::*;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// An iterator over the entries of a `Dictionary`.
pub type DictionaryIter<'a> = DictRawIter<'a>;

/// A validating, string-keyed dictionary.
///
/// Deserialization goes through [`Dictionary::add`], so blank keys are
/// rejected on load just as they are at runtime.
#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
#[serde(try_from = "BTreeMap<String, Value>")]
pub struct Dictionary {
    inner: DictRaw,
}

impl Dictionary {
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            inner: DictRaw::new(),
        }
    }

    /// The number of entries.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.inner.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Inserts or replaces the value under `key`.
    ///
    /// Returns the resulting size, or `Invalid` for a blank key or a
    /// `null`/missing value; nothing is stored in that case.
    pub fn add(&mut self, key: &str, value: impl IntoValue) -> Outcome<usize> {
        if !is_valid_key(key) {
            return Outcome::Invalid;
        }
        match value.into_checked() {
            Ok(v) => {
                self.inner.insert(key.to_owned(), v);
                Outcome::Done(self.size())
            }
            Err(kind) => {
                debug_assert!(!kind.is_storable());
                Outcome::Invalid
            }
        }
    }

    /// Applies [`Dictionary::add`] to every enumerable entry of `source`.
    ///
    /// With `own_only`, entries a source inherits from its base are left out.
    /// Entries that fail validation are skipped. Returns the resulting size,
    /// or `Invalid` if `source` is not record-like.
    pub fn add_all(&mut self, source: impl Source, own_only: bool) -> Outcome<usize> {
        let mut add = |k: String, v: Option<Value>| {
            let _ = self.add(&k, v);
        };
        if source.visit(own_only, &mut add).is_err() {
            return Outcome::Invalid;
        }
        Outcome::Done(self.size())
    }

    /// Checks if the dictionary contains `key`.
    #[inline(always)]
    pub fn has_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// [`Dictionary::has_key`] for untyped keys; only JSON strings qualify.
    pub fn has_key_dyn(&self, key: &JsonValue) -> Outcome<bool> {
        match key {
            JsonValue::String(k) => Outcome::Done(self.has_key(k)),
            _ => Outcome::Invalid,
        }
    }

    /// Retrieves the value stored under `key`.
    pub fn get(&self, key: &str) -> Outcome<&Value> {
        if !is_valid_key(key) {
            return Outcome::Invalid;
        }
        self.inner.get(key).into()
    }

    /// Returns an iterator over all entries.
    #[inline(always)]
    pub fn get_all(&self) -> DictionaryIter<'_> {
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

    /// An owned copy of all entries, in key order.
    pub fn snapshot(&self) -> BTreeMap<String, Value> {
        self.get_all()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Tests the value stored under `key` against `value`.
    ///
    /// A string `value` is matched as a substring of the stored text,
    /// ignoring case unless `strict`; `exact_match` requires the whole text
    /// to match. Numbers and booleans must equal the stored value exactly.
    ///
    /// An absent key, a record or list on either side, or invalid input
    /// yields `Invalid`.
    #[inline(always)]
    pub fn search(
        &self,
        key: &str,
        value: impl IntoValue,
        strict: bool,
        exact_match: bool,
    ) -> Outcome<bool> {
        let opts = SearchOpts::new().strict(strict).exact_match(exact_match);
        self.search_with(key, value, &opts)
    }

    /// [`Dictionary::search`] with every option spelled out.
    ///
    /// Why a search could not run is reported on stderr.
    pub fn search_with(
        &self,
        key: &str,
        value: impl IntoValue,
        opts: &SearchOpts,
    ) -> Outcome<bool> {
        if !is_valid_key(key) {
            return Outcome::Invalid;
        }
        let needle = match value.into_checked() {
            Ok(v) => v,
            Err(_) => return Outcome::Invalid,
        };

        let ret = self.match_stored(key, &needle, opts);
        let out = ret.as_ref().map_or(Outcome::Invalid, |hit| Outcome::Done(*hit));
        info_omit!(ret);
        out
    }

    /// [`Dictionary::search_with`] returning the reason of a failure
    /// instead of printing it.
    pub fn try_search(
        &self,
        key: &str,
        value: impl IntoValue,
        opts: &SearchOpts,
    ) -> Result<bool> {
        if !is_valid_key(key) {
            return Err(eg!(format!("invalid key: {:?}", key)));
        }
        let needle = value
            .into_checked()
            .map_err(|kind| eg!(format!("invalid search value of kind: {:?}", kind)))?;
        self.match_stored(key, &needle, opts).c(d!())
    }

    fn match_stored(&self, key: &str, needle: &Value, opts: &SearchOpts) -> Result<bool> {
        let stored = self
            .inner
            .get(key)
            .ok_or_else(|| eg!(format!("Key is not present: {}", key)))?;

        if !needle.kind().is_searchable() {
            return Err(eg!("Unsearchable value passed"));
        }
        if !stored.kind().is_searchable() {
            return Err(eg!(format!("Unsearchable value stored under: {}", key)));
        }

        match (needle, stored.as_text()) {
            (Value::Str(pattern), Some(text)) => opts.is_match(pattern, &text).c(d!()),
            _ => Ok(stored == needle),
        }
    }

    /// Removes `key`, returning whether it was present.
    pub fn remove(&mut self, key: &str) -> Outcome<bool> {
        if !is_valid_key(key) {
            return Outcome::Invalid;
        }
        Outcome::Done(self.inner.remove(key).is_some())
    }

    /// Drops every entry; returns the new size, always zero.
    #[inline(always)]
    pub fn remove_all(&mut self) -> usize {
        self.inner.clear();
        self.size()
    }
}

impl<K, V> FromIterator<(K, V)> for Dictionary
where
    K: AsRef<str>,
    V: IntoValue,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut d = Dictionary::new();
        d.extend(iter);
        d
    }
}

impl<K, V> Extend<(K, V)> for Dictionary
where
    K: AsRef<str>,
    V: IntoValue,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        iter.into_iter().for_each(|(k, v)| {
            let _ = self.add(k.as_ref(), v);
        });
    }
}

impl IntoIterator for Dictionary {
    type Item = (String, Value);
    type IntoIter = DictRawIntoIter;
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a String, &'a Value);
    type IntoIter = DictionaryIter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.get_all()
    }
}

impl Serialize for Dictionary {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // non-finite numbers have no JSON form
        if let Some((k, _)) = self
            .get_all()
            .find(|(_, v)| matches!(v, Value::Number(n) if !n.is_finite()))
        {
            return Err(serde::ser::Error::custom(format!(
                "non-finite number under key: {}",
                k
            )));
        }
        serializer.collect_map(self.get_all())
    }
}

impl TryFrom<BTreeMap<String, Value>> for Dictionary {
    type Error = String;

    fn try_from(entries: BTreeMap<String, Value>) -> std::result::Result<Self, String> {
        let mut d = Dictionary::new();
        for (k, v) in entries {
            if d.add(&k, v).is_invalid() {
                return Err(format!("invalid entry: {:?}", k));
            }
        }
        Ok(d)
    }
}
