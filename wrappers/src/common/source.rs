//!
//! # source
//!
//! Record-like inputs accepted by `Dictionary::add_all`.
//!

use crate::basic::dictionary::Dictionary;
use dictx_core::{IntoValue, JsonMap, JsonValue, Kind, Value};
use ruc::*;
use std::{
    collections::{BTreeMap, HashMap, HashSet},
    sync::Arc,
};

/// Anything whose entries can be enumerated as a mapping.
pub trait Source {
    /// Feeds every enumerable entry to `f`: own entries first, then
    /// inherited ones unless `own_only` is set.
    ///
    /// An inherited entry shadowed by a nearer one is not visited.
    /// Fails if the source is not record-like.
    fn visit(self, own_only: bool, f: &mut dyn FnMut(String, Option<Value>)) -> Result<()>;
}

impl Source for &Dictionary {
    fn visit(self, _own_only: bool, f: &mut dyn FnMut(String, Option<Value>)) -> Result<()> {
        self.get_all().for_each(|(k, v)| f(k.clone(), Some(v.clone())));
        Ok(())
    }
}

impl Source for Dictionary {
    fn visit(self, _own_only: bool, f: &mut dyn FnMut(String, Option<Value>)) -> Result<()> {
        self.into_iter().for_each(|(k, v)| f(k, Some(v)));
        Ok(())
    }
}

impl Source for JsonMap {
    fn visit(self, _own_only: bool, f: &mut dyn FnMut(String, Option<Value>)) -> Result<()> {
        self.into_iter().for_each(|(k, v)| f(k, v.into_value()));
        Ok(())
    }
}

impl Source for &JsonMap {
    fn visit(self, _own_only: bool, f: &mut dyn FnMut(String, Option<Value>)) -> Result<()> {
        self.iter().for_each(|(k, v)| f(k.clone(), v.into_value()));
        Ok(())
    }
}

impl Source for JsonValue {
    fn visit(self, own_only: bool, f: &mut dyn FnMut(String, Option<Value>)) -> Result<()> {
        match self {
            JsonValue::Object(m) => m.visit(own_only, f),
            other => Err(eg!(format!("not a record-like value: {:?}", Kind::of_json(&other)))),
        }
    }
}

impl Source for &JsonValue {
    fn visit(self, own_only: bool, f: &mut dyn FnMut(String, Option<Value>)) -> Result<()> {
        match self {
            JsonValue::Object(m) => m.visit(own_only, f),
            other => Err(eg!(format!("not a record-like value: {:?}", Kind::of_json(other)))),
        }
    }
}

impl<K, V> Source for BTreeMap<K, V>
where
    K: Into<String>,
    V: IntoValue,
{
    fn visit(self, _own_only: bool, f: &mut dyn FnMut(String, Option<Value>)) -> Result<()> {
        self.into_iter().for_each(|(k, v)| f(k.into(), v.into_value()));
        Ok(())
    }
}

impl<K, V> Source for HashMap<K, V>
where
    K: Into<String>,
    V: IntoValue,
{
    fn visit(self, _own_only: bool, f: &mut dyn FnMut(String, Option<Value>)) -> Result<()> {
        self.into_iter().for_each(|(k, v)| f(k.into(), v.into_value()));
        Ok(())
    }
}

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

/// A record that inherits the entries of a shared base record.
///
/// Lookups fall through to the base chain when a key is not set on the
/// record itself. Several records may share one base.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layered {
    own: JsonMap,
    base: Option<Arc<Layered>>,
}

impl Layered {
    #[inline(always)]
    pub fn new(own: JsonMap) -> Self {
        Self { own, base: None }
    }

    #[inline(always)]
    pub fn with_base(mut self, base: Arc<Layered>) -> Self {
        self.base = Some(base);
        self
    }

    #[inline(always)]
    pub fn own(&self) -> &JsonMap {
        &self.own
    }

    #[inline(always)]
    pub fn base(&self) -> Option<&Layered> {
        self.base.as_deref()
    }

    #[inline(always)]
    pub fn has_own(&self, key: &str) -> bool {
        self.own.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.own
            .get(key)
            .or_else(|| self.base.as_ref().and_then(|b| b.get(key)))
    }

    #[inline(always)]
    pub fn insert(&mut self, key: impl Into<String>, value: JsonValue) -> Option<JsonValue> {
        self.own.insert(key.into(), value)
    }
}

impl Source for &Layered {
    fn visit(self, own_only: bool, f: &mut dyn FnMut(String, Option<Value>)) -> Result<()> {
        let mut seen = HashSet::new();
        let mut layer = Some(self);
        while let Some(l) = layer {
            for (k, v) in l.own.iter() {
                if seen.insert(k.as_str()) {
                    f(k.clone(), v.into_value());
                }
            }
            if own_only {
                break;
            }
            layer = l.base();
        }
        Ok(())
    }
}

impl Source for Layered {
    fn visit(self, own_only: bool, f: &mut dyn FnMut(String, Option<Value>)) -> Result<()> {
        (&self).visit(own_only, f)
    }
}
