#![doc = include_str!("../README.md")]
#![deny(warnings)]
#![cfg_attr(test, allow(warnings))]
#![recursion_limit = "512"]

pub mod basic;
pub mod common;

pub use basic::{
    dictionary::{Dictionary, DictionaryIter},
    shared::SharedDictionary,
};

pub use common::{
    pattern::SearchOpts,
    source::{Layered, Source},
};

pub use dictx_core::{self, *};
