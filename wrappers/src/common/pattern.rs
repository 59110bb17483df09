//!
//! # pattern
//!
//! Turns a search string into a compiled matcher.
//!

use regex::{Regex, RegexBuilder};
use ruc::*;

/// Knobs for `Dictionary::search_with`.
///
/// The default is a case-insensitive substring test with regex
/// metacharacters taken literally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SearchOpts {
    /// Case-sensitive matching.
    pub strict: bool,
    /// The whole stored text must match, not just a part of it.
    pub exact_match: bool,
    /// Use the search string as a regular expression instead of literal text.
    pub raw_pattern: bool,
}

impl SearchOpts {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[inline(always)]
    pub fn exact_match(mut self, exact_match: bool) -> Self {
        self.exact_match = exact_match;
        self
    }

    #[inline(always)]
    pub fn raw_pattern(mut self, raw_pattern: bool) -> Self {
        self.raw_pattern = raw_pattern;
        self
    }

    /// Compiles `needle` under these options.
    pub fn matcher(&self, needle: &str) -> Result<Regex> {
        let body = if self.raw_pattern {
            needle.to_owned()
        } else {
            regex::escape(needle)
        };

        // group the body so that alternations stay inside the anchors
        let pattern = if self.exact_match {
            format!("^(?:{})$", body)
        } else {
            body
        };

        RegexBuilder::new(&pattern)
            .case_insensitive(!self.strict)
            .build()
            .c(d!(format!("invalid search pattern: {}", needle)))
    }

    /// Tests `needle` against `haystack` under these options.
    #[inline(always)]
    pub fn is_match(&self, needle: &str, haystack: &str) -> Result<bool> {
        self.matcher(needle).map(|re| re.is_match(haystack))
    }
}
