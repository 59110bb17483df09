//!
//! # Common components
//!

mod kind;
mod outcome;
mod value;


pub use kind::Kind;
pub use outcome::Outcome;
pub use value::{IntoValue, Value};

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

/// Untyped JSON data, used for dynamic input and for the
/// contents of records and lists.
pub type JsonValue = serde_json::Value;

/// A plain JSON object.
pub type JsonMap = serde_json::Map<String, JsonValue>;

/// Keys must still have content after surrounding whitespace is trimmed.
///
/// The byte order mark counts as whitespace here.
#[inline(always)]
pub fn is_valid_key(key: &str) -> bool {
    !key
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .is_empty()
}
