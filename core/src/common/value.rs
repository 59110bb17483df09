use super::{JsonMap, JsonValue, Kind};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A storable value.
///
/// Only the top level is tagged. The contents of records and lists are
/// left as free-form JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f64),
    Str(String),
    List(Vec<JsonValue>),
    Record(JsonMap),
}

impl Value {
    /// Converts untyped JSON, refusing `null`.
    pub fn from_json(v: JsonValue) -> Option<Self> {
        match v {
            JsonValue::Null => None,
            JsonValue::Bool(b) => Some(Value::Bool(b)),
            JsonValue::Number(n) => n.as_f64().map(Value::Number),
            JsonValue::String(s) => Some(Value::Str(s)),
            JsonValue::Array(l) => Some(Value::List(l)),
            JsonValue::Object(r) => Some(Value::Record(r)),
        }
    }

    /// Non-finite numbers have no JSON form and come out as `null`.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Number(n) => JsonValue::from(*n),
            Value::Str(s) => JsonValue::String(s.clone()),
            Value::List(l) => JsonValue::Array(l.clone()),
            Value::Record(r) => JsonValue::Object(r.clone()),
        }
    }

    #[inline(always)]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn as_record(&self) -> Option<&JsonMap> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn as_list(&self) -> Option<&[JsonValue]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// The text a pattern is matched against.
    ///
    /// Scalars have one, records and lists have none.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Str(s) => Some(Cow::Borrowed(s)),
            Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Value::Number(n) => Some(Cow::Owned(number_text(*n))),
            Value::Record(_) | Value::List(_) => None,
        }
    }
}

// ECMAScript `Number::toString`: shortest round-trip digits, exponent
// form below 1e-6 and from 1e21 on.
fn number_text(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_owned()
    } else if n.is_infinite() {
        let s = if n > 0.0 { "Infinity" } else { "-Infinity" };
        s.to_owned()
    } else if n == 0.0 {
        "0".to_owned()
    } else {
        ryu_js::Buffer::new().format_finite(n).to_owned()
    }
}

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

/// Conversion of caller input into a storable value.
///
/// `None` means the input is of a disallowed kind: a JSON `null`, or a
/// missing (`Option::None`) value.
pub trait IntoValue {
    fn into_value(self) -> Option<Value>;

    /// Like [`IntoValue::into_value`], but a refused input reports
    /// its kind.
    fn into_checked(self) -> Result<Value, Kind>
    where
        Self: Sized,
    {
        self.into_value().ok_or(Kind::Undefined)
    }
}

macro_rules! impl_number {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Value {
                #[inline(always)]
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )+
    };
}

impl_number!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<bool> for Value {
    #[inline(always)]
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    #[inline(always)]
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    #[inline(always)]
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<&String> for Value {
    #[inline(always)]
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

impl From<JsonMap> for Value {
    #[inline(always)]
    fn from(r: JsonMap) -> Self {
        Value::Record(r)
    }
}

impl From<Vec<JsonValue>> for Value {
    #[inline(always)]
    fn from(l: Vec<JsonValue>) -> Self {
        Value::List(l)
    }
}

macro_rules! impl_into_value_via_from {
    ($($t:ty),+) => {
        $(
            impl IntoValue for $t {
                #[inline(always)]
                fn into_value(self) -> Option<Value> {
                    Some(Value::from(self))
                }
            }
        )+
    };
}

impl_into_value_via_from!(
    f64,
    f32,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    bool,
    String,
    &str,
    &String,
    JsonMap,
    Vec<JsonValue>
);

impl IntoValue for Value {
    #[inline(always)]
    fn into_value(self) -> Option<Value> {
        Some(self)
    }
}

impl IntoValue for &Value {
    #[inline(always)]
    fn into_value(self) -> Option<Value> {
        Some(self.clone())
    }
}

impl IntoValue for JsonValue {
    #[inline(always)]
    fn into_value(self) -> Option<Value> {
        Value::from_json(self)
    }

    fn into_checked(self) -> Result<Value, Kind> {
        match self {
            JsonValue::Null => Err(Kind::Null),
            v => Value::from_json(v).ok_or(Kind::Undefined),
        }
    }
}

impl IntoValue for &JsonValue {
    #[inline(always)]
    fn into_value(self) -> Option<Value> {
        Value::from_json(self.clone())
    }

    #[inline(always)]
    fn into_checked(self) -> Result<Value, Kind> {
        self.clone().into_checked()
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    #[inline(always)]
    fn into_value(self) -> Option<Value> {
        self.and_then(IntoValue::into_value)
    }

    fn into_checked(self) -> Result<Value, Kind> {
        match self {
            Some(v) => v.into_checked(),
            None => Err(Kind::Undefined),
        }
    }
}
