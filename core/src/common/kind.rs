use super::{IntoValue, JsonValue, Value};

/// The type tag of an input, as seen at the API boundary.
///
/// Only [`Kind::is_storable`] kinds ever reach a dictionary. Callables have
/// no tag at all: the input types cannot express them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Number,
    Boolean,
    String,
    Record,
    List,
    Null,
    Undefined,
}

impl Kind {
    /// Classifies an untyped JSON value.
    pub fn of_json(v: &JsonValue) -> Self {
        match v {
            JsonValue::Null => Kind::Null,
            JsonValue::Bool(_) => Kind::Boolean,
            JsonValue::Number(_) => Kind::Number,
            JsonValue::String(_) => Kind::String,
            JsonValue::Array(_) => Kind::List,
            JsonValue::Object(_) => Kind::Record,
        }
    }

    /// Classifies an arbitrary input, consuming it.
    pub fn of_input(v: impl IntoValue) -> Self {
        match v.into_checked() {
            Ok(v) => v.kind(),
            Err(k) => k,
        }
    }

    /// Kinds a dictionary accepts as values.
    #[inline(always)]
    pub fn is_storable(self) -> bool {
        !matches!(self, Kind::Null | Kind::Undefined)
    }

    /// Kinds `search` can compare against.
    #[inline(always)]
    pub fn is_searchable(self) -> bool {
        matches!(self, Kind::Number | Kind::Boolean | Kind::String)
    }

    #[inline(always)]
    pub fn is_number(self) -> bool {
        self == Kind::Number
    }

    #[inline(always)]
    pub fn is_boolean(self) -> bool {
        self == Kind::Boolean
    }

    #[inline(always)]
    pub fn is_string(self) -> bool {
        self == Kind::String
    }

    #[inline(always)]
    pub fn is_record(self) -> bool {
        self == Kind::Record
    }

    #[inline(always)]
    pub fn is_list(self) -> bool {
        self == Kind::List
    }

    #[inline(always)]
    pub fn is_null(self) -> bool {
        self == Kind::Null
    }

    #[inline(always)]
    pub fn is_undefined(self) -> bool {
        self == Kind::Undefined
    }
}

impl Value {
    /// The tag of a stored value; always storable.
    #[inline(always)]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Str(_) => Kind::String,
            Value::Bool(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::Record(_) => Kind::Record,
            Value::List(_) => Kind::List,
        }
    }
}
