use ruc::*;

/// The result of a dictionary operation.
///
/// Failures never panic and never surface as errors: a caller tells them
/// apart by matching on the variant.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome<T> {
    /// The operation went through.
    Done(T),
    /// The key is well-formed but not present.
    Absent,
    /// An argument failed validation.
    Invalid,
}

impl<T> Outcome<T> {
    #[inline(always)]
    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done(_))
    }

    #[inline(always)]
    pub fn is_absent(&self) -> bool {
        matches!(self, Outcome::Absent)
    }

    #[inline(always)]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Outcome::Invalid)
    }

    /// Drops the distinction between `Absent` and `Invalid`.
    #[inline(always)]
    pub fn done(self) -> Option<T> {
        match self {
            Outcome::Done(v) => Some(v),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Outcome::Done(v) => Outcome::Done(v),
            Outcome::Absent => Outcome::Absent,
            Outcome::Invalid => Outcome::Invalid,
        }
    }

    #[inline(always)]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Done(v) => Outcome::Done(f(v)),
            Outcome::Absent => Outcome::Absent,
            Outcome::Invalid => Outcome::Invalid,
        }
    }

    #[inline(always)]
    pub fn unwrap_or(self, default: T) -> T {
        self.done().unwrap_or(default)
    }

    /// Turns the soft failures into `ruc` errors, for callers that
    /// prefer `?` over matching.
    pub fn into_result(self) -> Result<T> {
        match self {
            Outcome::Done(v) => Ok(v),
            Outcome::Absent => Err(eg!("the key is not present")),
            Outcome::Invalid => Err(eg!("invalid input")),
        }
    }
}

impl<T: Clone> Outcome<&T> {
    #[inline(always)]
    pub fn cloned(self) -> Outcome<T> {
        self.map(Clone::clone)
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    #[inline(always)]
    fn from(v: Option<T>) -> Self {
        v.map_or(Outcome::Absent, Outcome::Done)
    }
}
