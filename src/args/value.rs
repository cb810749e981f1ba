//! How a raw `=value` string reads as a boolean or integer.

/// How a flag's raw value reads as a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolReading {
    /// No value given (`-X`, `-X=`).
    Bare,
    /// A non-zero integer (`-X=1`).
    True,
    /// Integer zero (`-X=0`).
    False,
    /// Anything else, including other spellings of zero (`-X=verbose`,
    /// `-X=00`).
    Text,
}

impl BoolReading {
    pub fn of(value: &str) -> Self {
        match value {
            "" => Self::Bare,
            "0" => Self::False,
            _ if int_or_zero(value) != 0 => Self::True,
            _ => Self::Text,
        }
    }

    /// Whether a `-noX=value` occurrence asserts the negation.
    ///
    /// Only the exact value `0` cancels it.
    pub fn asserts_negation(self) -> bool {
        !matches!(self, Self::False)
    }

    /// Truth of a positive `-X=value` occurrence.
    ///
    /// Text reads through `int_or_zero`, so it is false.
    pub fn is_truthy(self) -> bool {
        match self {
            Self::Bare | Self::True => true,
            Self::False | Self::Text => false,
        }
    }
}

/// Base-10 integer parse that degrades to zero on any failure.
pub fn int_or_zero(value: &str) -> i64 {
    value.parse().unwrap_or(0)
}
