//! Printed route numbers.

use std::fmt;

use serde_json::Value;

/// The number printed on a route, as the PTV API reports it.
///
/// The upstream field is loosely typed: unnumbered modes (trains, most
/// regional coaches) send an empty string, most buses and trams send a
/// numeric string, and some routes carry alphanumeric labels. Each case
/// gets its own variant so that matching stays type-sensitive: a
/// `Numeric(96)` is never equal to a `Literal("96")`, and `Absent` is
/// never equal to `Numeric(0)`.
///
/// # Examples
///
/// ```
/// use ptv_client::domain::RouteNumber;
///
/// assert_eq!(RouteNumber::normalize(""), RouteNumber::Absent);
/// assert_eq!(RouteNumber::normalize("96"), RouteNumber::Numeric(96));
/// assert_eq!(RouteNumber::normalize("82A"), RouteNumber::Literal("82A".into()));
///
/// // Conversions from caller input are not normalized.
/// assert_eq!(RouteNumber::from("96"), RouteNumber::Literal("96".into()));
/// assert_eq!(RouteNumber::from(96), RouteNumber::Numeric(96));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RouteNumber {
    /// The route has no printed number.
    Absent,
    /// A fully numeric route number.
    Numeric(u64),
    /// Any other label, kept verbatim.
    Literal(String),
}

impl RouteNumber {
    /// Normalize a raw route number string.
    ///
    /// Empty strings become `Absent`, strings made only of ASCII digits
    /// become `Numeric`, everything else (including digit strings too long
    /// to fit an integer) is kept as a `Literal`.
    pub fn normalize(raw: &str) -> Self {
        if raw.is_empty() {
            return RouteNumber::Absent;
        }
        if raw.bytes().all(|b| b.is_ascii_digit())
            && let Ok(n) = raw.parse()
        {
            return RouteNumber::Numeric(n);
        }
        RouteNumber::Literal(raw.to_string())
    }

    /// Normalize a raw JSON route number field.
    ///
    /// `null` means no number. Integers are taken as-is; strings go
    /// through [`RouteNumber::normalize`].
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => RouteNumber::Absent,
            Value::String(s) => RouteNumber::normalize(s),
            Value::Number(n) => n
                .as_u64()
                .map(RouteNumber::Numeric)
                .unwrap_or_else(|| RouteNumber::Literal(n.to_string())),
            other => RouteNumber::Literal(other.to_string()),
        }
    }

    /// Returns true if the route has no printed number.
    pub fn is_absent(&self) -> bool {
        matches!(self, RouteNumber::Absent)
    }
}

impl From<u64> for RouteNumber {
    fn from(value: u64) -> Self {
        RouteNumber::Numeric(value)
    }
}

impl From<u32> for RouteNumber {
    fn from(value: u32) -> Self {
        RouteNumber::Numeric(u64::from(value))
    }
}

impl From<i32> for RouteNumber {
    /// Negative numbers cannot be printed route numbers; they are kept
    /// as literals so they match nothing numeric.
    fn from(value: i32) -> Self {
        u64::try_from(value)
            .map(RouteNumber::Numeric)
            .unwrap_or_else(|_| RouteNumber::Literal(value.to_string()))
    }
}

impl From<&str> for RouteNumber {
    fn from(value: &str) -> Self {
        RouteNumber::Literal(value.to_string())
    }
}

impl From<String> for RouteNumber {
    fn from(value: String) -> Self {
        RouteNumber::Literal(value)
    }
}

impl fmt::Display for RouteNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteNumber::Absent => Ok(()),
            RouteNumber::Numeric(n) => write!(f, "{n}"),
            RouteNumber::Literal(s) => f.write_str(s),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Digit strings that fit a u64 always normalize to their value
        #[test]
        fn digits_normalize_to_value(n in any::<u64>()) {
            prop_assert_eq!(RouteNumber::normalize(&n.to_string()), RouteNumber::Numeric(n));
        }

        /// Strings containing a letter are always kept verbatim
        #[test]
        fn letters_stay_literal(s in "[0-9]{0,3}[A-Za-z][0-9A-Za-z]{0,3}") {
            prop_assert_eq!(RouteNumber::normalize(&s), RouteNumber::Literal(s.clone()));
        }

        /// Display of a normalized number gives back the canonical text
        #[test]
        fn display_roundtrip(n in any::<u64>()) {
            let number = RouteNumber::normalize(&n.to_string());
            prop_assert_eq!(number.to_string(), n.to_string());
        }
    }
}
