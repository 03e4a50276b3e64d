//! Run reference type.

use std::fmt;

/// Error returned when parsing an invalid run reference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid run reference: {reason}")]
pub struct InvalidRunRef {
    reason: &'static str,
}

/// An opaque identifier for one scheduled journey of a vehicle.
///
/// PTV run references are not necessarily numeric (e.g. `"1-ALM-vpt-1"`),
/// so they are kept as strings. Because a reference is spliced into a
/// request path, it must be non-empty and free of URL delimiters.
///
/// # Examples
///
/// ```
/// use ptv_client::domain::RunRef;
///
/// let run = RunRef::new("948192".to_string()).unwrap();
/// assert_eq!(run.as_str(), "948192");
///
/// assert!(RunRef::new("".to_string()).is_err());
/// assert!(RunRef::new("12/34".to_string()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunRef(String);

impl RunRef {
    /// Create a new run reference from a string.
    pub fn new(s: String) -> Result<Self, InvalidRunRef> {
        if s.is_empty() {
            return Err(InvalidRunRef {
                reason: "run reference cannot be empty",
            });
        }
        if s.contains(['/', '?', '#']) || s.chars().any(char::is_whitespace) {
            return Err(InvalidRunRef {
                reason: "run reference cannot contain URL delimiters or whitespace",
            });
        }
        Ok(RunRef(s))
    }

    /// Returns the run reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the RunRef and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for RunRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RunRef({})", self.0)
    }
}

impl fmt::Display for RunRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid_ref() {
        assert!(RunRef::new("948192".to_string()).is_ok());
        assert!(RunRef::new("1-ALM-vpt-1.2".to_string()).is_ok());
        assert!(RunRef::new("X".to_string()).is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(RunRef::new("".to_string()).is_err());
    }

    #[test]
    fn reject_delimiters() {
        assert!(RunRef::new("12/34".to_string()).is_err());
        assert!(RunRef::new("12?x=1".to_string()).is_err());
        assert!(RunRef::new("12#frag".to_string()).is_err());
        assert!(RunRef::new("12 34".to_string()).is_err());
    }

    #[test]
    fn display_and_debug() {
        let run = RunRef::new("1-ALM".to_string()).unwrap();
        assert_eq!(format!("{}", run), "1-ALM");
        assert_eq!(format!("{:?}", run), "RunRef(1-ALM)");
    }

    #[test]
    fn into_inner() {
        let run = RunRef::new("948192".to_string()).unwrap();
        assert_eq!(run.into_inner(), "948192".to_string());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-empty string of path-safe characters is a valid reference
        #[test]
        fn path_safe_always_valid(s in "[A-Za-z0-9._-]{1,24}") {
            prop_assert!(RunRef::new(s).is_ok());
        }

        /// Roundtrip: new then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Za-z0-9._-]{1,24}") {
            let run = RunRef::new(s.clone()).unwrap();
            prop_assert_eq!(run.as_str(), s.as_str());
        }
    }
}
