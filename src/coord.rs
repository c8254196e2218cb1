//! Board coordinate value type and its text forms.

use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A board coordinate as the game service addresses it.
///
/// Renders as `(x, y)`; parses only from the strict `(x,y)` strike form.
/// The parser does no range checking beyond what fits the integer type —
/// the service is the arbiter of board bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Coordinate {
    /// Horizontal offset, counted from zero.
    pub x: u64,
    /// Vertical offset, counted from zero.
    pub y: u64,
}

impl Coordinate {
    /// Parses the strict `(x,y)` form: base-10 digits, no sign, no
    /// whitespace, nothing before or after the brackets.
    ///
    /// A non-match is an expected outcome, not an error — callers fall
    /// through to single-letter command interpretations.
    pub fn parse(token: &str) -> Option<Self> {
        let inner = token.strip_prefix('(')?.strip_suffix(')')?;
        let (x, y) = inner.split_once(',')?;
        if x.is_empty() || y.is_empty() {
            return None;
        }
        if !x.bytes().all(|b| b.is_ascii_digit()) || !y.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self {
            x: x.parse().ok()?,
            y: y.parse().ok()?,
        })
    }

    /// The compact `(x,y)` form used in request paths and on the wire.
    pub fn wire(&self) -> String {
        format!("({},{})", self.x, self.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Rejected attempt to read a coordinate from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("not a coordinate: {token}")]
pub struct ParseCoordinateError {
    /// The rejected token.
    pub token: String,
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseCoordinateError {
            token: s.to_string(),
        })
    }
}

// The service carries locations as "(x,y)" strings in its JSON bodies.
impl Serialize for Coordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.wire())
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_strict_form() {
        assert_eq!(Coordinate::parse("(2,3)"), Some(Coordinate::new(2, 3)));
        assert_eq!(Coordinate::parse("(0,0)"), Some(Coordinate::new(0, 0)));
        assert_eq!(
            Coordinate::parse("(12,345)"),
            Some(Coordinate::new(12, 345))
        );
    }

    #[test]
    fn rejects_missing_bracket() {
        assert_eq!(Coordinate::parse("(2,3"), None);
        assert_eq!(Coordinate::parse("2,3)"), None);
        assert_eq!(Coordinate::parse("2,3"), None);
    }

    #[test]
    fn rejects_internal_whitespace() {
        assert_eq!(Coordinate::parse("(2, 3)"), None);
        assert_eq!(Coordinate::parse("( 2,3)"), None);
        assert_eq!(Coordinate::parse("(2,3 )"), None);
    }

    #[test]
    fn rejects_negative_numbers() {
        assert_eq!(Coordinate::parse("(-1,2)"), None);
        assert_eq!(Coordinate::parse("(1,-2)"), None);
    }

    #[test]
    fn rejects_non_numeric_and_empty_parts() {
        assert_eq!(Coordinate::parse("(a,b)"), None);
        assert_eq!(Coordinate::parse("(,2)"), None);
        assert_eq!(Coordinate::parse("(2,)"), None);
        assert_eq!(Coordinate::parse("()"), None);
        assert_eq!(Coordinate::parse(""), None);
        assert_eq!(Coordinate::parse("S"), None);
    }

    #[test]
    fn rejects_trailing_garbage() {
        assert_eq!(Coordinate::parse("(2,3)x"), None);
        assert_eq!(Coordinate::parse("x(2,3)"), None);
    }

    #[test]
    fn display_includes_space() {
        assert_eq!(Coordinate::new(2, 3).to_string(), "(2, 3)");
    }

    #[test]
    fn wire_form_has_no_space() {
        assert_eq!(Coordinate::new(2, 3).wire(), "(2,3)");
    }

    #[test]
    fn from_str_reports_token() {
        let err = "(2, 3)".parse::<Coordinate>().unwrap_err();
        assert_eq!(err.token, "(2, 3)");
    }

    #[test]
    fn serde_round_trips_through_wire_string() {
        let coordinate = Coordinate::new(4, 7);
        let json = serde_json::to_string(&coordinate).unwrap();
        assert_eq!(json, "\"(4,7)\"");
        let back: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, coordinate);
    }
}
