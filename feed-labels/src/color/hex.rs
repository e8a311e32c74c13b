//! Hex color type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid hex color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex color {input:?}: {reason}")]
pub struct InvalidHexColor {
    input: String,
    reason: &'static str,
}

/// A 6-digit RGB hex color, stored uppercase and without `#`.
///
/// # Examples
///
/// ```
/// use feed_labels::color::HexColor;
///
/// let green = HexColor::parse("2da343").unwrap();
/// assert_eq!(green.as_str(), "2DA343");
///
/// assert!(HexColor::parse("#2DA343").is_ok());
/// assert!(HexColor::parse("green").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(pub(super) [u8; 6]);

impl HexColor {
    pub const WHITE: HexColor = HexColor(*b"FFFFFF");

    /// Parse six hex digits, with or without a leading `#`, any case.
    pub fn parse(s: &str) -> Result<Self, InvalidHexColor> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let bytes = digits.as_bytes();

        if bytes.len() != 6 {
            return Err(InvalidHexColor {
                input: s.to_string(),
                reason: "must be exactly 6 hex digits",
            });
        }

        let mut out = [0u8; 6];
        for (slot, &b) in out.iter_mut().zip(bytes) {
            if !b.is_ascii_hexdigit() {
                return Err(InvalidHexColor {
                    input: s.to_string(),
                    reason: "must be hex digits 0-9, A-F",
                });
            }
            *slot = b.to_ascii_uppercase();
        }

        Ok(HexColor(out))
    }

    /// The six digits, uppercase, without `#`.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store ASCII hex digits
        std::str::from_utf8(&self.0).unwrap()
    }

    /// Feeds use white to mean "no color set".
    pub fn is_white(&self) -> bool {
        *self == Self::WHITE
    }
}

impl TryFrom<String> for HexColor {
    type Error = InvalidHexColor;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        HexColor::parse(&s)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.as_str().to_string()
    }
}

impl fmt::Debug for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexColor({})", self.as_str())
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_colors() {
        assert!(HexColor::parse("1476C6").is_ok());
        assert!(HexColor::parse("f6861f").is_ok());
        assert!(HexColor::parse("#8D8687").is_ok());
        assert!(HexColor::parse("000000").is_ok());
    }

    #[test]
    fn normalizes_to_uppercase() {
        assert_eq!(HexColor::parse("f6861f").unwrap().as_str(), "F6861F");
        assert_eq!(HexColor::parse("#ffffff").unwrap(), HexColor::WHITE);
    }

    #[test]
    fn reject_wrong_length() {
        assert!(HexColor::parse("").is_err());
        assert!(HexColor::parse("FFF").is_err());
        assert!(HexColor::parse("FFFFFFF").is_err());
        assert!(HexColor::parse("#").is_err());
    }

    #[test]
    fn reject_non_hex() {
        let err = HexColor::parse("GGGGGG").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid hex color \"GGGGGG\": must be hex digits 0-9, A-F"
        );
        assert!(HexColor::parse("12 456").is_err());
        assert!(HexColor::parse("ÀBCDE").is_err());
    }

    #[test]
    fn white() {
        assert!(HexColor::parse("FFFFFF").unwrap().is_white());
        assert!(!HexColor::parse("FFFFFE").unwrap().is_white());
    }

    #[test]
    fn display_and_debug() {
        let c = HexColor::parse("2da343").unwrap();
        assert_eq!(format!("{}", c), "2DA343");
        assert_eq!(format!("{:?}", c), "HexColor(2DA343)");
    }

    #[test]
    fn serde_as_string() {
        let c: HexColor = serde_json::from_str("\"0070c0\"").unwrap();
        assert_eq!(c.as_str(), "0070C0");
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"0070C0\"");
        assert!(serde_json::from_str::<HexColor>("\"blue\"").is_err());
    }
}
