//! Cross-feed merge marker.

use std::borrow::Cow;

use regex::Regex;

/// Default marker: `-MERGED`, `_merged_2`, `merged-a1` at the end of an id.
pub const DEFAULT_MERGED_ID_MARKER: &str = r"(?i)[-_]?merged(?:[-_][0-9a-z]*)?$";

/// The suffix a feed merger appends to ids that collided across feeds.
///
/// Stripping it recovers the agency's own identifier.
///
/// # Examples
///
/// ```
/// use feed_labels::domain::MergedIdMarker;
///
/// let marker = MergedIdMarker::default();
/// assert_eq!(marker.strip("12345-MERGED"), "12345");
/// assert_eq!(marker.strip("12345_merged_2"), "12345");
/// assert_eq!(marker.strip("12345"), "12345");
/// ```
#[derive(Debug, Clone)]
pub struct MergedIdMarker {
    pattern: Regex,
}

impl MergedIdMarker {
    /// Compile a marker from a regex that matches the suffix to remove.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Remove the marker, if present.
    pub fn strip<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        self.pattern.replace(raw, "")
    }

    /// The marker pattern source.
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for MergedIdMarker {
    fn default() -> Self {
        Self::new(DEFAULT_MERGED_ID_MARKER).expect("default merge marker is a valid regex")
    }
}

/// Parse an id made only of ASCII digits.
pub(crate) fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
