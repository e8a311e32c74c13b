//! Stop identifiers.

use std::fmt;

use super::marker::{MergedIdMarker, parse_digits};
use crate::error::LabelError;

/// A numeric stop id.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StopId(u32);

impl StopId {
    pub const fn new(id: u32) -> Self {
        StopId(id)
    }

    /// The numeric id.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Turns raw feed stop ids into [`StopId`]s.
///
/// An all-digit id parses directly. Anything else gets the merge marker
/// stripped and is parsed again; what still isn't digits is an error.
///
/// # Examples
///
/// ```
/// use feed_labels::domain::{StopId, StopIdNormalizer};
///
/// let stops = StopIdNormalizer::default();
/// assert_eq!(stops.normalize("12345").unwrap(), StopId::new(12345));
/// assert_eq!(stops.normalize("12345-MERGED").unwrap(), StopId::new(12345));
/// assert!(stops.normalize("").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StopIdNormalizer {
    marker: MergedIdMarker,
}

impl StopIdNormalizer {
    /// Normalizer stripping `marker` instead of the default suffix.
    pub fn new(marker: MergedIdMarker) -> Self {
        Self { marker }
    }

    /// Parse a feed stop id. Surrounding whitespace is ignored, as it is
    /// for route ids.
    pub fn normalize(&self, raw: &str) -> Result<StopId, LabelError> {
        let id = raw.trim();
        if id.is_empty() {
            return Err(LabelError::MalformedStopId {
                raw: raw.to_string(),
                reason: "empty",
            });
        }
        if let Some(id) = parse_digits(id) {
            return Ok(StopId(id));
        }
        parse_digits(&self.marker.strip(id))
            .map(StopId)
            .ok_or_else(|| LabelError::MalformedStopId {
                raw: raw.to_string(),
                reason: "not numeric after stripping merge marker",
            })
    }

    /// The stop's original id, trimmed and with the merge marker removed.
    pub fn clean_original_id(&self, raw: &str) -> String {
        self.marker.strip(raw.trim()).into_owned()
    }

    /// The merge marker this normalizer strips.
    pub fn marker(&self) -> &MergedIdMarker {
        &self.marker
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_parse_directly() {
        let stops = StopIdNormalizer::default();
        assert_eq!(stops.normalize("12345").unwrap(), StopId::new(12345));
        assert_eq!(stops.normalize("0").unwrap(), StopId::new(0));
    }

    #[test]
    fn merged_suffix_is_stripped() {
        let stops = StopIdNormalizer::default();
        assert_eq!(stops.normalize("12345-MERGED").unwrap(), StopId::new(12345));
        assert_eq!(
            stops.normalize("2971_merged_4521").unwrap(),
            StopId::new(2971)
        );
    }

    #[test]
    fn empty_is_malformed() {
        let stops = StopIdNormalizer::default();
        assert_eq!(
            stops.normalize("").unwrap_err(),
            LabelError::MalformedStopId {
                raw: String::new(),
                reason: "empty",
            }
        );
    }

    #[test]
    fn whitespace_is_trimmed_like_route_ids() {
        let stops = StopIdNormalizer::default();
        assert_eq!(stops.normalize(" 123").unwrap(), StopId::new(123));
        assert_eq!(stops.normalize("123-MERGED \t").unwrap(), StopId::new(123));
        assert_eq!(stops.clean_original_id(" 123-MERGED "), "123");
        assert_eq!(
            stops.normalize("   ").unwrap_err(),
            LabelError::MalformedStopId {
                raw: "   ".into(),
                reason: "empty",
            }
        );

        let route = crate::domain::RouteId::parse_feed(" 123", stops.marker()).unwrap();
        assert_eq!(route.get(), stops.normalize(" 123").unwrap().get());
    }

    #[test]
    fn non_numeric_after_strip_is_malformed() {
        let stops = StopIdNormalizer::default();
        let err = stops.normalize("ABC-MERGED").unwrap_err();
        assert!(matches!(
            err,
            LabelError::MalformedStopId { ref raw, .. } if raw == "ABC-MERGED"
        ));
        assert!(stops.normalize("12 34").is_err());
        assert!(stops.normalize("-MERGED").is_err());
    }

    #[test]
    fn overflow_is_malformed() {
        let stops = StopIdNormalizer::default();
        assert!(stops.normalize("4294967296").is_err());
        assert_eq!(
            stops.normalize("4294967295").unwrap(),
            StopId::new(u32::MAX)
        );
    }

    #[test]
    fn custom_marker() {
        let stops = StopIdNormalizer::new(MergedIdMarker::new(r"@feed\d+$").unwrap());
        assert_eq!(stops.normalize("77@feed2").unwrap(), StopId::new(77));
        assert!(stops.normalize("77-MERGED").is_err());
    }

    #[test]
    fn clean_original_id_keeps_non_numeric() {
        let stops = StopIdNormalizer::default();
        assert_eq!(stops.clean_original_id("EVT-STA-MERGED"), "EVT-STA");
        assert_eq!(stops.clean_original_id("1234"), "1234");
    }

    #[test]
    fn display_and_debug() {
        let id = StopId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(format!("{:?}", id), "StopId(42)");
    }
}
