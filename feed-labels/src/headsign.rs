//! Trip headsign and stop name normalization.

use crate::clean::{Abbreviation, TextCleaner};
use crate::domain::Direction;

/// A cleaned headsign with the direction it was shown for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TripHeadsign {
    pub label: String,
    pub direction: Direction,
}

/// Turns raw trip headsigns into display labels.
///
/// The output is also the unit compared by the merger, so two raw headsigns
/// that normalize to the same label never need a merge rule.
#[derive(Debug, Clone, Default)]
pub struct HeadsignNormalizer {
    cleaner: TextCleaner,
}

impl HeadsignNormalizer {
    /// Headsign chain with `abbreviations` in place of the built-in table.
    pub fn new(abbreviations: &[Abbreviation]) -> Result<Self, regex::Error> {
        Ok(Self {
            cleaner: TextCleaner::headsign(abbreviations)?,
        })
    }

    /// Clean a raw headsign into its display label.
    pub fn normalize(&self, raw: &str) -> String {
        self.cleaner.clean(raw)
    }

    /// [`normalize`](Self::normalize), keeping the trip's direction.
    pub fn normalize_trip(&self, raw: &str, direction: Direction) -> TripHeadsign {
        TripHeadsign {
            label: self.normalize(raw),
            direction,
        }
    }

    /// The underlying rule chain.
    pub fn cleaner(&self) -> &TextCleaner {
        &self.cleaner
    }
}

/// Turns raw stop names into display labels.
#[derive(Debug, Clone)]
pub struct StopNameNormalizer {
    cleaner: TextCleaner,
}

impl StopNameNormalizer {
    /// Stop-name chain. Unlike headsigns, names keep words like "Transit Center".
    pub fn new() -> Self {
        Self {
            cleaner: TextCleaner::stop_name(),
        }
    }

    /// Clean a raw stop name into its display label.
    pub fn normalize(&self, raw: &str) -> String {
        self.cleaner.clean(raw)
    }
}

impl Default for StopNameNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
