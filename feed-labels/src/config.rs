//! Rule tables as configuration.
//!
//! A [`RuleBook`] is plain data: every table the components need, in a shape
//! that round-trips through JSON. [`RuleBook::build`] validates it and
//! compiles it into a [`Canonicalizer`]. Fields left out of a JSON file fall
//! back to the built-in Community Transit tables.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::canon::Canonicalizer;
use crate::clean::{Abbreviation, CleaningRule, steps};
use crate::color::{
    ColorPalette, ColorTable, ColorTableError, HexColor, RouteClass, RouteColorResolver,
    ShortNameClass, community_transit_agency_color, community_transit_route_classes,
    community_transit_short_name_classes,
};
use crate::domain::{DEFAULT_MERGED_ID_MARKER, MergedIdMarker, StopIdNormalizer};
use crate::headsign::{HeadsignNormalizer, StopNameNormalizer};
use crate::merge::{
    MergeRule, MergeTable, MergeTableError, RouteDirectionMerger, community_transit_merge_rules,
};

/// Rejected rule book.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access rule book {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed rule book: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    /// Cleaning would rewrite its own output forever.
    #[error("abbreviation {short:?} matches its own phrases")]
    SelfMatchingAbbreviation { short: String },

    #[error(transparent)]
    MergeTable(#[from] MergeTableError),

    #[error(transparent)]
    ColorTable(#[from] ColorTableError),
}

/// Every rule table, as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleBook {
    pub agency_color: HexColor,
    pub palette: ColorPalette,
    pub route_classes: Vec<RouteClass>,
    pub short_name_classes: Vec<ShortNameClass>,
    pub merge_rules: Vec<MergeRule>,
    /// Applied to headsigns in this order.
    pub headsign_abbreviations: Vec<Abbreviation>,
    /// Regex matching the suffix that cross-feed merging appends to ids.
    pub merged_id_marker: String,
}

impl Default for RuleBook {
    fn default() -> Self {
        Self {
            agency_color: community_transit_agency_color(),
            palette: ColorPalette::default(),
            route_classes: community_transit_route_classes(),
            short_name_classes: community_transit_short_name_classes(),
            merge_rules: community_transit_merge_rules(),
            headsign_abbreviations: steps::default_headsign_abbreviations(),
            merged_id_marker: DEFAULT_MERGED_ID_MARKER.to_string(),
        }
    }
}

impl RuleBook {
    /// Parse a rule book. Missing fields take the built-in tables.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a rule book file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// The rule book as indented JSON, as `--dump-rules` prints it.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the rule book as JSON, e.g. as a starting point for edits.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json_pretty()?).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validate every table and compile the components.
    pub fn build(&self) -> Result<Canonicalizer, ConfigError> {
        let marker = MergedIdMarker::new(&self.merged_id_marker).map_err(|source| {
            ConfigError::InvalidPattern {
                pattern: self.merged_id_marker.clone(),
                source,
            }
        })?;

        for abbreviation in &self.headsign_abbreviations {
            check_abbreviation(abbreviation)?;
        }
        let headsigns = HeadsignNormalizer::new(&self.headsign_abbreviations).map_err(|source| {
            ConfigError::InvalidPattern {
                pattern: "headsign abbreviations".to_string(),
                source,
            }
        })?;

        let merger = RouteDirectionMerger::new(MergeTable::new(self.merge_rules.iter().cloned())?);

        let colors = RouteColorResolver::new(
            self.agency_color,
            self.palette.clone(),
            ColorTable::new(
                self.route_classes.iter().cloned(),
                self.short_name_classes.iter().cloned(),
            )?,
        );

        Ok(Canonicalizer::new(
            headsigns,
            StopNameNormalizer::new(),
            merger,
            colors,
            StopIdNormalizer::new(marker),
        ))
    }
}

fn check_abbreviation(abbreviation: &Abbreviation) -> Result<(), ConfigError> {
    let rule = CleaningRule::from_abbreviation(abbreviation).map_err(|source| {
        ConfigError::InvalidPattern {
            pattern: abbreviation.phrases.join(" | "),
            source,
        }
    })?;
    if rule.is_match(&abbreviation.short) {
        return Err(ConfigError::SelfMatchingAbbreviation {
            short: abbreviation.short.clone(),
        });
    }
    Ok(())
}
