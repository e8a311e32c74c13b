//! All components, compiled from one rule book.

use crate::color::{HexColor, RouteColorResolver};
use crate::domain::{Direction, RouteId, StopId, StopIdNormalizer};
use crate::error::LabelError;
use crate::headsign::{HeadsignNormalizer, StopNameNormalizer, TripHeadsign};
use crate::merge::{
    DirectionReconciler, MergeTable, RouteDirectionMerger, community_transit_merge_rules,
};

/// Entry point for a feed export.
///
/// Built once, by [`RuleBook::build`](crate::config::RuleBook::build) or
/// [`Default`] for the built-in tables, and then shared by reference. Nothing
/// in it changes after construction.
///
/// # Examples
///
/// ```
/// use feed_labels::canon::Canonicalizer;
/// use feed_labels::domain::RouteId;
///
/// let canon = Canonicalizer::default();
/// let a = canon.normalize_headsign("Monroe");
/// let b = canon.normalize_headsign("monroe/gold bar");
/// assert_eq!(canon.merge_headsigns(RouteId::new(271), &a, &b).unwrap(), "Gold Bar");
/// ```
#[derive(Debug, Clone)]
pub struct Canonicalizer {
    headsigns: HeadsignNormalizer,
    stop_names: StopNameNormalizer,
    merger: RouteDirectionMerger,
    colors: RouteColorResolver,
    stop_ids: StopIdNormalizer,
}

impl Canonicalizer {
    /// Bundle already-built components. Prefer `RuleBook::build`.
    pub fn new(
        headsigns: HeadsignNormalizer,
        stop_names: StopNameNormalizer,
        merger: RouteDirectionMerger,
        colors: RouteColorResolver,
        stop_ids: StopIdNormalizer,
    ) -> Self {
        Self {
            headsigns,
            stop_names,
            merger,
            colors,
            stop_ids,
        }
    }

    /// Display label for a raw trip headsign.
    pub fn normalize_headsign(&self, raw: &str) -> String {
        self.headsigns.normalize(raw)
    }

    /// A raw headsign cleaned and paired with its direction.
    pub fn normalize_trip(&self, raw: &str, direction: Direction) -> TripHeadsign {
        self.headsigns.normalize_trip(raw, direction)
    }

    /// Display label for a raw stop name.
    pub fn normalize_stop_name(&self, raw: &str) -> String {
        self.stop_names.normalize(raw)
    }

    /// Canonical label for two headsigns of one route.
    ///
    /// Fails with [`LabelError::UnmatchedMergeRule`] when no rule covers
    /// the pair.
    pub fn merge_headsigns(
        &self,
        route_id: RouteId,
        a: &str,
        b: &str,
    ) -> Result<String, LabelError> {
        self.merger.merge(route_id, a, b)
    }

    /// A fresh per-direction label collector backed by this merger.
    pub fn reconciler(&self) -> DirectionReconciler<'_> {
        DirectionReconciler::new(&self.merger)
    }

    /// Route color, or `None` for the agency default.
    pub fn resolve_color(
        &self,
        route_id: RouteId,
        short_name: &str,
        feed_color: Option<&str>,
    ) -> Result<Option<String>, LabelError> {
        self.colors.resolve_color(route_id, short_name, feed_color)
    }

    /// Color of routes that keep the agency default.
    pub fn agency_color(&self) -> HexColor {
        self.colors.agency_color()
    }

    /// Numeric stop id, with any merge marker stripped.
    pub fn normalize_stop_id(&self, raw: &str) -> Result<StopId, LabelError> {
        self.stop_ids.normalize(raw)
    }

    /// Raw stop id without its merge marker, for the original-id column.
    pub fn clean_original_id(&self, raw: &str) -> String {
        self.stop_ids.clean_original_id(raw)
    }

    /// Parse a feed route id, merge marker and all.
    pub fn parse_route_id(&self, raw: &str) -> Result<RouteId, LabelError> {
        RouteId::parse_feed(raw, self.stop_ids.marker())
    }

    /// The headsign normalizer.
    pub fn headsigns(&self) -> &HeadsignNormalizer {
        &self.headsigns
    }

    /// The merger, with its rule table.
    pub fn merger(&self) -> &RouteDirectionMerger {
        &self.merger
    }

    /// The color resolver, with its palette and table.
    pub fn colors(&self) -> &RouteColorResolver {
        &self.colors
    }
}

impl Default for Canonicalizer {
    fn default() -> Self {
        let table = MergeTable::new(community_transit_merge_rules())
            .expect("built-in merge rules are valid");
        Self::new(
            HeadsignNormalizer::default(),
            StopNameNormalizer::default(),
            RouteDirectionMerger::new(table),
            RouteColorResolver::default(),
            StopIdNormalizer::default(),
        )
    }
}
