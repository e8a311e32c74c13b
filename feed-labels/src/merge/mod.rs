//! Directional headsign merging.
//!
//! Trips of one route and direction sometimes carry different headsigns for
//! what riders see as the same destination ("Monroe" and "Monroe / Gold
//! Bar"). The merger picks the one label to show for both. There is no
//! heuristic: every pair must be listed in the [`MergeTable`], and an unlisted
//! pair is an error so that a feed change is noticed rather than guessed at.

mod reconcile;
mod rule;
mod table;

pub use reconcile::DirectionReconciler;
pub use rule::{MergeRule, MergeTable, MergeTableError};
pub use table::community_transit_merge_rules;

use tracing::debug;

use crate::domain::RouteId;
use crate::error::LabelError;

/// Resolves two headsign variants of a route to one canonical label.
#[derive(Debug, Clone, Default)]
pub struct RouteDirectionMerger {
    table: MergeTable,
}

impl RouteDirectionMerger {
    /// A merger over an already-validated table.
    pub fn new(table: MergeTable) -> Self {
        Self { table }
    }

    /// The canonical label for `a` and `b` on `route_id`.
    ///
    /// Rules are checked in declaration order and the first whose variants
    /// include both labels wins. Equal labels need no rule.
    pub fn merge(&self, route_id: RouteId, a: &str, b: &str) -> Result<String, LabelError> {
        if a == b {
            return Ok(a.to_string());
        }

        let rule = self
            .table
            .rules_for(route_id)
            .iter()
            .find(|rule| rule.accepts(a, b))
            .ok_or_else(|| LabelError::UnmatchedMergeRule {
                route_id,
                first: a.to_string(),
                second: b.to_string(),
            })?;

        debug!(
            route = %route_id,
            first = a,
            second = b,
            canonical = %rule.canonical,
            "Merged headsigns"
        );
        Ok(rule.canonical.clone())
    }

    /// The rules this merger consults.
    pub fn table(&self) -> &MergeTable {
        &self.table
    }
}
