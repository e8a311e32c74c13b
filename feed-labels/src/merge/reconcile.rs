//! One label per route direction.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use tracing::debug;

use super::RouteDirectionMerger;
use crate::domain::RouteDirectionKey;
use crate::error::LabelError;

/// Collects the canonical label of every route direction seen so far.
///
/// The first label observed for a direction is stored as-is. A later,
/// different label is merged with the stored one and the result replaces
/// it, so after all trips are observed each direction has a single label.
#[derive(Debug)]
pub struct DirectionReconciler<'m> {
    merger: &'m RouteDirectionMerger,
    labels: BTreeMap<RouteDirectionKey, String>,
}

impl<'m> DirectionReconciler<'m> {
    /// An empty collector.
    pub fn new(merger: &'m RouteDirectionMerger) -> Self {
        Self {
            merger,
            labels: BTreeMap::new(),
        }
    }

    /// Record `label` for `key` and return the direction's current label.
    ///
    /// On error the stored label is left unchanged.
    pub fn observe(&mut self, key: RouteDirectionKey, label: &str) -> Result<&str, LabelError> {
        match self.labels.entry(key) {
            Entry::Vacant(entry) => Ok(entry.insert(label.to_string()).as_str()),
            Entry::Occupied(mut entry) => {
                if entry.get() != label {
                    let merged = self.merger.merge(key.route_id, entry.get(), label)?;
                    debug!(
                        key = %key,
                        previous = %entry.get(),
                        observed = label,
                        merged = %merged,
                        "Reconciled direction label"
                    );
                    entry.insert(merged);
                }
                Ok(entry.into_mut().as_str())
            }
        }
    }

    /// Current label for `key`, if any trip was observed for it.
    pub fn label(&self, key: &RouteDirectionKey) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    /// Number of route directions seen so far.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// One label per observed route direction.
    pub fn into_labels(self) -> BTreeMap<RouteDirectionKey, String> {
        self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Direction, RouteId};
    use crate::merge::{MergeTable, community_transit_merge_rules};

    fn merger() -> RouteDirectionMerger {
        RouteDirectionMerger::new(MergeTable::new(community_transit_merge_rules()).unwrap())
    }

    fn key(route: u32, direction: Direction) -> RouteDirectionKey {
        RouteDirectionKey::new(RouteId::new(route), direction)
    }

    #[test]
    fn first_label_is_stored() {
        let merger = merger();
        let mut reconciler = DirectionReconciler::new(&merger);
        assert!(reconciler.is_empty());
        assert_eq!(
            reconciler.observe(key(821, Direction::Zero), "Lynnwood").unwrap(),
            "Lynnwood"
        );
        assert_eq!(reconciler.len(), 1);
        assert_eq!(reconciler.label(&key(821, Direction::Zero)), Some("Lynnwood"));
        assert_eq!(reconciler.label(&key(821, Direction::One)), None);
    }

    #[test]
    fn three_variants_fold_to_gold_bar() {
        let merger = merger();
        let mut reconciler = DirectionReconciler::new(&merger);
        let k = key(271, Direction::One);
        reconciler.observe(k, "Monroe").unwrap();
        assert_eq!(reconciler.observe(k, "Monroe / Gold Bar").unwrap(), "Gold Bar");
        assert_eq!(reconciler.observe(k, "Gold Bar").unwrap(), "Gold Bar");
        assert_eq!(reconciler.observe(k, "Monroe").unwrap(), "Gold Bar");
    }

    #[test]
    fn directions_are_independent() {
        let merger = merger();
        let mut reconciler = DirectionReconciler::new(&merger);
        reconciler.observe(key(271, Direction::Zero), "Everett").unwrap();
        reconciler.observe(key(271, Direction::One), "Monroe").unwrap();
        reconciler
            .observe(key(271, Direction::Zero), "Everett / Boeing")
            .unwrap();

        let labels = reconciler.into_labels();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[&key(271, Direction::Zero)], "Everett");
        assert_eq!(labels[&key(271, Direction::One)], "Monroe");
    }

    #[test]
    fn unmatched_leaves_label_alone() {
        let merger = merger();
        let mut reconciler = DirectionReconciler::new(&merger);
        let k = key(271, Direction::One);
        reconciler.observe(k, "Monroe").unwrap();
        let err = reconciler.observe(k, "Unexpected Value").unwrap_err();
        assert!(matches!(err, LabelError::UnmatchedMergeRule { .. }));
        assert_eq!(reconciler.label(&k), Some("Monroe"));
    }
}
