//! Merge rules and the per-route table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::RouteId;

/// Rejected merge table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeTableError {
    /// A rule with no acceptable variants can never match.
    #[error("merge rule for route {route_id} has no variants")]
    EmptyRule { route_id: RouteId },

    /// The canonical label must itself be acceptable, or merging a third
    /// variant into an already-merged label would fail.
    #[error("merge rule for route {route_id}: canonical {canonical:?} is not one of its variants")]
    CanonicalNotInVariants { route_id: RouteId, canonical: String },
}

/// Headsign variants of one route that all mean the same destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRule {
    pub route_id: RouteId,
    pub variants: Vec<String>,
    pub canonical: String,
}

impl MergeRule {
    /// Unvalidated rule; [`MergeTable::new`] checks it.
    pub fn new(route_id: u32, variants: &[&str], canonical: &str) -> Self {
        Self {
            route_id: RouteId::new(route_id),
            variants: variants.iter().map(|v| v.to_string()).collect(),
            canonical: canonical.to_string(),
        }
    }

    /// Both labels are acceptable variants of this rule.
    pub fn accepts(&self, a: &str, b: &str) -> bool {
        self.variants.iter().any(|v| v == a) && self.variants.iter().any(|v| v == b)
    }

    fn validate(&self) -> Result<(), MergeTableError> {
        if self.variants.is_empty() {
            return Err(MergeTableError::EmptyRule {
                route_id: self.route_id,
            });
        }
        if !self.variants.contains(&self.canonical) {
            return Err(MergeTableError::CanonicalNotInVariants {
                route_id: self.route_id,
                canonical: self.canonical.clone(),
            });
        }
        Ok(())
    }
}

/// Merge rules grouped by route, each group in declaration order.
#[derive(Debug, Clone, Default)]
pub struct MergeTable {
    routes: BTreeMap<RouteId, Vec<MergeRule>>,
}

impl MergeTable {
    /// Group `rules` by route, keeping their order.
    ///
    /// Rejects a rule with no variants, or whose canonical label is not one
    /// of its variants.
    pub fn new(rules: impl IntoIterator<Item = MergeRule>) -> Result<Self, MergeTableError> {
        let mut routes: BTreeMap<RouteId, Vec<MergeRule>> = BTreeMap::new();
        for rule in rules {
            rule.validate()?;
            routes.entry(rule.route_id).or_default().push(rule);
        }
        Ok(Self { routes })
    }

    /// Rules for `route_id`, in declaration order.
    pub fn rules_for(&self, route_id: RouteId) -> &[MergeRule] {
        self.routes
            .get(&route_id)
            .map(|rules| rules.as_slice())
            .unwrap_or(&[])
    }

    /// Routes that have at least one rule.
    pub fn routes(&self) -> impl Iterator<Item = RouteId> + '_ {
        self.routes.keys().copied()
    }

    /// Every rule, grouped by route.
    pub fn iter(&self) -> impl Iterator<Item = &MergeRule> {
        self.routes.values().flatten()
    }

    /// Number of rules across all routes.
    pub fn len(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_subset_of_variants() {
        let rule = MergeRule::new(271, &["Monroe", "Monroe / Gold Bar", "Gold Bar"], "Gold Bar");
        assert!(rule.accepts("Monroe", "Monroe / Gold Bar"));
        assert!(rule.accepts("Gold Bar", "Monroe"));
        assert!(rule.accepts("Monroe", "Monroe"));
        assert!(!rule.accepts("Monroe", "Everett"));
        assert!(!rule.accepts("monroe", "Gold Bar"));
    }

    #[test]
    fn table_groups_by_route_in_order() {
        let table = MergeTable::new([
            MergeRule::new(105, &["Mariner P&R", "Hardeson"], "Hardeson"),
            MergeRule::new(230, &["Arlington", "Darrington"], "Darrington"),
            MergeRule::new(105, &["Mariner P&R", "Hardeson Rd"], "Hardeson Rd"),
        ])
        .unwrap();

        let rules = table.rules_for(RouteId::new(105));
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].canonical, "Hardeson");
        assert_eq!(rules[1].canonical, "Hardeson Rd");
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.routes().collect::<Vec<_>>(),
            vec![RouteId::new(105), RouteId::new(230)]
        );
        assert_eq!(table.iter().count(), 3);
    }

    #[test]
    fn unknown_route_has_no_rules() {
        let table = MergeTable::default();
        assert!(table.is_empty());
        assert!(table.rules_for(RouteId::new(999)).is_empty());
    }

    #[test]
    fn reject_empty_rule() {
        let err = MergeTable::new([MergeRule::new(105, &[], "Hardeson")]).unwrap_err();
        assert_eq!(
            err,
            MergeTableError::EmptyRule {
                route_id: RouteId::new(105)
            }
        );
    }

    #[test]
    fn reject_canonical_outside_variants() {
        let err =
            MergeTable::new([MergeRule::new(821, &["Lynnwood", "Marysville"], "Smokey Pt")])
                .unwrap_err();
        assert_eq!(
            err.to_string(),
            "merge rule for route 821: canonical \"Smokey Pt\" is not one of its variants"
        );
    }

    #[test]
    fn rule_serde_shape() {
        let rule = MergeRule::new(230, &["Arlington", "Darrington"], "Darrington");
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "route_id": 230,
                "variants": ["Arlington", "Darrington"],
                "canonical": "Darrington"
            })
        );
    }
}
