//! Rule-table miss errors.
//!
//! Every variant means the static tables no longer cover the feed. None of
//! them are transient: the fix is a new table entry, so each variant carries
//! enough of the offending record to write that entry.

use crate::domain::RouteId;

/// A feed value that the rule tables do not cover.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    /// Two headsign variants of one route have no merge rule.
    #[error("unexpected trips to merge on route {route_id}: {first:?} & {second:?}")]
    UnmatchedMergeRule {
        route_id: RouteId,
        first: String,
        second: String,
    },

    /// Route has no color classification.
    #[error("unexpected route color for route {route_id} ({short_name:?})")]
    UnclassifiedRoute { route_id: RouteId, short_name: String },

    /// Stop id is not numeric, even after stripping the merge marker.
    #[error("unexpected stop id {raw:?}: {reason}")]
    MalformedStopId { raw: String, reason: &'static str },

    /// Route id is not numeric, even after stripping the merge marker.
    #[error("unexpected route id {raw:?}")]
    MalformedRouteId { raw: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = LabelError::UnmatchedMergeRule {
            route_id: RouteId::new(271),
            first: "Monroe".into(),
            second: "Unexpected Value".into(),
        };
        assert_eq!(
            err.to_string(),
            "unexpected trips to merge on route 271: \"Monroe\" & \"Unexpected Value\""
        );

        let err = LabelError::UnclassifiedRoute {
            route_id: RouteId::new(999),
            short_name: "999".into(),
        };
        assert_eq!(
            err.to_string(),
            "unexpected route color for route 999 (\"999\")"
        );

        let err = LabelError::MalformedStopId {
            raw: "".into(),
            reason: "empty",
        };
        assert_eq!(err.to_string(), "unexpected stop id \"\": empty");

        let err = LabelError::MalformedRouteId { raw: "X1".into() };
        assert_eq!(err.to_string(), "unexpected route id \"X1\"");
    }
}
