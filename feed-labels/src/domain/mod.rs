//! Identifier types for feed records.
//!
//! Route and stop ids arrive as strings that may carry a cross-feed merge
//! marker. The types here only exist once that marker is gone and the
//! remainder parsed as a number.

mod marker;
mod route;
mod stop_id;

pub use marker::{DEFAULT_MERGED_ID_MARKER, MergedIdMarker};
pub use route::{Direction, RouteDirectionKey, RouteId};
pub use stop_id::{StopId, StopIdNormalizer};
