//! Route and direction identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::marker::{MergedIdMarker, parse_digits};
use crate::error::LabelError;

/// A numeric route id.
///
/// # Examples
///
/// ```
/// use feed_labels::domain::{MergedIdMarker, RouteId};
///
/// let marker = MergedIdMarker::default();
/// let id = RouteId::parse_feed("271-MERGED", &marker).unwrap();
/// assert_eq!(id, RouteId::new(271));
/// assert_eq!(id.to_string(), "271");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(u32);

impl RouteId {
    pub const fn new(id: u32) -> Self {
        RouteId(id)
    }

    /// Parse a route id as it appears in the feed.
    ///
    /// The merge marker is stripped before parsing.
    pub fn parse_feed(raw: &str, marker: &MergedIdMarker) -> Result<Self, LabelError> {
        parse_digits(&marker.strip(raw.trim()))
            .map(RouteId)
            .ok_or_else(|| LabelError::MalformedRouteId {
                raw: raw.to_string(),
            })
    }

    /// The numeric id.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// GTFS `direction_id`: one of the two travel directions of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Direction {
    Zero,
    One,
}

impl Direction {
    /// Convert the feed flag. Only 0 and 1 are directions.
    pub fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            0 => Some(Direction::Zero),
            1 => Some(Direction::One),
            _ => None,
        }
    }

    /// The feed's `direction_id` value.
    pub fn flag(self) -> u8 {
        match self {
            Direction::Zero => 0,
            Direction::One => 1,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = String;

    fn try_from(flag: u8) -> Result<Self, Self::Error> {
        Direction::from_flag(flag).ok_or_else(|| format!("invalid direction flag {flag}"))
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction.flag()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flag())
    }
}

/// One logical direction of one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RouteDirectionKey {
    pub route_id: RouteId,
    pub direction: Direction,
}

impl RouteDirectionKey {
    /// Key for `direction` of `route_id`.
    pub fn new(route_id: RouteId, direction: Direction) -> Self {
        Self {
            route_id,
            direction,
        }
    }
}

impl fmt::Display for RouteDirectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.route_id, self.direction)
    }
}
