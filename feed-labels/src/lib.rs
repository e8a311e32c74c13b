//! Display labels for a transit feed export.
//!
//! Raw GTFS values are messy: headsigns arrive in every casing with long
//! spellings, one direction of a route shows several destinations, route
//! colors are blank or white, and ids carry suffixes from cross-feed
//! merging. This crate turns them into the labels an app shows.
//!
//! Everything is driven by static rule tables. A value the tables don't
//! cover is a [`LabelError`], never a guess.

pub mod canon;
pub mod clean;
pub mod color;
pub mod config;
pub mod domain;
pub mod error;
pub mod headsign;
pub mod merge;

pub use canon::Canonicalizer;
pub use config::{ConfigError, RuleBook};
pub use error::LabelError;
