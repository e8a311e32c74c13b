//! Route color overrides.
//!
//! Feeds leave most route colors blank or white. Those routes get a color
//! from their service class instead, and a route with no class is an error
//! so that a new route in the feed is classified by hand.

mod hex;
mod table;

pub use hex::{HexColor, InvalidHexColor};
pub use table::{
    community_transit_agency_color, community_transit_palette, community_transit_route_classes,
    community_transit_short_name_classes,
};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::RouteId;
use crate::error::LabelError;

/// Service class of a route, for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteColorClass {
    Local,
    Commuter,
    RegionalExpress,
    SwiftBlue,
    SwiftGreen,
}

/// One color per class. Local routes keep the agency color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorPalette {
    pub local: Option<HexColor>,
    pub commuter: HexColor,
    pub regional_express: HexColor,
    pub swift_blue: HexColor,
    pub swift_green: HexColor,
}

impl ColorPalette {
    /// Color for `class`, or `None` to keep the agency color.
    pub fn color_for(&self, class: RouteColorClass) -> Option<HexColor> {
        match class {
            RouteColorClass::Local => self.local,
            RouteColorClass::Commuter => Some(self.commuter),
            RouteColorClass::RegionalExpress => Some(self.regional_express),
            RouteColorClass::SwiftBlue => Some(self.swift_blue),
            RouteColorClass::SwiftGreen => Some(self.swift_green),
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        community_transit_palette()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteClass {
    pub route_id: RouteId,
    pub class: RouteColorClass,
}

impl RouteClass {
    /// Classify route `route_id` as `class`.
    pub fn new(route_id: u32, class: RouteColorClass) -> Self {
        Self {
            route_id: RouteId::new(route_id),
            class,
        }
    }
}

/// Classification by route short name, for routes whose id changes
/// between feed versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortNameClass {
    pub short_name: String,
    pub class: RouteColorClass,
}

impl ShortNameClass {
    /// Classify routes named `short_name` as `class`.
    pub fn new(short_name: &str, class: RouteColorClass) -> Self {
        Self {
            short_name: short_name.to_string(),
            class,
        }
    }
}

/// Rejected color classification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorTableError {
    #[error("route {route_id} is classified more than once")]
    DuplicateRoute { route_id: RouteId },

    #[error("short name {short_name:?} is classified more than once")]
    DuplicateShortName { short_name: String },
}

/// Route and short-name lookups for [`RouteColorClass`].
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    routes: BTreeMap<RouteId, RouteColorClass>,
    // Keyed by trimmed, lowercased short name.
    short_names: BTreeMap<String, RouteColorClass>,
}

impl ColorTable {
    /// Index classifications by route id and by short name.
    ///
    /// Short names are compared trimmed and case-insensitively, so two
    /// entries differing only in case are duplicates.
    pub fn new(
        routes: impl IntoIterator<Item = RouteClass>,
        short_names: impl IntoIterator<Item = ShortNameClass>,
    ) -> Result<Self, ColorTableError> {
        let mut table = ColorTable::default();

        for entry in routes {
            if table.routes.insert(entry.route_id, entry.class).is_some() {
                return Err(ColorTableError::DuplicateRoute {
                    route_id: entry.route_id,
                });
            }
        }

        for entry in short_names {
            let key = short_name_key(&entry.short_name);
            if table.short_names.insert(key, entry.class).is_some() {
                return Err(ColorTableError::DuplicateShortName {
                    short_name: entry.short_name,
                });
            }
        }

        Ok(table)
    }

    /// Class of a route, by id first and then by short name.
    pub fn classify(&self, route_id: RouteId, short_name: &str) -> Option<RouteColorClass> {
        self.routes
            .get(&route_id)
            .or_else(|| self.short_names.get(&short_name_key(short_name)))
            .copied()
    }

    /// Route and short-name entries together.
    pub fn len(&self) -> usize {
        self.routes.len() + self.short_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty() && self.short_names.is_empty()
    }
}

fn short_name_key(short_name: &str) -> String {
    short_name.trim().to_lowercase()
}

/// A feed color worth keeping: present, non-empty and not white.
fn usable_feed_color(feed_color: Option<&str>) -> Option<&str> {
    let color = feed_color?;
    let digits = color.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if digits.is_empty() || digits.eq_ignore_ascii_case(HexColor::WHITE.as_str()) {
        None
    } else {
        Some(color)
    }
}

/// Picks the color shown for a route.
#[derive(Debug, Clone)]
pub struct RouteColorResolver {
    agency_color: HexColor,
    palette: ColorPalette,
    table: ColorTable,
}

impl RouteColorResolver {
    /// Resolver over an already-validated table.
    pub fn new(agency_color: HexColor, palette: ColorPalette, table: ColorTable) -> Self {
        Self {
            agency_color,
            palette,
            table,
        }
    }

    /// Color for a route, or `None` for the agency default.
    ///
    /// A usable feed color wins and is returned as given. Otherwise the route
    /// is classified, and an unclassified route is an error.
    pub fn resolve_color(
        &self,
        route_id: RouteId,
        short_name: &str,
        feed_color: Option<&str>,
    ) -> Result<Option<String>, LabelError> {
        if let Some(color) = usable_feed_color(feed_color) {
            return Ok(Some(color.to_string()));
        }

        let class = self.table.classify(route_id, short_name).ok_or_else(|| {
            LabelError::UnclassifiedRoute {
                route_id,
                short_name: short_name.to_string(),
            }
        })?;

        Ok(self
            .palette
            .color_for(class)
            .map(|color| color.as_str().to_string()))
    }

    /// Color of routes with no override.
    pub fn agency_color(&self) -> HexColor {
        self.agency_color
    }

    /// Colors per route class.
    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    /// The route classification.
    pub fn table(&self) -> &ColorTable {
        &self.table
    }
}

impl Default for RouteColorResolver {
    fn default() -> Self {
        let table = ColorTable::new(
            community_transit_route_classes(),
            community_transit_short_name_classes(),
        )
        .expect("built-in color table has no duplicates");
        Self::new(
            community_transit_agency_color(),
            community_transit_palette(),
            table,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(
        route: u32,
        short_name: &str,
        feed: Option<&str>,
    ) -> Result<Option<String>, LabelError> {
        RouteColorResolver::default().resolve_color(RouteId::new(route), short_name, feed)
    }

    #[test]
    fn feed_color_wins() {
        assert_eq!(resolve(999, "999", Some("123ABC")).unwrap().as_deref(), Some("123ABC"));
        assert_eq!(resolve(402, "402", Some("#abcdef")).unwrap().as_deref(), Some("#abcdef"));
    }

    #[test]
    fn white_or_blank_feed_color_is_ignored() {
        assert_eq!(resolve(402, "402", Some("FFFFFF")).unwrap().as_deref(), Some("F6861F"));
        assert_eq!(resolve(402, "402", Some("ffffff")).unwrap().as_deref(), Some("F6861F"));
        assert_eq!(resolve(402, "402", Some("")).unwrap().as_deref(), Some("F6861F"));
        assert_eq!(resolve(402, "402", Some("  ")).unwrap().as_deref(), Some("F6861F"));
        assert_eq!(resolve(402, "402", None).unwrap().as_deref(), Some("F6861F"));
    }

    #[test]
    fn classes_map_through_palette() {
        assert_eq!(resolve(101, "101", None).unwrap(), None);
        assert_eq!(resolve(512, "512", None).unwrap().as_deref(), Some("8D8687"));
        assert_eq!(resolve(701, "Swift Blue", None).unwrap().as_deref(), Some("0070C0"));
        assert_eq!(resolve(702, "Swift Green", None).unwrap().as_deref(), Some("2DA343"));
    }

    #[test]
    fn short_name_fallback() {
        assert_eq!(resolve(7001, "Swift Blue", None).unwrap().as_deref(), Some("0070C0"));
        assert_eq!(resolve(7002, " swift green ", None).unwrap().as_deref(), Some("2DA343"));
    }

    #[test]
    fn unclassified_route_is_error() {
        let err = resolve(999, "999", None).unwrap_err();
        assert_eq!(
            err,
            LabelError::UnclassifiedRoute {
                route_id: RouteId::new(999),
                short_name: "999".into(),
            }
        );
        // A feed color never needs a classification.
        assert!(resolve(999, "999", Some("000000")).is_ok());
    }

    #[test]
    fn reject_duplicates() {
        let err = ColorTable::new(
            [
                RouteClass::new(101, RouteColorClass::Local),
                RouteClass::new(101, RouteColorClass::Commuter),
            ],
            Vec::<ShortNameClass>::new(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "route 101 is classified more than once");

        let err = ColorTable::new(
            Vec::<RouteClass>::new(),
            [
                ShortNameClass::new("Swift Blue", RouteColorClass::SwiftBlue),
                ShortNameClass::new("SWIFT BLUE", RouteColorClass::SwiftGreen),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ColorTableError::DuplicateShortName {
                short_name: "SWIFT BLUE".into()
            }
        );
    }

    #[test]
    fn default_table_is_complete() {
        let resolver = RouteColorResolver::default();
        assert_eq!(resolver.table().len(), 55);
        assert_eq!(resolver.agency_color().as_str(), "1476C6");
    }

    #[test]
    fn class_serde_names() {
        assert_eq!(
            serde_json::to_string(&RouteColorClass::RegionalExpress).unwrap(),
            "\"regional_express\""
        );
        let palette: ColorPalette = serde_json::from_str(r#"{"commuter": "000000"}"#).unwrap();
        assert_eq!(palette.commuter.as_str(), "000000");
        assert_eq!(palette.swift_blue.as_str(), "0070C0");
    }
}
