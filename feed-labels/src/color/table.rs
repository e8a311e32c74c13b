//! Community Transit route classification.

use super::{ColorPalette, HexColor, RouteClass, RouteColorClass, ShortNameClass};

const LOCAL: &[u32] = &[
    101, 105, 106, 109, 111, 112, 113, 115, 116, 119, 120, 130, 196, 201, 202, 209, 220, 222, 227,
    230, 240, 247, 270, 271, 277, 280,
];

const COMMUTER: &[u32] = &[
    402, 405, 410, 412, 413, 415, 416, 417, 421, 422, 424, 425, 435, 810, 821, 855, 860, 871, 880,
];

const REGIONAL_EXPRESS: &[u32] = &[510, 511, 512, 513, 532, 535];

const SWIFT_BLUE: &[u32] = &[701];

const SWIFT_GREEN: &[u32] = &[702];

/// Agency base color, used wherever a route has no override.
pub fn community_transit_agency_color() -> HexColor {
    HexColor(*b"1476C6")
}

/// Local routes keep the agency color.
pub fn community_transit_palette() -> ColorPalette {
    ColorPalette {
        local: None,
        commuter: HexColor(*b"F6861F"),
        regional_express: HexColor(*b"8D8687"),
        swift_blue: HexColor(*b"0070C0"),
        swift_green: HexColor(*b"2DA343"),
    }
}

/// Classification of every route id in the feed.
pub fn community_transit_route_classes() -> Vec<RouteClass> {
    [
        (LOCAL, RouteColorClass::Local),
        (COMMUTER, RouteColorClass::Commuter),
        (REGIONAL_EXPRESS, RouteColorClass::RegionalExpress),
        (SWIFT_BLUE, RouteColorClass::SwiftBlue),
        (SWIFT_GREEN, RouteColorClass::SwiftGreen),
    ]
    .into_iter()
    .flat_map(|(ids, class)| ids.iter().map(move |&id| RouteClass::new(id, class)))
    .collect()
}

/// Swift lines, whose ids change between feed versions.
pub fn community_transit_short_name_classes() -> Vec<ShortNameClass> {
    vec![
        ShortNameClass::new("Swift Blue", RouteColorClass::SwiftBlue),
        ShortNameClass::new("Swift Green", RouteColorClass::SwiftGreen),
    ]
}
