//! Community Transit merge rules.
//!
//! Every pair of headsigns the feed has produced for one direction of a
//! route. A new pair in the feed fails the merge until a rule is added here.

use super::rule::MergeRule;

const PARK_AND_RIDE: &str = "P&R";
const SLASH: &str = " / ";
const AND: &str = " & ";

const AURORA_VILLAGE: &str = "Aurora Vlg";
const ARLINGTON: &str = "Arlington";
const BOEING: &str = "Boeing";
const DARRINGTON: &str = "Darrington";
const EVERETT: &str = "Everett";
const GOLD_BAR: &str = "Gold Bar";
const GRANITE_FALLS: &str = "Granite Falls";
const HARDESON: &str = "Hardeson";
const LAKE_STEVENS: &str = "Lk Stevens";
const LYNNWOOD: &str = "Lynnwood";
const MARYSVILLE: &str = "Marysville";
const MC_COLLUM_PARK: &str = "McCollum Pk";
const MONROE: &str = "Monroe";
const SEAWAY_TC: &str = "Seaway TC";

/// Every headsign pair seen in the feed that needs a merge.
pub fn community_transit_merge_rules() -> Vec<MergeRule> {
    let mariner_park_and_ride = format!("Mariner {PARK_AND_RIDE}");
    let hardeson_road = format!("{HARDESON} Rd");
    let everett_slash_boeing = format!("{EVERETT}{SLASH}{BOEING}");
    let monroe_slash_gold_bar = format!("{MONROE}{SLASH}{GOLD_BAR}");
    let lynnwood_and_everett = format!("{LYNNWOOD}{AND}{EVERETT}");
    let aurora_village_station = format!("{AURORA_VILLAGE} Sta");
    let mc_collum_park_and_ride = format!("{MC_COLLUM_PARK} {PARK_AND_RIDE}");

    vec![
        MergeRule::new(105, &[&mariner_park_and_ride, HARDESON], HARDESON),
        MergeRule::new(105, &[&mariner_park_and_ride, &hardeson_road], &hardeson_road),
        MergeRule::new(230, &[ARLINGTON, DARRINGTON], DARRINGTON),
        MergeRule::new(270, &[BOEING, SEAWAY_TC, EVERETT], EVERETT),
        MergeRule::new(270, &[MONROE, GOLD_BAR], GOLD_BAR),
        MergeRule::new(271, &[&everett_slash_boeing, EVERETT], EVERETT),
        MergeRule::new(271, &[MONROE, &monroe_slash_gold_bar, GOLD_BAR], GOLD_BAR),
        MergeRule::new(
            280,
            &[BOEING, &everett_slash_boeing, SEAWAY_TC, EVERETT],
            EVERETT,
        ),
        MergeRule::new(280, &[LAKE_STEVENS, GRANITE_FALLS], GRANITE_FALLS),
        MergeRule::new(535, &[&lynnwood_and_everett, LYNNWOOD], LYNNWOOD),
        MergeRule::new(
            701,
            &[AURORA_VILLAGE, &aurora_village_station],
            &aurora_village_station,
        ),
        MergeRule::new(810, &[LYNNWOOD, &mc_collum_park_and_ride], &mc_collum_park_and_ride),
        MergeRule::new(821, &[LYNNWOOD, MARYSVILLE], MARYSVILLE),
    ]
}
