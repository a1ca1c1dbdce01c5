//! Per-route documented/undocumented listings.

use std::cmp::Ordering;

use serde::Serialize;

use crate::domain::RegionCode;
use crate::inventory::{InventoryIndex, RegionInventory, SystemInventory};
use crate::ranking::natural_cmp;
use crate::travel_log::TravelLog;

/// Whether one canonical route appears in a traveler's log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteStatus {
    pub region: RegionCode,
    pub designation: String,
    pub listed: bool,
    pub evidence: Option<String>,
}

impl RouteStatus {
    fn lookup(region: &RegionCode, designation: &str, log: &TravelLog) -> Self {
        Self {
            region: region.clone(),
            designation: designation.to_string(),
            listed: log.contains(region, designation),
            evidence: log.evidence(region, designation).map(str::to_string),
        }
    }
}

/// Every route of a system with its status.
///
/// Routes are ordered by region, then by their position in the region's
/// table, then naturally for routes the region table does not list.
pub fn system_route_statuses(
    system: &SystemInventory,
    index: &InventoryIndex,
    log: &TravelLog,
) -> Vec<RouteStatus> {
    let mut statuses: Vec<RouteStatus> = system
        .routes
        .travel_keys()
        .map(|(region, designation)| RouteStatus::lookup(region, designation, log))
        .collect();

    statuses.sort_by(|a, b| {
        a.region.cmp(&b.region).then_with(|| {
            let order = index.region(&a.region);
            canonical_cmp(order, &a.designation, &b.designation)
        })
    });
    statuses
}

/// Every route of a region with its status, in the region table's order.
pub fn region_route_statuses(region: &RegionInventory, log: &TravelLog) -> Vec<RouteStatus> {
    region
        .routes
        .travel_keys()
        .map(|(code, designation)| RouteStatus::lookup(code, designation, log))
        .collect()
}

/// Listed routes first by canonical position, unlisted ones after in natural order.
fn canonical_cmp(region: Option<&RegionInventory>, a: &str, b: &str) -> Ordering {
    let position = |designation: &str| region.and_then(|r| r.position(designation));
    match (position(a), position(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => natural_cmp(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::InventoryIndexBuilder;

    fn region(s: &str) -> RegionCode {
        RegionCode::parse(s).unwrap()
    }

    #[test]
    fn system_routes_follow_region_order() {
        let index = InventoryIndexBuilder::new()
            .system_table(
                "usai",
                "h\nI65;AL;I-65\nI10;FL;I-10\nI459;AL;I-459\nI10;AL;I-10\nI22;AL;I-22\n",
            )
            .region_table(region("AL"), "h\nI65;AL;I-65\nI10;AL;I-10\n")
            .build();
        let log = TravelLog::parse("t", "AL I-10 proof.jpg\n");

        let statuses = system_route_statuses(index.system("usai").unwrap(), &index, &log);
        let labels: Vec<_> = statuses
            .iter()
            .map(|s| format!("{} {}", s.region, s.designation))
            .collect();
        assert_eq!(
            labels,
            vec!["AL I-65", "AL I-10", "AL I-22", "AL I-459", "FL I-10"]
        );

        assert!(statuses[1].listed);
        assert_eq!(statuses[1].evidence.as_deref(), Some("proof.jpg"));
        assert!(!statuses[0].listed);
        assert_eq!(statuses[0].evidence, None);
    }

    #[test]
    fn region_routes_keep_table_order() {
        let index = InventoryIndexBuilder::new()
            .region_table(region("GA"), "h\nA;GA;75\nB;GA;9\nC;GA;75\n")
            .build();
        let log = TravelLog::parse("t", "GA 9\n");

        let statuses = region_route_statuses(index.region(&region("GA")).unwrap(), &log);
        let rows: Vec<_> = statuses
            .iter()
            .map(|s| (s.designation.as_str(), s.listed))
            .collect();
        assert_eq!(rows, vec![("75", false), ("9", true)]);
    }
}
