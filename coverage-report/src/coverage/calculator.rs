//! Matching travel logs against inventories.
//!
//! For every node, `matched` counts the node's routes whose travel-log
//! tuple the traveler documented, and `total` counts the node's routes.
//! Both are taken over the node's own deduplicated keys, so a node is
//! always matched in the scheme it was deduplicated with.

use std::collections::BTreeMap;

use tracing::debug;

use super::result::CoverageResult;
use crate::domain::{RegionCode, RouteIdentity};
use crate::inventory::{CountyInventory, InventoryIndex, RegionInventory, RouteSet, SystemInventory};
use crate::travel_log::TravelLog;

/// Count `(matched, total)` for one route set.
pub fn count_matches<K: RouteIdentity>(routes: &RouteSet<K>, log: &TravelLog) -> (usize, usize) {
    let matched = routes
        .travel_keys()
        .filter(|(region, designation)| log.contains(region, designation))
        .count();
    (matched, routes.len())
}

pub fn system_coverage(system: &SystemInventory, log: &TravelLog) -> CoverageResult {
    let (matched, total) = count_matches(&system.routes, log);
    CoverageResult::new(&system.id, system.label(), matched, total)
}

pub fn region_coverage(region: &RegionInventory, log: &TravelLog) -> CoverageResult {
    let (matched, total) = count_matches(&region.routes, log);
    CoverageResult::new(region.region.as_str(), region.label(), matched, total)
}

pub fn county_coverage(county: &CountyInventory, log: &TravelLog) -> CoverageResult {
    let (matched, total) = count_matches(&county.routes, log);
    CoverageResult::new(&county.county, &county.county, matched, total)
}

/// Every coverage result for one traveler, in inventory order.
#[derive(Debug, Clone)]
pub struct TravelerCoverage {
    pub traveler: String,
    /// One result per system, ordered by system id.
    pub systems: Vec<CoverageResult>,
    /// One result per region, ordered by region code.
    pub regions: Vec<CoverageResult>,
    /// County results grouped by region, each ordered by county name.
    pub counties: BTreeMap<RegionCode, Vec<CoverageResult>>,
}

/// Computes coverage of travel logs against one inventory index.
#[derive(Debug, Clone, Copy)]
pub struct CoverageCalculator<'a> {
    index: &'a InventoryIndex,
}

impl<'a> CoverageCalculator<'a> {
    pub fn new(index: &'a InventoryIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &'a InventoryIndex {
        self.index
    }

    /// Coverage of every node for one traveler.
    pub fn traveler(&self, log: &TravelLog) -> TravelerCoverage {
        let coverage = TravelerCoverage {
            traveler: log.traveler().to_string(),
            systems: self.systems(log),
            regions: self.regions(log),
            counties: self.counties(log),
        };
        debug!(
            traveler = %coverage.traveler,
            systems = coverage.systems.len(),
            regions = coverage.regions.len(),
            "computed coverage"
        );
        coverage
    }

    pub fn systems(&self, log: &TravelLog) -> Vec<CoverageResult> {
        self.index
            .systems()
            .map(|system| system_coverage(system, log))
            .collect()
    }

    pub fn regions(&self, log: &TravelLog) -> Vec<CoverageResult> {
        self.index
            .regions()
            .map(|region| region_coverage(region, log))
            .collect()
    }

    pub fn counties(&self, log: &TravelLog) -> BTreeMap<RegionCode, Vec<CoverageResult>> {
        let mut grouped: BTreeMap<RegionCode, Vec<CoverageResult>> = BTreeMap::new();
        for county in self.index.counties() {
            grouped
                .entry(county.region.clone())
                .or_default()
                .push(county_coverage(county, log));
        }
        grouped
    }
}
