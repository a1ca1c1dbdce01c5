//! Coverage of inventories by travel logs.
//!
//! For each hierarchy node and traveler this module answers: how many of
//! the node's canonical routes has the traveler documented?

mod calculator;
mod result;
mod status;
mod validate;

#[cfg(test)]
mod scenario_tests;

pub use calculator::{
    CoverageCalculator, TravelerCoverage, count_matches, county_coverage, region_coverage,
    system_coverage,
};
pub use result::{CoverageResult, percentage};
pub use status::{RouteStatus, region_route_statuses, system_route_statuses};
pub use validate::{SystemCount, ValidationReport, validate_log};
