//! Checking travel logs against the system inventories.
//!
//! Reports how many logged routes each system recognizes and which logged
//! routes no system carries. Missing routes are usually typos in a log.

use serde::Serialize;

use crate::domain::SystemRouteKey;
use crate::inventory::InventoryIndex;
use crate::travel_log::{TravelLog, TravelLogEntry};

/// Logged routes recognized by one system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemCount {
    pub system: String,
    pub found: usize,
}

/// Result of checking one travel log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub traveler: String,
    /// Distinct routes in the log.
    pub listed: usize,
    /// Systems recognizing at least one logged route, ordered by system id.
    pub systems: Vec<SystemCount>,
    /// Logged routes found in no system, in log order.
    pub missing: Vec<String>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty()
    }

    /// Share of the log recognized by a system count.
    pub fn share(&self, count: &SystemCount) -> f64 {
        super::percentage(count.found, self.listed)
    }
}

/// Check every entry of `log` against the system inventories.
pub fn validate_log(index: &InventoryIndex, log: &TravelLog) -> ValidationReport {
    let entries: Vec<TravelLogEntry> = log.entries().collect();

    let systems = index
        .systems()
        .map(|system| SystemCount {
            system: system.id.clone(),
            found: entries
                .iter()
                .filter(|e| {
                    system.routes.contains(&SystemRouteKey {
                        region: e.region.clone(),
                        designation: e.designation.clone(),
                    })
                })
                .count(),
        })
        .filter(|count| count.found > 0)
        .collect();

    let missing = entries
        .iter()
        .filter(|e| !index.in_any_system(&e.region, &e.designation))
        .map(|e| format!("{} {}", e.region, e.designation))
        .collect();

    ValidationReport {
        traveler: log.traveler().to_string(),
        listed: entries.len(),
        systems,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::InventoryIndexBuilder;

    fn index() -> InventoryIndex {
        InventoryIndexBuilder::new()
            .system_table("usai", "h\nI10;AL;I-10\nI20;AL;I-20\n")
            .system_table("usaus", "h\nUS90;AL;US-90\n")
            .system_table("usaca", "h\nCA1;CA;1\n")
            .build()
    }

    #[test]
    fn clean_log() {
        let log = TravelLog::parse("t", "AL I-10\nAL US-90\n");
        let report = validate_log(&index(), &log);

        assert!(report.is_clean());
        assert_eq!(report.listed, 2);
        assert_eq!(
            report.systems,
            vec![
                SystemCount { system: "usai".into(), found: 1 },
                SystemCount { system: "usaus".into(), found: 1 },
            ]
        );
        assert_eq!(report.share(&report.systems[0]), 50.0);
    }

    #[test]
    fn missing_routes_are_listed_in_log_order() {
        let log = TravelLog::parse("t", "AL I-99\nAL I-10\nal i-20\n");
        let report = validate_log(&index(), &log);

        assert!(!report.is_clean());
        assert_eq!(report.missing, vec!["AL I-99", "AL i-20"]);
    }

    #[test]
    fn empty_log_is_clean() {
        let report = validate_log(&index(), &TravelLog::new("t"));
        assert!(report.is_clean());
        assert!(report.systems.is_empty());
        assert_eq!(report.listed, 0);
    }
}
