//! End-to-end coverage scenarios, from raw table and log text to results.

use super::*;
use crate::domain::RegionCode;
use crate::inventory::{InventoryIndex, InventoryIndexBuilder};
use crate::leaderboard::Leaderboard;
use crate::travel_log::TravelLog;

fn region(s: &str) -> RegionCode {
    RegionCode::parse(s).unwrap()
}

fn alabama_interstates() -> InventoryIndex {
    InventoryIndexBuilder::new()
        .system_table("usai", "Code;Region;Route\nI10;AL;I-10\nI20;AL;I-20\nI30;AL;I-30\n")
        .region_table(region("AL"), "Code;Region;Route\nI10;AL;I-10\nI20;AL;I-20\nI30;AL;I-30\n")
        .build()
}

#[test]
fn two_of_three_routes() {
    let index = alabama_interstates();
    let log = TravelLog::parse("alice", "AL I-10\nAL I-20\n");

    let coverage = CoverageCalculator::new(&index).traveler(&log);

    let system = &coverage.systems[0];
    assert_eq!((system.matched, system.total), (2, 3));
    assert_eq!(format!("{:.2}", system.percentage), "66.67");

    let al = &coverage.regions[0];
    assert_eq!((al.matched, al.total), (2, 3));
}

#[test]
fn empty_node_reports_zero() {
    let index = InventoryIndexBuilder::new()
        .system_table("empty", "Code;Region;Route\n")
        .build();
    let log = TravelLog::parse("alice", "AL I-10\n");

    let coverage = CoverageCalculator::new(&index).traveler(&log);

    let system = &coverage.systems[0];
    assert_eq!((system.matched, system.total), (0, 0));
    assert_eq!(system.percentage, 0.0);
}

#[test]
fn duplicate_log_lines_count_once() {
    let index = alabama_interstates();
    let log = TravelLog::parse(
        "alice",
        "AL I-10 https://example.com/photo.jpg\nAL I-10\n",
    );

    let coverage = CoverageCalculator::new(&index).traveler(&log);
    assert_eq!(coverage.systems[0].matched, 1);
    assert_eq!(
        log.evidence(&region("AL"), "I-10"),
        Some("https://example.com/photo.jpg")
    );
}

#[test]
fn leaderboard_ranks_by_aggregate_percentage() {
    // Ten routes in one system, ten more in another.
    let first: String = (1..=10).map(|n| format!("R{n};AL;R-{n}\n")).collect();
    let second: String = (1..=10).map(|n| format!("S{n};GA;S-{n}\n")).collect();
    let index = InventoryIndexBuilder::new()
        .system_table("first", &format!("h\n{first}"))
        .system_table("second", &format!("h\n{second}"))
        .build();

    // A: 8 of the first system only. B: 9 spread over both systems.
    let a_log: String = (1..=8).map(|n| format!("AL R-{n}\n")).collect();
    let b_log: String = (1..=4)
        .map(|n| format!("AL R-{n}\n"))
        .chain((1..=5).map(|n| format!("GA S-{n}\n")))
        .collect();

    let calculator = CoverageCalculator::new(&index);
    let a = calculator.traveler(&TravelLog::parse("a", &a_log));
    let b = calculator.traveler(&TravelLog::parse("b", &b_log));

    let board = Leaderboard::from_coverages([&b, &a]);
    let entries = board.entries();

    // A: 8/20 = 40%, B: 9/20 = 45%.
    assert_eq!(entries[0].traveler, "b");
    assert_eq!((entries[0].total_matched, entries[0].total_possible), (9, 20));
    assert_eq!(entries[1].traveler, "a");
    assert_eq!(entries[1].percentage, 40.0);
}

#[test]
fn matched_never_exceeds_total() {
    let index = alabama_interstates();
    let log = TravelLog::parse("t", "AL I-10\nAL I-10\nAL I-20\nAL I-30\nAL I-40\nFL I-10\n");

    let coverage = CoverageCalculator::new(&index).traveler(&log);
    for result in coverage.systems.iter().chain(coverage.regions.iter()) {
        assert!(result.matched <= result.total);
        assert!((0.0..=100.0).contains(&result.percentage));
    }
    assert_eq!(coverage.systems[0].percentage, 100.0);
}

#[test]
fn combined_logs_cover_counties_together() {
    let index = InventoryIndexBuilder::new()
        .county_table("h\nA;GA;7;Fulton\nB;GA;9;Fulton\nC;GA;75;Fulton\n")
        .build();
    let a = TravelLog::parse("a", "GA 7\n");
    let b = TravelLog::parse("b", "GA 9\nGA 7\n");

    let all = TravelLog::union("all", [&a, &b]);
    let counties = CoverageCalculator::new(&index).counties(&all);

    let fulton = &counties[&region("GA")][0];
    assert_eq!((fulton.matched, fulton.total), (2, 3));
}
