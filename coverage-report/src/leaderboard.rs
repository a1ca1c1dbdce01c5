//! Cross-traveler leaderboard.
//!
//! Each traveler's system-level results are summed into one entry, and
//! travelers are ranked by the resulting percentage.

use std::cmp::Ordering;

use serde::Serialize;

use crate::coverage::{CoverageResult, TravelerCoverage, percentage};

/// Aggregate completion of one traveler over every system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub traveler: String,
    pub total_matched: usize,
    pub total_possible: usize,
    pub percentage: f64,
}

impl LeaderboardEntry {
    /// Sum a traveler's system results.
    pub fn from_systems(traveler: impl Into<String>, systems: &[CoverageResult]) -> Self {
        let total_matched = systems.iter().map(|r| r.matched).sum();
        let total_possible = systems.iter().map(|r| r.total).sum();
        Self {
            traveler: traveler.into(),
            total_matched,
            total_possible,
            percentage: percentage(total_matched, total_possible),
        }
    }
}

/// Order two entries best-first: percentage descending, then traveler id.
fn compare_entries(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    b.percentage
        .total_cmp(&a.percentage)
        .then_with(|| a.traveler.cmp(&b.traveler))
}

/// Travelers ranked best-first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Rank already-aggregated entries.
    pub fn new(mut entries: Vec<LeaderboardEntry>) -> Self {
        entries.sort_by(compare_entries);
        Self { entries }
    }

    /// Aggregate and rank every traveler's coverage.
    pub fn from_coverages<'a>(coverages: impl IntoIterator<Item = &'a TravelerCoverage>) -> Self {
        Self::new(
            coverages
                .into_iter()
                .map(|c| LeaderboardEntry::from_systems(&c.traveler, &c.systems))
                .collect(),
        )
    }

    /// Entries best-first.
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
