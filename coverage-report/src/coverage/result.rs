//! Coverage results.

use serde::Serialize;

/// Completion percentage of `matched` out of `total`.
///
/// A node with no routes is 0% complete rather than undefined.
pub fn percentage(matched: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        matched as f64 / total as f64 * 100.0
    }
}

/// How much of one inventory node a traveler has documented.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageResult {
    /// Node id: system id, region code or county name.
    pub id: String,
    /// Human-facing node name.
    pub label: String,
    pub matched: usize,
    pub total: usize,
    pub percentage: f64,
}

impl CoverageResult {
    /// Create a result, computing the percentage.
    pub fn new(id: impl Into<String>, label: impl Into<String>, matched: usize, total: usize) -> Self {
        debug_assert!(matched <= total, "matched {matched} exceeds total {total}");
        Self {
            id: id.into(),
            label: label.into(),
            matched,
            total,
            percentage: percentage(matched, total),
        }
    }
}
