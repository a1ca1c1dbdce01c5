//! Askama templates for the static report pages.

use askama::Template;
use serde::Serialize;

use crate::coverage::{CoverageResult, RouteStatus};
use crate::inventory::CountyInventory;
use crate::leaderboard::LeaderboardEntry;
use crate::ranking::ColorScale;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Leaderboard, the report's landing page.
#[derive(Template)]
#[template(path = "leaderboard.html")]
pub struct LeaderboardTemplate {
    pub generated: String,
    pub rows: Vec<LeaderboardRow>,
    pub county_regions: Vec<LinkView>,
}

/// One traveler's system and region tables.
#[derive(Template)]
#[template(path = "traveler.html")]
pub struct TravelerTemplate {
    pub generated: String,
    pub traveler: String,
    pub overall: ReportRow,
    pub systems: Vec<ReportRow>,
    pub regions: Vec<ReportRow>,
    pub county_regions: Vec<LinkView>,
}

/// Route-by-route status of one system or region.
#[derive(Template)]
#[template(path = "routes.html")]
pub struct RoutesTemplate {
    pub generated: String,
    pub traveler: String,
    pub title: String,
    pub summary: ReportRow,
    pub routes: Vec<RouteRow>,
}

/// County completion table for one region.
#[derive(Template)]
#[template(path = "counties.html")]
pub struct CountiesTemplate {
    pub generated: String,
    /// `None` for the combined page covering every traveler.
    pub traveler: Option<String>,
    pub region: String,
    pub counties: Vec<CountyRow>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A ranked, colored result row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub label: String,
    pub matched: usize,
    pub total: usize,
    pub percentage: f64,
    pub color: String,
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<u8>,
}

impl ReportRow {
    /// Create from a coverage result.
    pub fn from_result(result: &CoverageResult, scale: &ColorScale, link: Option<String>) -> Self {
        Self {
            label: result.label.clone(),
            matched: result.matched,
            total: result.total,
            percentage: result.percentage,
            color: scale.color(result.percentage).to_string(),
            link,
            tier: None,
        }
    }

    pub fn with_tier(mut self, tier: Option<u8>) -> Self {
        self.tier = tier;
        self
    }

    pub fn tier_display(&self) -> String {
        self.tier.map(|t| t.to_string()).unwrap_or_default()
    }

    /// Percentage with two decimals, e.g. `66.67%`.
    pub fn percentage_display(&self) -> String {
        format!("{:.2}%", self.percentage)
    }

    /// Percentage as a sortable attribute value.
    pub fn sort_key(&self) -> String {
        format!("{:.2}", self.percentage)
    }
}

/// A leaderboard row with its position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    pub rank: usize,
    #[serde(flatten)]
    pub row: ReportRow,
}

impl LeaderboardRow {
    /// Create from a ranked entry. `rank` is 1-based.
    pub fn from_entry(rank: usize, entry: &LeaderboardEntry, scale: &ColorScale, link: String) -> Self {
        let result = CoverageResult::new(
            &entry.traveler,
            &entry.traveler,
            entry.total_matched,
            entry.total_possible,
        );
        Self {
            rank,
            row: ReportRow::from_result(&result, scale, Some(link)),
        }
    }
}

/// A county row with its numeric route range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountyRow {
    #[serde(flatten)]
    pub row: ReportRow,
    pub lowest: Option<u32>,
    pub highest: Option<u32>,
}

impl CountyRow {
    pub fn new(result: &CoverageResult, county: Option<&CountyInventory>, scale: &ColorScale) -> Self {
        let range = county.and_then(CountyInventory::numeric_range);
        Self {
            row: ReportRow::from_result(result, scale, None),
            lowest: range.map(|(lo, _)| lo),
            highest: range.map(|(_, hi)| hi),
        }
    }

    pub fn lowest_display(&self) -> String {
        self.lowest.map(|n| n.to_string()).unwrap_or_default()
    }

    pub fn highest_display(&self) -> String {
        self.highest.map(|n| n.to_string()).unwrap_or_default()
    }
}

/// One route on a status page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRow {
    pub label: String,
    pub listed: bool,
    pub evidence: Option<String>,
}

impl RouteRow {
    /// Create from a route status. `with_region` prefixes the region code.
    pub fn from_status(status: &RouteStatus, with_region: bool) -> Self {
        let label = if with_region {
            format!("{} {}", status.region, status.designation)
        } else {
            status.designation.clone()
        };
        Self {
            label,
            listed: status.listed,
            evidence: status.evidence.clone(),
        }
    }

    pub fn status(&self) -> &'static str {
        if self.listed { "YES" } else { "NO" }
    }

    pub fn row_class(&self) -> &'static str {
        if self.listed { "yes" } else { "no" }
    }
}

/// A plain link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub label: String,
    pub href: String,
}
