//! Canonical route entries loaded from reference tables.

use super::RegionCode;

/// One row of a reference table.
///
/// `designation` is the human-facing label (e.g. `I-10`) that travelers
/// write in their logs; `code` is the table's internal route code (e.g.
/// `I10`) and is carried for reference only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub code: String,
    pub region: RegionCode,
    pub designation: String,
    pub system: Option<String>,
    pub tier: Option<u8>,
    pub county: Option<String>,
}

impl RouteEntry {
    /// Create an entry with no system, tier or county membership.
    pub fn new(code: impl Into<String>, region: RegionCode, designation: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            region,
            designation: designation.into(),
            system: None,
            tier: None,
            county: None,
        }
    }

    /// Attach the system this entry was loaded for.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Attach the county this entry belongs to.
    pub fn with_county(mut self, county: impl Into<String>) -> Self {
        self.county = Some(county.into());
        self
    }

    /// Attach the tier of the entry's system.
    pub fn with_tier(mut self, tier: u8) -> Self {
        self.tier = Some(tier);
        self
    }

    /// Label used in cross-region listings, e.g. `"AL I-10"`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.region, self.designation)
    }

    /// The designation parsed as a plain route number, if it is one.
    pub fn route_number(&self) -> Option<u32> {
        self.designation.trim().parse().ok()
    }
}
