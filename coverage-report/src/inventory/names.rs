//! Display-name and tier lookup tables.
//!
//! Unlike route tables, lookup tables locate their columns by header name.
//! The header row is matched case-insensitively against a fixed list of
//! candidates; a table whose header names none of them is a configuration
//! error rather than an empty lookup.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use super::error::InventoryError;
use super::table::split_fields;
use crate::domain::RegionCode;

/// Accepted header names for a lookup table's key and value columns.
#[derive(Debug, Clone, Copy)]
pub struct LookupColumns {
    pub key: &'static [&'static str],
    pub value: &'static [&'static str],
}

/// `regionCode → fullName`.
pub const REGION_NAMES: LookupColumns = LookupColumns {
    key: &["region", "code", "abbrev"],
    value: &["name", "state"],
};

/// `systemId → fullName`.
pub const SYSTEM_NAMES: LookupColumns = LookupColumns {
    key: &["system", "systemid", "code"],
    value: &["name", "fullname", "title"],
};

/// `systemId → tier`.
pub const SYSTEM_TIERS: LookupColumns = LookupColumns {
    key: &["system", "systemid", "code"],
    value: &["tier", "level"],
};

/// Parse a lookup table into `(key, value)` pairs.
///
/// `path` is only used to name the table in errors.
pub fn parse_lookup(
    path: &Path,
    contents: &str,
    columns: LookupColumns,
) -> Result<Vec<(String, String)>, InventoryError> {
    let mut lines = contents.lines();
    let header = split_fields(lines.next().unwrap_or_default());

    let key_idx = find_column(&header, columns.key).ok_or(InventoryError::MissingColumn {
        path: path.to_path_buf(),
        candidates: columns.key,
    })?;
    let value_idx = find_column(&header, columns.value).ok_or(InventoryError::MissingColumn {
        path: path.to_path_buf(),
        candidates: columns.value,
    })?;

    let pairs = lines
        .filter(|line| !line.trim().is_empty())
        .map(split_fields)
        .filter_map(|fields| {
            let key = fields.get(key_idx).filter(|k| !k.is_empty())?;
            let value = fields.get(value_idx).filter(|v| !v.is_empty())?;
            Some((key.to_string(), value.to_string()))
        })
        .collect();

    Ok(pairs)
}

/// Index of the first header column matching any candidate.
fn find_column(header: &[&str], candidates: &[&str]) -> Option<usize> {
    candidates.iter().find_map(|candidate| {
        header
            .iter()
            .position(|column| column.eq_ignore_ascii_case(candidate))
    })
}

/// Optional lookups applied to inventory labels.
#[derive(Debug, Clone, Default)]
pub struct NameTables {
    system_names: HashMap<String, String>,
    system_tiers: HashMap<String, u8>,
    region_names: HashMap<RegionCode, String>,
}

impl NameTables {
    /// Create empty lookups; every label falls back to its id.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `systemId → fullName` pairs.
    pub fn load_system_names(&mut self, path: &Path, contents: &str) -> Result<(), InventoryError> {
        for (system, name) in parse_lookup(path, contents, SYSTEM_NAMES)? {
            self.system_names.entry(system).or_insert(name);
        }
        Ok(())
    }

    /// Load `systemId → tier` pairs. Rows whose tier is not a small integer are skipped.
    pub fn load_system_tiers(&mut self, path: &Path, contents: &str) -> Result<(), InventoryError> {
        for (system, tier) in parse_lookup(path, contents, SYSTEM_TIERS)? {
            match tier.parse::<u8>() {
                Ok(tier) => {
                    self.system_tiers.entry(system).or_insert(tier);
                }
                Err(_) => debug!(%system, %tier, "skipping non-numeric tier"),
            }
        }
        Ok(())
    }

    /// Load `regionCode → fullName` pairs. Rows with an invalid region are skipped.
    pub fn load_region_names(&mut self, path: &Path, contents: &str) -> Result<(), InventoryError> {
        for (region, name) in parse_lookup(path, contents, REGION_NAMES)? {
            if let Ok(region) = RegionCode::parse(&region) {
                self.region_names.entry(region).or_insert(name);
            }
        }
        Ok(())
    }

    pub fn system_name(&self, system: &str) -> Option<&str> {
        self.system_names.get(system).map(String::as_str)
    }

    pub fn system_tier(&self, system: &str) -> Option<u8> {
        self.system_tiers.get(system).copied()
    }

    pub fn region_name(&self, region: &RegionCode) -> Option<&str> {
        self.region_names.get(region).map(String::as_str)
    }
}
