//! Canonical route inventories grouped by system, region and county.
//!
//! Merge rule: within one node, the first row carrying a given identity key
//! wins. Later rows with the same key are absorbed and counted, never
//! treated as errors. Canonical order is the order in which keys were first
//! seen.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use super::names::NameTables;
use super::table::{RouteRow, route_rows};
use crate::domain::{
    DesignationKey, IdentityScheme, RegionCode, RouteEntry, RouteIdentity, SystemRouteKey,
};

/// Deduplicated routes of one inventory node, in canonical order.
#[derive(Debug, Clone)]
pub struct RouteSet<K: RouteIdentity> {
    scope: K::Scope,
    entries: Vec<(K, RouteEntry)>,
    positions: HashMap<K, usize>,
    absorbed: usize,
}

impl<K: RouteIdentity> RouteSet<K> {
    /// Create an empty set matched within `scope`.
    pub fn new(scope: K::Scope) -> Self {
        Self {
            scope,
            entries: Vec::new(),
            positions: HashMap::new(),
            absorbed: 0,
        }
    }

    /// Insert an entry unless its key is already present.
    ///
    /// Returns `false` when the entry was absorbed as a duplicate.
    pub fn insert(&mut self, entry: RouteEntry) -> bool {
        let key = K::from_entry(&entry);
        if self.positions.contains_key(&key) {
            self.absorbed += 1;
            return false;
        }
        self.positions.insert(key.clone(), self.entries.len());
        self.entries.push((key, entry));
        true
    }

    /// The identity scheme this set deduplicates with.
    pub fn scheme(&self) -> IdentityScheme {
        K::SCHEME
    }

    /// Number of distinct routes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of rows absorbed as duplicates.
    pub fn absorbed(&self) -> usize {
        self.absorbed
    }

    /// Canonical position of a key, if present.
    pub fn position(&self, key: &K) -> Option<usize> {
        self.positions.get(key).copied()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// The first entry loaded for each key, in canonical order.
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter().map(|(_, entry)| entry)
    }

    /// The `(region, designation)` tuple a traveler logs for each route.
    pub fn travel_keys(&self) -> impl Iterator<Item = (&RegionCode, &str)> {
        self.entries
            .iter()
            .map(|(key, _)| key.travel_key(&self.scope))
    }
}

/// Routes of one highway system across every region.
#[derive(Debug, Clone)]
pub struct SystemInventory {
    pub id: String,
    pub name: Option<String>,
    pub tier: Option<u8>,
    pub routes: RouteSet<SystemRouteKey>,
}

impl SystemInventory {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            tier: None,
            routes: RouteSet::new(()),
        }
    }

    /// Full name if known, otherwise the id.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Routes of one region, counted once per designation.
#[derive(Debug, Clone)]
pub struct RegionInventory {
    pub region: RegionCode,
    pub name: Option<String>,
    pub routes: RouteSet<DesignationKey>,
}

impl RegionInventory {
    pub fn new(region: RegionCode) -> Self {
        Self {
            routes: RouteSet::new(region.clone()),
            region,
            name: None,
        }
    }

    /// Full name if known, otherwise the region code.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(self.region.as_str())
    }

    /// Canonical position of a designation in this region's table.
    pub fn position(&self, designation: &str) -> Option<usize> {
        self.routes.position(&DesignationKey(designation.to_string()))
    }
}

/// Routes of one county, counted once per designation within the county.
#[derive(Debug, Clone)]
pub struct CountyInventory {
    pub region: RegionCode,
    pub county: String,
    pub routes: RouteSet<DesignationKey>,
}

impl CountyInventory {
    pub fn new(region: RegionCode, county: impl Into<String>) -> Self {
        Self {
            routes: RouteSet::new(region.clone()),
            region,
            county: county.into(),
        }
    }

    /// Lowest and highest plain route numbers in the county.
    ///
    /// Designations that are not plain numbers are ignored; `None` when no
    /// designation is numeric.
    pub fn numeric_range(&self) -> Option<(u32, u32)> {
        self.routes
            .entries()
            .filter_map(RouteEntry::route_number)
            .fold(None, |range, n| match range {
                None => Some((n, n)),
                Some((lo, hi)) => Some((lo.min(n), hi.max(n))),
            })
    }
}

/// Key of a county node.
pub type CountyKey = (RegionCode, String);

/// All inventories of a run. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct InventoryIndex {
    systems: BTreeMap<String, SystemInventory>,
    regions: BTreeMap<RegionCode, RegionInventory>,
    counties: BTreeMap<CountyKey, CountyInventory>,
}

impl InventoryIndex {
    /// Systems ordered by id.
    pub fn systems(&self) -> impl Iterator<Item = &SystemInventory> {
        self.systems.values()
    }

    pub fn system(&self, id: &str) -> Option<&SystemInventory> {
        self.systems.get(id)
    }

    /// Regions ordered by code.
    pub fn regions(&self) -> impl Iterator<Item = &RegionInventory> {
        self.regions.values()
    }

    pub fn region(&self, region: &RegionCode) -> Option<&RegionInventory> {
        self.regions.get(region)
    }

    /// Counties ordered by region then county name.
    pub fn counties(&self) -> impl Iterator<Item = &CountyInventory> {
        self.counties.values()
    }

    /// Counties of one region, ordered by name.
    pub fn counties_in<'a>(
        &'a self,
        region: &'a RegionCode,
    ) -> impl Iterator<Item = &'a CountyInventory> + 'a {
        self.counties
            .values()
            .filter(move |county| &county.region == region)
    }

    /// Regions that have at least one county.
    pub fn county_regions(&self) -> Vec<&RegionCode> {
        let mut regions: Vec<&RegionCode> = self.counties.keys().map(|(r, _)| r).collect();
        regions.dedup();
        regions
    }

    /// Whether any system carries `(region, designation)`.
    pub fn in_any_system(&self, region: &RegionCode, designation: &str) -> bool {
        let key = SystemRouteKey {
            region: region.clone(),
            designation: designation.to_string(),
        };
        self.systems.values().any(|s| s.routes.contains(&key))
    }
}

/// Builder for an [`InventoryIndex`].
///
/// Tables are added as raw text; names and tiers are applied on `build`.
#[derive(Debug, Default)]
pub struct InventoryIndexBuilder {
    index: InventoryIndex,
    names: NameTables,
}

impl InventoryIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use display names and tiers from `names`.
    pub fn names(mut self, names: NameTables) -> Self {
        self.names = names;
        self
    }

    /// Add the rows of one system table. Adding the same system twice merges.
    pub fn system_table(mut self, system: &str, contents: &str) -> Self {
        let inventory = self
            .index
            .systems
            .entry(system.to_string())
            .or_insert_with(|| SystemInventory::new(system));

        for row in route_rows(contents) {
            let entry = row_entry(row).with_system(system);
            if !inventory.routes.insert(entry) {
                debug!(system, "absorbed duplicate system route");
            }
        }
        self
    }

    /// Add the rows of one region table.
    ///
    /// Rows naming a different region than the table's are skipped.
    pub fn region_table(mut self, region: RegionCode, contents: &str) -> Self {
        let inventory = self
            .index
            .regions
            .entry(region.clone())
            .or_insert_with(|| RegionInventory::new(region.clone()));

        for row in route_rows(contents) {
            if row.region != region {
                warn!(
                    table = %region,
                    row = %row.region,
                    designation = %row.designation,
                    "skipping region table row for another region"
                );
                continue;
            }
            inventory.routes.insert(row_entry(row));
        }
        self
    }

    /// Add the rows of a county table. Rows without a county are skipped.
    pub fn county_table(mut self, contents: &str) -> Self {
        for row in route_rows(contents) {
            let Some(county) = row.county.clone() else {
                debug!(designation = %row.designation, "skipping county row without county");
                continue;
            };
            let region = row.region.clone();
            let inventory = self
                .index
                .counties
                .entry((region.clone(), county.clone()))
                .or_insert_with(|| CountyInventory::new(region, county));
            inventory.routes.insert(row_entry(row));
        }
        self
    }

    /// Finish loading.
    ///
    /// Every region referenced by a system gets a region node, empty when
    /// no region table was loaded for it.
    pub fn build(self) -> InventoryIndex {
        let InventoryIndex {
            mut systems,
            mut regions,
            counties,
        } = self.index;
        let names = self.names;

        for system in systems.values_mut() {
            system.name = names.system_name(&system.id).map(str::to_string);
            system.tier = names.system_tier(&system.id);
            if let Some(tier) = system.tier {
                let mut routes = RouteSet::new(());
                for entry in system.routes.entries() {
                    routes.insert(entry.clone().with_tier(tier));
                }
                routes.absorbed = system.routes.absorbed;
                system.routes = routes;
            }
        }

        for system in systems.values() {
            for entry in system.routes.entries() {
                regions
                    .entry(entry.region.clone())
                    .or_insert_with(|| RegionInventory::new(entry.region.clone()));
            }
        }

        for region in regions.values_mut() {
            region.name = names.region_name(&region.region).map(str::to_string);
        }

        InventoryIndex {
            systems,
            regions,
            counties,
        }
    }
}

fn row_entry(row: RouteRow) -> RouteEntry {
    let entry = RouteEntry::new(row.code, row.region, row.designation);
    match row.county {
        Some(county) => entry.with_county(county),
        None => entry,
    }
}
