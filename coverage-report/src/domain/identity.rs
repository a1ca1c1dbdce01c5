//! Route identity schemes.
//!
//! Systems span regions, so a system route is identified by the pair
//! (region, designation). Region and county nodes are already scoped to one
//! region and count each designation once, even when the reference table
//! carries several rows for it. The two schemes are separate key types so an
//! inventory cannot be deduplicated with one and matched with the other.

use std::fmt;
use std::hash::Hash;

use super::{RegionCode, RouteEntry};

/// Which identity scheme an inventory deduplicates and matches with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityScheme {
    /// `(region, designation)`.
    Composite,
    /// `designation` within the node's region.
    DesignationOnly,
}

impl fmt::Display for IdentityScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityScheme::Composite => f.write_str("region+designation"),
            IdentityScheme::DesignationOnly => f.write_str("designation"),
        }
    }
}

/// A key under which routes are deduplicated and matched against travel logs.
pub trait RouteIdentity: Clone + Eq + Hash + fmt::Debug {
    /// Context a key needs to name a travel-log tuple.
    type Scope: Clone + fmt::Debug;

    const SCHEME: IdentityScheme;

    fn from_entry(entry: &RouteEntry) -> Self;

    /// The `(region, designation)` tuple a traveler would log for this key.
    fn travel_key<'a>(&'a self, scope: &'a Self::Scope) -> (&'a RegionCode, &'a str);
}

/// Composite identity used by system inventories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SystemRouteKey {
    pub region: RegionCode,
    pub designation: String,
}

impl RouteIdentity for SystemRouteKey {
    type Scope = ();

    const SCHEME: IdentityScheme = IdentityScheme::Composite;

    fn from_entry(entry: &RouteEntry) -> Self {
        Self {
            region: entry.region.clone(),
            designation: entry.designation.clone(),
        }
    }

    fn travel_key<'a>(&'a self, _scope: &'a ()) -> (&'a RegionCode, &'a str) {
        (&self.region, &self.designation)
    }
}

/// Designation-only identity used by region and county inventories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DesignationKey(pub String);

impl RouteIdentity for DesignationKey {
    type Scope = RegionCode;

    const SCHEME: IdentityScheme = IdentityScheme::DesignationOnly;

    fn from_entry(entry: &RouteEntry) -> Self {
        DesignationKey(entry.designation.clone())
    }

    fn travel_key<'a>(&'a self, scope: &'a RegionCode) -> (&'a RegionCode, &'a str) {
        (scope, &self.0)
    }
}
