//! Domain types for route coverage.
//!
//! Region codes are validated at construction, and every inventory declares
//! which route identity scheme it deduplicates with, so code receiving these
//! types can trust their keys.

mod identity;
mod region;
mod route;

pub use identity::{DesignationKey, IdentityScheme, RouteIdentity, SystemRouteKey};
pub use region::{InvalidRegion, RegionCode};
pub use route::RouteEntry;
