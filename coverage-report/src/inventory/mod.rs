//! Canonical route inventories.
//!
//! Reference tables are loaded once into three groupings (systems, regions,
//! counties) plus optional display-name and tier lookups. The resulting
//! [`InventoryIndex`] is immutable for the rest of the run.

mod error;
mod index;
mod load;
mod names;
mod table;

pub use error::InventoryError;
pub use index::{
    CountyInventory, CountyKey, InventoryIndex, InventoryIndexBuilder, RegionInventory, RouteSet,
    SystemInventory,
};
pub use load::{file_stem, files_with_extension, load_index, read_bytes, read_file};
pub use names::{LookupColumns, NameTables, REGION_NAMES, SYSTEM_NAMES, SYSTEM_TIERS, parse_lookup};
pub use table::{RouteRow, route_rows};
