//! Ordering and coloring of coverage results.
//!
//! Result tables are ranked by percentage; route listings use natural
//! designation order. Percentages map to HSL swatches through a
//! [`ColorScale`].

mod color;
mod natural;
mod rank;

pub use color::{ColorScale, Hsl, InvalidColorScale, MAX_MAX_HUE, MIN_MAX_HUE};
pub use natural::natural_cmp;
pub use rank::{compare_results, rank_by_percentage};
