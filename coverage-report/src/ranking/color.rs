//! Percentage to color mapping.
//!
//! A percentage is mapped linearly onto a hue between 0 (red) and the
//! scale's maximum hue, with fixed saturation and lightness.

use std::fmt;

/// Lowest accepted maximum hue.
pub const MIN_MAX_HUE: f64 = 150.0;

/// Highest accepted maximum hue.
pub const MAX_MAX_HUE: f64 = 240.0;

/// Error returned when constructing an invalid color scale.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidColorScale {
    #[error("maximum hue {0} is outside 150..=240")]
    MaxHue(f64),

    #[error("{name} {value}% exceeds 100%")]
    Percent { name: &'static str, value: u8 },
}

/// An HSL color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: u8,
    pub lightness: u8,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({:.2}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Maps percentages onto a red-to-`max_hue` spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    max_hue: f64,
    saturation: u8,
    lightness: u8,
}

impl ColorScale {
    /// Create a scale. `max_hue` must lie in `150..=240`.
    pub fn new(max_hue: f64, saturation: u8, lightness: u8) -> Result<Self, InvalidColorScale> {
        if !(MIN_MAX_HUE..=MAX_MAX_HUE).contains(&max_hue) {
            return Err(InvalidColorScale::MaxHue(max_hue));
        }
        if saturation > 100 {
            return Err(InvalidColorScale::Percent {
                name: "saturation",
                value: saturation,
            });
        }
        if lightness > 100 {
            return Err(InvalidColorScale::Percent {
                name: "lightness",
                value: lightness,
            });
        }
        Ok(Self {
            max_hue,
            saturation,
            lightness,
        })
    }

    /// Red through green, for system, region and leaderboard tables.
    pub fn completion() -> Self {
        Self {
            max_hue: 150.0,
            saturation: 70,
            lightness: 75,
        }
    }

    /// Red through blue, for county tables.
    pub fn county() -> Self {
        Self {
            max_hue: 240.0,
            saturation: 80,
            lightness: 80,
        }
    }

    /// Hue for a percentage. Out-of-range input is clamped; NaN maps to 0.
    pub fn hue(&self, percentage: f64) -> f64 {
        let p = if percentage.is_nan() {
            0.0
        } else {
            percentage.clamp(0.0, 100.0)
        };
        p * self.max_hue / 100.0
    }

    /// Color swatch for a percentage.
    pub fn color(&self, percentage: f64) -> Hsl {
        Hsl {
            hue: self.hue(percentage),
            saturation: self.saturation,
            lightness: self.lightness,
        }
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::completion()
    }
}
