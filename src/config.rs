//! Sky generation settings and angle helpers.

use std::collections::HashSet;

use crate::error::AngleParseError;
use crate::OrientationParams;

/// Stars labeled on the maps by default: bright or well-known stars, the
/// celestial poles' markers, and the north poles of a few planets.
pub const DEFAULT_LABELS: &[&str] = &[
    "Sol",
    "Sirus",
    "Rigil Kentaurus",
    "Polaris",
    "Sig Oct",
    "Procyon",
    "Vega",
    "Rigel",
    "Betelgeuse",
    "Aldebaran",
    "Deneb",
    "Pollux",
    "Fomalhaut",
    "Rastaban",
    "Alpheratz",
    "22Zet Dra",
    "47Omi Dra",
    "35Eta Oph",
];

/// Parse an angle such as `"23.4"`, `"20deg"` or `"0.4rad"` into radians.
///
/// A bare number is taken as degrees.
pub fn parse_angle(text: &str) -> Result<f64, AngleParseError> {
    let trimmed = text.trim();
    let (number, is_degrees) = if let Some(value) = trimmed.strip_suffix("deg") {
        (value, true)
    } else if let Some(value) = trimmed.strip_suffix("rad") {
        (value, false)
    } else {
        (trimmed, true)
    };

    let value: f64 = number.trim().parse().map_err(|_| AngleParseError {
        input: text.to_string(),
    })?;
    if !value.is_finite() {
        return Err(AngleParseError {
            input: text.to_string(),
        });
    }
    Ok(if is_degrees { value.to_radians() } else { value })
}

/// Pixel dimensions of the generated maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapGeometry {
    /// Width of the equirectangular map in pixels.
    pub wide_width: u32,
    /// Height of the equirectangular map in pixels.
    pub wide_height: u32,
    /// Radius of each polar map; the map image is `2 * polar_radius` square.
    pub polar_radius: u32,
}

impl Default for MapGeometry {
    fn default() -> Self {
        Self {
            wide_width: 2048,
            wide_height: 1024,
            polar_radius: 512,
        }
    }
}

/// Everything needed to turn a decoded catalog into a sky.
#[derive(Debug, Clone, PartialEq)]
pub struct SkyConfig {
    /// Name of the star the observer's planet orbits.
    pub center_star: String,
    pub orientation: OrientationParams,
    /// Faintest apparent magnitude shown (inclusive).
    pub max_magnitude: f64,
    /// Stars whose primary name is emitted as a label when any of their
    /// designations is in this set.
    pub labels: HashSet<String>,
    pub geometry: MapGeometry,
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            center_star: "Sol".to_string(),
            orientation: OrientationParams::default(),
            max_magnitude: 6.0,
            labels: DEFAULT_LABELS.iter().map(|s| s.to_string()).collect(),
            geometry: MapGeometry::default(),
        }
    }
}
