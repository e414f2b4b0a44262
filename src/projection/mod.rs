//! Projection of observer-frame star directions onto the flat sky maps.
//!
//! # Coordinate conventions
//!
//! - **Equatorial angles**: right ascension `ra = atan2(y, x)` in `(-π, π]`,
//!   declination `dec = atan2(z, hypot(x, y))` in `[-π/2, π/2]`.
//! - **Equirectangular (wide) map**: pixel origin top-left, +Y down. RA grows
//!   to the left with RA = 0 on the vertical center line and wraps around
//!   horizontally; Dec = +90° is the top row.
//! - **Polar maps**: one disc per hemisphere. Distance from the disc center is
//!   proportional to the angle from the pole, RA is the polar angle. Both
//!   hemispheres use the same formula, the south map is not mirrored.

pub mod graticule;

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::Vector3;

pub use graticule::{Graticule, GridLine, LineWeight};

/// Smallest dot radius handed to the renderer.
pub const MIN_DOT_SIZE: u32 = 1;

/// Which polar map a star lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// North for `dec >= 0`, South otherwise.
    pub fn of(dec: f64) -> Self {
        if dec < 0.0 {
            Hemisphere::South
        } else {
            Hemisphere::North
        }
    }
}

/// Right ascension and declination (radians) of a direction vector.
pub fn equatorial_angles(position: &Vector3) -> (f64, f64) {
    let ra = position.y.atan2(position.x);
    let dec = position.z.atan2(position.x.hypot(position.y));
    (ra, dec)
}

/// Pixel position of `(ra, dec)` on a `width` x `height` equirectangular map.
///
/// Columns wrap into `[0, width)`; rows run from 0 (Dec = +90°) to `height`
/// (Dec = -90°). Fractional pixels are truncated.
pub fn to_equirectangular(ra: f64, dec: f64, width: u32, height: u32) -> (i32, i32) {
    let w = width as f64;
    let h = height as f64;

    let row = (dec / FRAC_PI_2) * (h / 2.0) + h / 2.0;
    let mut col = -ra / TAU * w + w / 2.0;
    if col < 0.0 {
        col += w;
    } else if col >= w {
        col -= w;
    }

    (col as i32, height as i32 - row as i32)
}

/// Offset of `(ra, dec)` from the center of a polar map of radius `radius`.
///
/// The pole sits at the center and the celestial equator on the rim.
pub fn to_azimuthal(ra: f64, dec: f64, radius: f64) -> (f64, f64) {
    let r = (1.0 - dec.abs() / FRAC_PI_2) * radius;
    let (sin_ra, cos_ra) = ra.sin_cos();
    (cos_ra * r, sin_ra * r)
}

/// Dot radius for a star of apparent `magnitude` on a map whose faintest
/// shown magnitude is `max_magnitude`.
///
/// This is a presentation heuristic, not photometry:
/// `floor(ln((max - mag) / max * 6))`, never below [`MIN_DOT_SIZE`].
/// Arguments that make the logarithm undefined or infinite also fall back to
/// the minimum.
pub fn magnitude_to_size(magnitude: f64, max_magnitude: f64) -> u32 {
    let size = ((max_magnitude - magnitude) / max_magnitude * 6.0).ln().floor();
    if size.is_finite() && size >= MIN_DOT_SIZE as f64 {
        size as u32
    } else {
        MIN_DOT_SIZE
    }
}
