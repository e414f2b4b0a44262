//! Coordinate grid drawn underneath the stars.
//!
//! The grid is computed with the same projection functions as the stars so the
//! two always line up. Both polar maps share one grid.

use std::f64::consts::{FRAC_PI_2, PI};

use super::{to_azimuthal, to_equirectangular};
use crate::config::MapGeometry;

/// Spacing of RA meridians on both maps, degrees.
const RA_STEP_DEG: usize = 30;
/// Spacing of Dec parallels on the wide map, degrees.
const WIDE_DEC_STEP_DEG: usize = 30;
/// Spacing of Dec circles on the polar maps, degrees.
const POLAR_DEC_STEP_DEG: usize = 15;

/// Minor lines are the regular grid; major lines are the prime meridian and
/// the equator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineWeight {
    Minor,
    Major,
}

/// A straight grid segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLine {
    pub from: (i32, i32),
    pub to: (i32, i32),
    pub weight: LineWeight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graticule {
    /// Meridians and parallels of the equirectangular map.
    pub wide_lines: Vec<GridLine>,
    /// Radii of the Dec circles on a polar map, centered on the map center.
    pub polar_circles: Vec<i32>,
    /// RA spokes from the polar map center to the rim.
    pub polar_spokes: Vec<GridLine>,
}

impl Graticule {
    pub fn new(geometry: &MapGeometry) -> Self {
        let (w, h) = (geometry.wide_width, geometry.wide_height);
        let wide = |ra: f64, dec: f64| to_equirectangular(ra, dec, w, h);

        let top = FRAC_PI_2;
        let bottom = -FRAC_PI_2;
        // A parallel runs from just past RA 180° (right edge) to RA 180° (left edge).
        let right_edge = 180.1_f64.to_radians();
        let left_edge = PI;

        let mut wide_lines = Vec::new();
        for ra_deg in (0..360).step_by(RA_STEP_DEG) {
            let ra = (ra_deg as f64).to_radians();
            wide_lines.push(GridLine {
                from: wide(ra, bottom),
                to: wide(ra, top),
                weight: LineWeight::Minor,
            });
        }
        for dec_deg in (-90..90).step_by(WIDE_DEC_STEP_DEG) {
            let dec = (dec_deg as f64).to_radians();
            wide_lines.push(GridLine {
                from: wide(right_edge, dec),
                to: wide(left_edge, dec),
                weight: LineWeight::Minor,
            });
        }
        wide_lines.push(GridLine {
            from: wide(0.0, bottom),
            to: wide(0.0, top),
            weight: LineWeight::Major,
        });
        wide_lines.push(GridLine {
            from: wide(right_edge, 0.0),
            to: wide(left_edge, 0.0),
            weight: LineWeight::Major,
        });

        let radius = geometry.polar_radius as f64;
        let center = geometry.polar_radius as i32;
        let polar = |ra: f64, dec: f64| {
            let (dx, dy) = to_azimuthal(ra, dec, radius);
            ((radius + dx) as i32, (radius + dy) as i32)
        };

        let polar_circles = (0..90)
            .step_by(POLAR_DEC_STEP_DEG)
            .map(|dec_deg| polar(0.0, (dec_deg as f64).to_radians()).0 - center)
            .collect();

        let mut polar_spokes: Vec<GridLine> = (0..360)
            .step_by(RA_STEP_DEG)
            .map(|ra_deg| GridLine {
                from: (center, center),
                to: polar((ra_deg as f64).to_radians(), 0.0),
                weight: LineWeight::Minor,
            })
            .collect();
        polar_spokes.push(GridLine {
            from: (center, center),
            to: polar(0.0, 0.0),
            weight: LineWeight::Major,
        });

        Self {
            wide_lines,
            polar_circles,
            polar_spokes,
        }
    }
}
