//! Final per-star map placement handed to the renderer.

use std::collections::HashSet;

use tracing::debug;

use crate::config::{MapGeometry, SkyConfig};
use crate::projection::{
    equatorial_angles, magnitude_to_size, to_azimuthal, to_equirectangular, Graticule, Hemisphere,
};
use crate::{Rgb, StarCatalog, StarRecord};

/// One star placed on the maps.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedStar {
    pub id: u32,
    /// Right ascension in the observer frame, radians.
    pub ra: f64,
    /// Declination in the observer frame, radians.
    pub dec: f64,
    /// Pixel position on the equirectangular map.
    pub wide: (i32, i32),
    /// Pixel position on the polar map selected by `hemisphere`.
    pub polar: (i32, i32),
    pub hemisphere: Hemisphere,
    /// Dot radius in pixels.
    pub size: u32,
    pub color: Rgb,
    /// Primary name, present when the star is in the label set.
    pub label: Option<String>,
}

impl ProjectedStar {
    pub fn project(
        star: &StarRecord,
        max_magnitude: f64,
        geometry: &MapGeometry,
        labels: &HashSet<String>,
    ) -> Self {
        let (ra, dec) = equatorial_angles(&star.position);
        let wide = to_equirectangular(ra, dec, geometry.wide_width, geometry.wide_height);

        let radius = geometry.polar_radius as f64;
        let (dx, dy) = to_azimuthal(ra, dec, radius);
        let polar = ((radius + dx) as i32, (radius + dy) as i32);

        let label = star
            .names
            .iter()
            .any(|name| labels.contains(name))
            .then(|| star.primary_name().to_string());

        Self {
            id: star.id,
            ra,
            dec,
            wide,
            polar,
            hemisphere: Hemisphere::of(dec),
            size: magnitude_to_size(star.magnitude as f64, max_magnitude),
            color: star.color,
            label,
        }
    }
}

/// Everything the renderer needs for the wide map and both polar maps.
#[derive(Debug, Clone, PartialEq)]
pub struct SkyMap {
    pub geometry: MapGeometry,
    pub graticule: Graticule,
    /// Stars in catalog order.
    pub stars: Vec<ProjectedStar>,
}

impl SkyMap {
    /// Project every star of an observer-frame catalog.
    ///
    /// `max_magnitude` is the cutoff the catalog was filtered with; dot sizes
    /// are scaled against it.
    pub fn build(catalog: &StarCatalog, max_magnitude: f64, config: &SkyConfig) -> Self {
        let stars: Vec<ProjectedStar> = catalog
            .iter()
            .map(|star| {
                ProjectedStar::project(star, max_magnitude, &config.geometry, &config.labels)
            })
            .collect();
        debug!(
            "Projected {} stars ({} labeled)",
            stars.len(),
            stars.iter().filter(|s| s.label.is_some()).count()
        );

        Self {
            geometry: config.geometry,
            graticule: Graticule::new(&config.geometry),
            stars,
        }
    }

    pub fn hemisphere(&self, hemisphere: Hemisphere) -> impl Iterator<Item = &ProjectedStar> {
        self.stars.iter().filter(move |s| s.hemisphere == hemisphere)
    }

    pub fn labeled(&self) -> impl Iterator<Item = &ProjectedStar> {
        self.stars.iter().filter(|s| s.label.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector3;

    fn star(id: u32, names: &[&str], pos: [f64; 3], mag: f32) -> StarRecord {
        StarRecord {
            id,
            names: names.iter().map(|s| s.to_string()).collect(),
            position: Vector3::new(pos[0], pos[1], pos[2]),
            magnitude: mag,
            color: Rgb::new(10, 20, 30),
        }
    }

    #[test]
    fn star_on_x_axis_lands_at_map_centers() {
        let config = SkyConfig::default();
        let projected = ProjectedStar::project(
            &star(1, &["Marker"], [4.0, 0.0, 0.0], -4.0),
            config.max_magnitude,
            &config.geometry,
            &config.labels,
        );
        assert_eq!(projected.wide, (1024, 512));
        // Equator on the rim, RA 0 to the right of center.
        assert_eq!(projected.polar, (1024, 512));
        assert_eq!(projected.hemisphere, Hemisphere::North);
        assert_eq!(projected.size, 2);
        assert_eq!(projected.color, Rgb::new(10, 20, 30));
        assert!(projected.label.is_none());
    }

    #[test]
    fn labels_use_primary_name_when_any_name_matches() {
        let catalog = StarCatalog::from_stars(vec![
            star(1, &["Alp UMi", "Polaris"], [0.0, 0.0, 100.0], 2.0),
            star(2, &["Bet Oct"], [0.0, 0.1, -50.0], 4.0),
        ])
        .unwrap();
        let config = SkyConfig::default();
        let map = SkyMap::build(&catalog, config.max_magnitude, &config);

        assert_eq!(map.stars.len(), 2);
        let labeled: Vec<_> = map.labeled().collect();
        assert_eq!(labeled.len(), 1);
        assert_eq!(labeled[0].label.as_deref(), Some("Alp UMi"));

        // North pole star sits at the polar map center.
        assert_eq!(labeled[0].polar, (512, 512));
        assert_eq!(map.hemisphere(Hemisphere::North).count(), 1);
        assert_eq!(map.hemisphere(Hemisphere::South).next().map(|s| s.id), Some(2));
    }
}
