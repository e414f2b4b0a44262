//! Explicit load → recenter → rotate → project pipeline.
//!
//! Each phase returns an owned snapshot and never touches its input, so an
//! interactive caller can keep a [`Recentered`] sky around and re-rotate it for
//! every change of orientation without reloading or recentering.

use std::path::Path;

use tracing::info;

use crate::catalogs::{decode_catalog, load_catalog_from_file};
use crate::config::SkyConfig;
use crate::error::SkyResult;
use crate::recenter::recenter;
use crate::{OrientationParams, Rotor, SkyMap, StarCatalog};

/// A loaded catalog, in catalog frame with absolute magnitudes.
#[derive(Debug, Clone)]
pub struct SkySession {
    catalog: StarCatalog,
}

impl SkySession {
    pub fn new(catalog: StarCatalog) -> Self {
        Self { catalog }
    }

    /// Decode a catalog from raw bytes.
    pub fn load(data: &[u8]) -> SkyResult<Self> {
        Ok(Self::new(decode_catalog(data)?))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self::new(load_catalog_from_file(path)?))
    }

    pub fn catalog(&self) -> &StarCatalog {
        &self.catalog
    }

    /// Sky as seen from the star named `center`, down to `max_magnitude`.
    pub fn recenter(&self, center: &str, max_magnitude: f64) -> SkyResult<Recentered> {
        let catalog = recenter(&self.catalog, center, max_magnitude)?;
        Ok(Recentered {
            center: center.to_string(),
            max_magnitude,
            catalog,
        })
    }

    /// Run every phase with one configuration.
    pub fn generate(&self, config: &SkyConfig) -> SkyResult<SkyMap> {
        let sky = self
            .recenter(&config.center_star, config.max_magnitude)?
            .rotate(&config.orientation)
            .project(config);
        info!(
            "Generated sky around {}: {} stars",
            config.center_star,
            sky.stars.len()
        );
        Ok(sky)
    }
}

/// Stars around a chosen center, still in catalog orientation, carrying
/// apparent magnitudes.
#[derive(Debug, Clone)]
pub struct Recentered {
    center: String,
    max_magnitude: f64,
    catalog: StarCatalog,
}

impl Recentered {
    pub fn center(&self) -> &str {
        &self.center
    }

    pub fn max_magnitude(&self) -> f64 {
        self.max_magnitude
    }

    pub fn catalog(&self) -> &StarCatalog {
        &self.catalog
    }

    /// Rotate into the observer frame of a planet with `orientation`.
    pub fn rotate(&self, orientation: &OrientationParams) -> RotatedSky {
        let rotor = orientation.rotor();
        RotatedSky {
            rotor,
            max_magnitude: self.max_magnitude,
            catalog: self.catalog.rotated(&rotor),
        }
    }
}

/// Stars in the observer frame, ready to project.
#[derive(Debug, Clone)]
pub struct RotatedSky {
    rotor: Rotor,
    max_magnitude: f64,
    catalog: StarCatalog,
}

impl RotatedSky {
    pub fn rotor(&self) -> &Rotor {
        &self.rotor
    }

    pub fn max_magnitude(&self) -> f64 {
        self.max_magnitude
    }

    pub fn catalog(&self) -> &StarCatalog {
        &self.catalog
    }

    /// Place the stars on the maps of `config.geometry`.
    ///
    /// Dot sizes follow the cutoff chosen at recentering, not
    /// `config.max_magnitude`.
    pub fn project(&self, config: &SkyConfig) -> SkyMap {
        SkyMap::build(&self.catalog, self.max_magnitude, config)
    }
}
