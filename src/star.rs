use crate::Vector3;

/// 8-bit RGB color of a star's dot on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A single star from the neighborhood catalog.
///
/// `position` is in parsecs in whatever frame the owning catalog is in: the
/// catalog frame after decoding, the center-star frame after recentering,
/// the observer frame after rotation.
///
/// `magnitude` is the absolute magnitude in a freshly decoded catalog. In a
/// recentered catalog it holds the apparent magnitude seen from the new
/// origin.
#[derive(Debug, Clone, PartialEq)]
pub struct StarRecord {
    pub id: u32,
    /// Alternate designations; the first entry is the display name.
    pub names: Vec<String>,
    pub position: Vector3,
    pub magnitude: f32,
    pub color: Rgb,
}

impl StarRecord {
    /// Primary display name.
    pub fn primary_name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or_default()
    }

    /// `true` when any of the star's designations equals `name` exactly.
    pub fn has_name(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Distance from the catalog origin in parsecs.
    pub fn distance(&self) -> f64 {
        self.position.norm()
    }
}
