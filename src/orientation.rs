//! Observer orientation: turns the four orbital/rotational angles of a planet
//! into the single rotor that maps the catalog frame onto the planet's sky.

use tracing::debug;

use crate::{Rotor, Vector3};

/// Earth's axial tilt (obliquity of the ecliptic) in radians, with the sign
/// convention used for the `axial_tilt` parameter.
pub const EARTH_AXIAL_TILT: f64 = -23.439_281_1 * std::f64::consts::PI / 180.0;

/// Orientation of the observer's planet. All angles are radians and are used
/// as given; no range wrapping is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationParams {
    /// Tilt of the rotation axis.
    pub axial_tilt: f64,
    /// Inclination of the orbital plane.
    pub inclination: f64,
    /// Longitude of the ascending node of the orbit.
    pub ascending_node: f64,
    /// Longitude of the ascending node of the planet's equator.
    pub equatorial_longitude: f64,
}

impl Default for OrientationParams {
    fn default() -> Self {
        Self {
            axial_tilt: EARTH_AXIAL_TILT,
            inclination: 0.0,
            ascending_node: 0.0,
            equatorial_longitude: 0.0,
        }
    }
}

impl OrientationParams {
    /// Compose the catalog-to-observer rotor.
    ///
    /// The sequence is fixed:
    /// 1. rotate by `-axial_tilt` about X;
    /// 2. rotate by `axial_tilt` about the X axis turned by
    ///    `equatorial_longitude` around Z;
    /// 3. rotate by `inclination` about the X axis turned by
    ///    `ascending_node` around Z.
    ///
    /// Each step is appended with [`Rotor::compose`] on the right of the
    /// running rotor. Reordering any step changes the sky.
    pub fn rotor(&self) -> Rotor {
        let mut orientation = Rotor::identity();

        orientation = orientation.compose(&Rotor::about_x(-self.axial_tilt));

        let equator = Rotor::about_z(self.equatorial_longitude);
        let equator_axis = equator.rotate_vector(&Vector3::x());
        orientation = orientation.compose(&Rotor::from_angle_axis(self.axial_tilt, equator_axis));

        let orbit = Rotor::about_z(self.ascending_node);
        let node_axis = orbit.rotate_vector(&Vector3::x());
        orientation = orientation.compose(&Rotor::from_angle_axis(self.inclination, node_axis));

        debug!("Orientation {:?} -> {}", self, orientation);
        orientation
    }
}
