//! Rotors: unit quaternions used to compose and apply 3D rotations.
//!
//! Composition is the Hamilton product, and a vector is rotated with the
//! sandwich product `r * v * r⁻¹`. With that pair of conventions
//! `a.compose(&b).rotate_vector(v) == a.rotate_vector(b.rotate_vector(v))`:
//! the right-hand operand acts on the vector first, in the frame already
//! carried by the left-hand one.
//!
//! No renormalization is done after composing; the handful of compositions
//! made per sky keeps the drift far below anything visible.

use std::fmt;
use std::ops::Mul;

use nalgebra::Quaternion;

use crate::Vector3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotor {
    q: Quaternion<f64>,
}

impl Default for Rotor {
    fn default() -> Self {
        Self::identity()
    }
}

impl Rotor {
    pub fn identity() -> Self {
        Self::from_components(1.0, 0.0, 0.0, 0.0)
    }

    /// Rotation by `angle` radians about `axis`, right-handed.
    ///
    /// The axis does not need to be normalized. A zero axis has no direction
    /// and yields the identity rotor.
    pub fn from_angle_axis(angle: f64, axis: Vector3) -> Self {
        let Some(axis) = axis.try_normalize(0.0) else {
            return Self::identity();
        };
        let (sin_half, cos_half) = (angle / 2.0).sin_cos();
        Self::from_components(
            cos_half,
            sin_half * axis.x,
            sin_half * axis.y,
            sin_half * axis.z,
        )
    }

    /// Build a rotor directly from its quaternion components `(a, x, y, z)`.
    ///
    /// No half-angle conversion or normalization is applied.
    pub fn from_components(a: f64, x: f64, y: f64, z: f64) -> Self {
        Self {
            q: Quaternion::new(a, x, y, z),
        }
    }

    pub fn about_x(angle: f64) -> Self {
        Self::from_angle_axis(angle, Vector3::x())
    }

    pub fn about_y(angle: f64) -> Self {
        Self::from_angle_axis(angle, Vector3::y())
    }

    pub fn about_z(angle: f64) -> Self {
        Self::from_angle_axis(angle, Vector3::z())
    }

    /// Scalar component.
    pub fn a(&self) -> f64 {
        self.q.w
    }

    pub fn x(&self) -> f64 {
        self.q.i
    }

    pub fn y(&self) -> f64 {
        self.q.j
    }

    pub fn z(&self) -> f64 {
        self.q.k
    }

    pub fn quaternion(&self) -> &Quaternion<f64> {
        &self.q
    }

    /// Euclidean norm of the four components; 1 for a proper rotation.
    pub fn norm(&self) -> f64 {
        self.q.norm()
    }

    /// Hamilton product `self * other`.
    pub fn compose(&self, other: &Rotor) -> Rotor {
        Rotor {
            q: self.q * other.q,
        }
    }

    /// Conjugate `(a, -x, -y, -z)`; the inverse rotation for a unit rotor.
    pub fn reverse(&self) -> Rotor {
        Rotor {
            q: self.q.conjugate(),
        }
    }

    /// Rotate `v` with the sandwich product `self * (0, v) * reverse(self)`.
    pub fn rotate_vector(&self, v: &Vector3) -> Vector3 {
        let pure = Quaternion::from_imag(*v);
        (self.q * pure * self.q.conjugate()).imag()
    }
}

impl Mul for Rotor {
    type Output = Rotor;

    fn mul(self, rhs: Rotor) -> Rotor {
        self.compose(&rhs)
    }
}

impl fmt::Display for Rotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rotor(a={:.9}, x={:.9}, y={:.9}, z={:.9})",
            self.a(),
            self.x(),
            self.y(),
            self.z()
        )
    }
}
