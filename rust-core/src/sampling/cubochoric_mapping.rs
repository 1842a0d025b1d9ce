use nalgebra::{Quaternion, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::SQRT_2;

use crate::config::{
    HOMOCHORIC_FIT, LAMBERT_PI12, LAMBERT_PREF, LAMBERT_PREK, LAMBERT_R24, LAMBERT_SCALE,
    LAMBERT_SQRT_PI,
};
use crate::rotations::canonicalize;

// Squared ball radius below which a point is treated as the origin
const HOMOCHORIC_ORIGIN_EPS: f64 = 1e-16;

/// One of the six square pyramids the cube is split into, named by the face it points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pyramid {
    PlusZ,
    MinusZ,
    PlusX,
    MinusX,
    PlusY,
    MinusY,
}

impl Pyramid {
    /// First pyramid whose face test holds, in the order +z, −z, +x, −x, +y, −y
    pub fn containing(point: &Vector3<f64>) -> Self {
        let (x, y, z) = (point.x, point.y, point.z);
        if x.abs() <= z && y.abs() <= z {
            Self::PlusZ
        } else if x.abs() <= -z && y.abs() <= -z {
            Self::MinusZ
        } else if z.abs() <= x && y.abs() <= x {
            Self::PlusX
        } else if z.abs() <= -x && y.abs() <= -x {
            Self::MinusX
        } else if x.abs() <= y && z.abs() <= y {
            Self::PlusY
        } else {
            Self::MinusY
        }
    }

    /// Cyclic permutation bringing this pyramid's axis onto z
    fn to_z_frame(self, point: &Vector3<f64>) -> Vector3<f64> {
        match self {
            Self::PlusZ | Self::MinusZ => *point,
            Self::PlusX | Self::MinusX => Vector3::new(point.y, point.z, point.x),
            Self::PlusY | Self::MinusY => Vector3::new(point.z, point.x, point.y),
        }
    }

    fn from_z_frame(self, point: &Vector3<f64>) -> Vector3<f64> {
        match self {
            Self::PlusZ | Self::MinusZ => *point,
            Self::PlusX | Self::MinusX => Vector3::new(point.z, point.x, point.y),
            Self::PlusY | Self::MinusY => Vector3::new(point.y, point.z, point.x),
        }
    }
}

/// Which in-plane coordinate dominates inside a pyramid (after the z-frame permutation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectorOrientation {
    /// |Y| ≤ |X|
    XDominant,
    YDominant,
}

/// Branch of the equal-volume map a cube point falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CubeRegion {
    Origin,
    /// On the axis of a pyramid, mapped straight onto the ball axis
    PyramidAxis(Pyramid),
    Sector(Pyramid, SectorOrientation),
}

impl CubeRegion {
    pub fn classify(point: &Vector3<f64>) -> Self {
        if point.x == 0.0 && point.y == 0.0 && point.z == 0.0 {
            return Self::Origin;
        }
        let pyramid = Pyramid::containing(point);
        let local = pyramid.to_z_frame(point);
        if local.x == 0.0 && local.y == 0.0 {
            Self::PyramidAxis(pyramid)
        } else if local.y.abs() <= local.x.abs() {
            Self::Sector(pyramid, SectorOrientation::XDominant)
        } else {
            Self::Sector(pyramid, SectorOrientation::YDominant)
        }
    }
}

/// Equal-volume map from the cubochoric cube (edge π^(2/3)) to the homochoric ball.
///
/// The cube is split into six pyramids; each is mapped to a ball sector through a
/// curved square (the inverse Lambert step). Points outside the cube are not rejected,
/// the caller owns the domain.
pub fn cube_to_ball(point: &Vector3<f64>) -> Vector3<f64> {
    let (pyramid, orientation) = match CubeRegion::classify(point) {
        CubeRegion::Origin => return Vector3::zeros(),
        CubeRegion::PyramidAxis(pyramid) => {
            let z = LAMBERT_SCALE * pyramid.to_z_frame(point).z;
            return pyramid.from_z_frame(&Vector3::new(0.0, 0.0, LAMBERT_PREF * z));
        }
        CubeRegion::Sector(pyramid, orientation) => (pyramid, orientation),
    };

    let local = LAMBERT_SCALE * pyramid.to_z_frame(point);
    let (x, y, z) = (local.x, local.y, local.z);

    // Cube face → curved square on the Lambert plane
    let (t1, t2) = match orientation {
        SectorOrientation::XDominant => {
            let (s, c) = (LAMBERT_PI12 * y / x).sin_cos();
            let q = LAMBERT_PREK * x / (SQRT_2 - c).sqrt();
            ((SQRT_2 * c - 1.0) * q, SQRT_2 * s * q)
        }
        SectorOrientation::YDominant => {
            let (s, c) = (LAMBERT_PI12 * x / y).sin_cos();
            let q = LAMBERT_PREK * y / (SQRT_2 - c).sqrt();
            (SQRT_2 * s * q, (SQRT_2 * c - 1.0) * q)
        }
    };

    // Inverse Lambert step onto the ball
    let radial = t1 * t1 + t2 * t2;
    let s = std::f64::consts::PI * radial / (24.0 * z * z);
    let shift = LAMBERT_SQRT_PI * radial / LAMBERT_R24 / z;
    let q = (1.0 - s).sqrt();

    pyramid.from_z_frame(&Vector3::new(t1 * q, t2 * q, LAMBERT_PREF * z - shift))
}

/// Homochoric vector h = (3/4 (ω − sin ω))^(1/3) n → unit quaternion.
///
/// cos(ω/2) comes from the polynomial fit in |h|²; the origin maps to the identity.
pub fn ball_to_quaternion(h: &Vector3<f64>) -> UnitQuaternion<f64> {
    let h2 = h.norm_squared();
    if h2 < HOMOCHORIC_ORIGIN_EPS {
        return UnitQuaternion::identity();
    }

    let mut cos_half = 0.0;
    let mut power = 1.0;
    for coefficient in HOMOCHORIC_FIT {
        cos_half += coefficient * power;
        power *= h2;
    }
    let half_angle = cos_half.clamp(-1.0, 1.0).acos();
    let (sin_half, cos_half) = half_angle.sin_cos();
    let axis = h / h2.sqrt();

    UnitQuaternion::new_normalize(Quaternion::from_parts(cos_half, axis * sin_half))
}

/// Cube point → canonical unit quaternion
pub fn cube_to_quaternion(point: &Vector3<f64>) -> UnitQuaternion<f64> {
    canonicalize(&ball_to_quaternion(&cube_to_ball(point)))
}
