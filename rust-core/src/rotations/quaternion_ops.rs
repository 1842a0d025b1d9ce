use nalgebra::{Quaternion, Unit, UnitQuaternion, Vector3};
use std::cmp::Ordering;

use crate::config::CANONICAL_SIGN_TOLERANCE;

/// Pick the representative of {q, −q} used everywhere in the crate.
///
/// w > τ keeps q, w < −τ negates it. For |w| ≤ τ (rotations by π) the first vector
/// component with magnitude above τ is made positive. The tolerance absorbs the
/// residual |w| ~ 1e-11 left by the homochoric polynomial fit on the cube surface.
pub fn canonicalize(q: &UnitQuaternion<f64>) -> UnitQuaternion<f64> {
    let components = [q.w, q.i, q.j, q.k];
    let leading = components
        .iter()
        .copied()
        .find(|c| c.abs() > CANONICAL_SIGN_TOLERANCE)
        .unwrap_or(1.0);

    if leading < 0.0 {
        negate(q)
    } else {
        *q
    }
}

/// Whether `q` is already its own canonical representative
pub fn is_canonical(q: &UnitQuaternion<f64>) -> bool {
    [q.w, q.i, q.j, q.k]
        .iter()
        .copied()
        .find(|c| c.abs() > CANONICAL_SIGN_TOLERANCE)
        .map_or(true, |c| c > 0.0)
}

/// −q, the same rotation on the other sheet of the double cover
pub fn negate(q: &UnitQuaternion<f64>) -> UnitQuaternion<f64> {
    UnitQuaternion::new_unchecked(-q.into_inner())
}

/// Canonical quaternion for a rotation of `angle` radians about `axis`.
/// A zero axis yields the identity.
pub fn from_axis_angle(axis: Vector3<f64>, angle: f64) -> UnitQuaternion<f64> {
    match Unit::try_new(axis, f64::EPSILON) {
        Some(axis) => canonicalize(&UnitQuaternion::from_axis_angle(&axis, angle)),
        None => UnitQuaternion::identity(),
    }
}

/// Bunge (Z-X-Z) Euler angles, composed as q = Rz(α) · Rx(β) · Rz(γ).
pub fn from_euler_zxz(alpha: f64, beta: f64, gamma: f64) -> UnitQuaternion<f64> {
    let (sin_b, cos_b) = (0.5 * beta).sin_cos();
    let sigma = 0.5 * (alpha + gamma);
    let delta = 0.5 * (alpha - gamma);

    let q = Quaternion::new(
        cos_b * sigma.cos(),
        sin_b * delta.cos(),
        sin_b * delta.sin(),
        cos_b * sigma.sin(),
    );
    canonicalize(&UnitQuaternion::from_quaternion(q))
}

/// Rotation angle in [0, π], insensitive to the sign of q
pub fn rotation_angle(q: &UnitQuaternion<f64>) -> f64 {
    2.0 * q.imag().norm().atan2(q.w.abs())
}

/// Rodrigues–Frank vector tan(ω/2)·n, or `None` for rotations by π
pub fn rodrigues_vector(q: &UnitQuaternion<f64>) -> Option<Vector3<f64>> {
    if q.w.abs() <= CANONICAL_SIGN_TOLERANCE {
        return None;
    }
    Some(q.imag() / q.w)
}

/// Angle of the rotation taking `b` to `a`, without symmetry
pub fn misorientation_angle(a: &UnitQuaternion<f64>, b: &UnitQuaternion<f64>) -> f64 {
    rotation_angle(&(a * b.inverse()))
}

/// Euclidean distance between the closer of ±b and a
pub fn quaternion_distance(a: &UnitQuaternion<f64>, b: &UnitQuaternion<f64>) -> f64 {
    let minus = (a.coords - b.coords).norm();
    let plus = (a.coords + b.coords).norm();
    minus.min(plus)
}

/// Lexicographic order on the vector parts, treating differences below `tol` as ties.
/// For orientations sharing |w| this is the lexicographic order of their Rodrigues vectors.
pub fn compare_vector_parts(a: &UnitQuaternion<f64>, b: &UnitQuaternion<f64>, tol: f64) -> Ordering {
    for (x, y) in [(a.i, b.i), (a.j, b.j), (a.k, b.k)] {
        if (x - y).abs() > tol {
            return if x < y { Ordering::Less } else { Ordering::Greater };
        }
    }
    Ordering::Equal
}

/// Identity check up to the sign of q
pub fn is_identity(q: &UnitQuaternion<f64>, tol: f64) -> bool {
    (q.w.abs() - 1.0).abs() <= tol && q.imag().norm() <= tol
}
