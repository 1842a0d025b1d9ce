use nalgebra::UnitQuaternion;

use crate::rotations::{misorientation_angle, rotation_angle};
use crate::symmetries::SymmetryOperatorSet;

/// Smallest rotation angle between `a` and `b` over all symmetry-equivalent
/// versions of `a`, min over g of angle((g·a)·b⁻¹).
///
/// Symmetric in its arguments and zero iff the two are equivalent.
pub fn disorientation(
    a: &UnitQuaternion<f64>,
    b: &UnitQuaternion<f64>,
    operators: &SymmetryOperatorSet,
) -> f64 {
    operators
        .operations()
        .iter()
        .map(|op| misorientation_angle(&op.act_on(a), b))
        .fold(f64::INFINITY, f64::min)
}

/// The member of the orbit {g·q} with the smallest rotation angle; the first one wins ties
pub fn minimal_angle_representative(
    q: &UnitQuaternion<f64>,
    operators: &SymmetryOperatorSet,
) -> UnitQuaternion<f64> {
    let mut best = *q;
    let mut best_angle = f64::INFINITY;
    for candidate in operators.orbit(q) {
        let angle = rotation_angle(&candidate);
        if angle < best_angle {
            best = candidate;
            best_angle = angle;
        }
    }
    best
}
