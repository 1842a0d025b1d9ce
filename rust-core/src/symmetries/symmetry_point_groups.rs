use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::PI;

use crate::rotations::from_axis_angle;
use crate::symmetries::point_groups::ProperPointGroup;
use crate::symmetries::symmetry_operations::SymmetryOperatorSet;

// Axis conventions: the principal n-fold axis is z, the secondary 2-fold axis of the
// dihedral groups is x, and cubic 3-fold axes lie along <111>.

fn n_fold(axis: Vector3<f64>, n: u32) -> UnitQuaternion<f64> {
    from_axis_angle(axis, 2.0 * PI / n as f64)
}

/// Generate the rotation operators of a proper point group.
pub fn generate_symmetry_operations(group: ProperPointGroup) -> SymmetryOperatorSet {
    match group {
        ProperPointGroup::C1 => generate_triclinic_operations(),
        ProperPointGroup::C2 => generate_monoclinic_operations(),
        ProperPointGroup::D2 => generate_orthorhombic_operations(),
        ProperPointGroup::C4 | ProperPointGroup::D4 => generate_tetragonal_operations(group),
        ProperPointGroup::C3 | ProperPointGroup::D3 => generate_trigonal_operations(group),
        ProperPointGroup::C6 | ProperPointGroup::D6 => generate_hexagonal_operations(group),
        ProperPointGroup::T | ProperPointGroup::O => generate_cubic_operations(group),
    }
}

/// Generate point group operations for cubic system (23 or 432)
pub fn generate_cubic_operations(group: ProperPointGroup) -> SymmetryOperatorSet {
    let diagonal = Vector3::new(1.0, 1.0, 1.0);
    let generators = match group {
        ProperPointGroup::O => vec![n_fold(Vector3::z(), 4), n_fold(diagonal, 3)],
        _ => vec![n_fold(Vector3::z(), 2), n_fold(Vector3::x(), 2), n_fold(diagonal, 3)],
    };
    SymmetryOperatorSet::from_generators(&generators)
}

/// Generate point group operations for hexagonal system (6 or 622)
pub fn generate_hexagonal_operations(group: ProperPointGroup) -> SymmetryOperatorSet {
    let mut generators = vec![n_fold(Vector3::z(), 6)];
    if group == ProperPointGroup::D6 {
        generators.push(n_fold(Vector3::x(), 2));
    }
    SymmetryOperatorSet::from_generators(&generators)
}

/// Generate point group operations for tetragonal system (4 or 422)
pub fn generate_tetragonal_operations(group: ProperPointGroup) -> SymmetryOperatorSet {
    let mut generators = vec![n_fold(Vector3::z(), 4)];
    if group == ProperPointGroup::D4 {
        generators.push(n_fold(Vector3::x(), 2));
    }
    SymmetryOperatorSet::from_generators(&generators)
}

/// Generate point group operations for orthorhombic system (222)
pub fn generate_orthorhombic_operations() -> SymmetryOperatorSet {
    SymmetryOperatorSet::from_generators(&[n_fold(Vector3::z(), 2), n_fold(Vector3::x(), 2)])
}

/// Generate point group operations for trigonal system (3 or 32)
pub fn generate_trigonal_operations(group: ProperPointGroup) -> SymmetryOperatorSet {
    let mut generators = vec![n_fold(Vector3::z(), 3)];
    if group == ProperPointGroup::D3 {
        generators.push(n_fold(Vector3::x(), 2));
    }
    SymmetryOperatorSet::from_generators(&generators)
}

/// Generate point group operations for monoclinic system (2, about z)
pub fn generate_monoclinic_operations() -> SymmetryOperatorSet {
    SymmetryOperatorSet::from_generators(&[n_fold(Vector3::z(), 2)])
}

/// Generate point group operations for triclinic system (1)
pub fn generate_triclinic_operations() -> SymmetryOperatorSet {
    SymmetryOperatorSet::identity_only()
}
