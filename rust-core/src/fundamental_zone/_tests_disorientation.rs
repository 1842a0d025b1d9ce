#[cfg(test)]
mod _tests_disorientation {
    use super::super::disorientation::*;
    use crate::rotations::{from_axis_angle, misorientation_angle, rotation_angle};
    use crate::symmetries::{generate_symmetry_operations, ProperPointGroup, SymmetryOperatorSet};
    use nalgebra::Vector3;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_equivalent_orientations_have_zero_disorientation() {
        let ops = generate_symmetry_operations(ProperPointGroup::O);
        let q = from_axis_angle(Vector3::new(0.2, 0.7, -0.4), 0.8);
        for equivalent in ops.orbit(&q) {
            assert!(disorientation(&q, &equivalent, &ops) < 1e-7);
        }
    }

    #[test]
    fn test_disorientation_is_symmetric() {
        let ops = generate_symmetry_operations(ProperPointGroup::D4);
        let a = from_axis_angle(Vector3::new(1.0, 0.2, 0.1), 0.6);
        let b = from_axis_angle(Vector3::new(-0.3, 0.5, 0.9), 1.9);
        let ab = disorientation(&a, &b, &ops);
        let ba = disorientation(&b, &a, &ops);
        assert!((ab - ba).abs() < TOL);
        assert!(ab <= misorientation_angle(&a, &b) + TOL);
    }

    #[test]
    fn test_cubic_rotations_about_z() {
        let ops = generate_symmetry_operations(ProperPointGroup::O);
        let a = from_axis_angle(Vector3::z(), 10f64.to_radians());
        let b = from_axis_angle(Vector3::z(), 80f64.to_radians());
        assert!((disorientation(&a, &b, &ops) - 20f64.to_radians()).abs() < TOL);
    }

    #[test]
    fn test_trivial_group_is_misorientation() {
        let ops = SymmetryOperatorSet::identity_only();
        let a = from_axis_angle(Vector3::x(), 0.4);
        let b = from_axis_angle(Vector3::y(), 1.2);
        assert!((disorientation(&a, &b, &ops) - misorientation_angle(&a, &b)).abs() < TOL);
    }

    #[test]
    fn test_minimal_angle_representative() {
        let ops = generate_symmetry_operations(ProperPointGroup::O);
        let q = from_axis_angle(Vector3::z(), 100f64.to_radians());
        let representative = minimal_angle_representative(&q, &ops);
        assert!((rotation_angle(&representative) - 10f64.to_radians()).abs() < TOL);
    }
}
