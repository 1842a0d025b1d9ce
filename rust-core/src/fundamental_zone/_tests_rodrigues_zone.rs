#[cfg(test)]
mod _tests_rodrigues_zone {
    use super::super::rodrigues_zone::*;
    use crate::rotations::{from_axis_angle, rodrigues_vector};
    use crate::symmetries::{generate_symmetry_operations, ProperPointGroup, SymmetryOperatorSet};
    use nalgebra::{UnitQuaternion, Vector3};
    use std::f64::consts::{FRAC_PI_4, PI};

    fn cubic_zone() -> RodriguesFundamentalZone {
        RodriguesFundamentalZone::from_operators(&generate_symmetry_operations(ProperPointGroup::O))
    }

    #[test]
    fn test_plane_counts() {
        // 432: 3 four-fold, 3 axial two-fold, 4 three-fold, 6 diagonal two-fold
        assert_eq!(cubic_zone().planes().len(), 16);
        let hexagonal = RodriguesFundamentalZone::from_operators(&generate_symmetry_operations(ProperPointGroup::D6));
        assert_eq!(hexagonal.planes().len(), 9);
    }

    #[test]
    fn test_trivial_group_is_unbounded() {
        let zone = RodriguesFundamentalZone::from_operators(&SymmetryOperatorSet::identity_only());
        assert!(zone.is_unbounded());
        assert_eq!(zone.classify(&from_axis_angle(Vector3::x(), PI)), ZoneMembership::Interior);
    }

    #[test]
    fn test_cubic_classification() {
        let zone = cubic_zone();
        assert_eq!(zone.classify(&UnitQuaternion::identity()), ZoneMembership::Interior);
        assert_eq!(
            zone.classify(&from_axis_angle(Vector3::z(), 30f64.to_radians())),
            ZoneMembership::Interior
        );
        assert_eq!(zone.classify(&from_axis_angle(Vector3::z(), FRAC_PI_4)), ZoneMembership::Boundary);
        assert_eq!(
            zone.classify(&from_axis_angle(Vector3::z(), 50f64.to_radians())),
            ZoneMembership::Outside
        );
        assert_eq!(zone.classify(&from_axis_angle(Vector3::y(), PI)), ZoneMembership::Outside);
    }

    #[test]
    fn test_classification_ignores_sign() {
        let zone = cubic_zone();
        let q = from_axis_angle(Vector3::new(1.0, 2.0, 0.5), 0.3);
        let negated = crate::rotations::negate(&q);
        assert_eq!(zone.classify(&q), zone.classify(&negated));
    }

    #[test]
    fn test_rodrigues_membership_agrees() {
        let zone = cubic_zone();
        for (axis, angle) in [
            (Vector3::z(), 0.5),
            (Vector3::z(), 0.9),
            (Vector3::new(1.0, 1.0, 1.0), 1.0),
            (Vector3::new(1.0, 1.0, 1.0), 1.1),
            (Vector3::new(0.3, -0.4, 0.2), 0.2),
        ] {
            let q = from_axis_angle(axis, angle);
            let rodrigues = rodrigues_vector(&q).unwrap();
            assert_eq!(zone.contains(&q), zone.contains_rodrigues(&rodrigues), "{:?} {}", axis, angle);
        }
    }

    #[test]
    fn test_cube_diagonal_vertex() {
        // The zone reaches 60° along [111]
        let zone = cubic_zone();
        let diagonal = Vector3::new(1.0, 1.0, 1.0);
        assert!(zone.contains(&from_axis_angle(diagonal, 60f64.to_radians() - 1e-6)));
        assert!(!zone.contains(&from_axis_angle(diagonal, 60f64.to_radians() + 1e-3)));
    }

    #[test]
    fn test_custom_tolerance() {
        let zone = cubic_zone().with_tolerance(1e-3);
        let q = from_axis_angle(Vector3::z(), FRAC_PI_4 + 1e-4);
        assert_eq!(zone.classify(&q), ZoneMembership::Boundary);
        assert_eq!(zone.tolerance(), 1e-3);
    }
}
