#[cfg(test)]
mod _tests_cubochoric {
    use super::super::cubochoric::*;
    use super::super::cubochoric_mapping::*;
    use crate::config::{CUBE_SEMI_EDGE, HOMOCHORIC_RADIUS};
    use crate::interfaces::OrientationGrid;
    use crate::rotations::{is_canonical, is_identity, rotation_angle};
    use nalgebra::Vector3;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-9;

    // ==================== Region classification ====================

    #[test]
    fn test_region_classification() {
        let a = CUBE_SEMI_EDGE;
        assert_eq!(CubeRegion::classify(&Vector3::zeros()), CubeRegion::Origin);
        assert_eq!(
            CubeRegion::classify(&Vector3::new(0.0, 0.0, a)),
            CubeRegion::PyramidAxis(Pyramid::PlusZ)
        );
        assert_eq!(
            CubeRegion::classify(&Vector3::new(-0.5, 0.0, 0.0)),
            CubeRegion::PyramidAxis(Pyramid::MinusX)
        );
        assert_eq!(
            CubeRegion::classify(&Vector3::new(0.2, 0.1, 0.5)),
            CubeRegion::Sector(Pyramid::PlusZ, SectorOrientation::XDominant)
        );
        assert_eq!(
            CubeRegion::classify(&Vector3::new(0.1, 0.2, -0.5)),
            CubeRegion::Sector(Pyramid::MinusZ, SectorOrientation::YDominant)
        );
        // +x pyramid works in the (y, z, x) frame
        assert_eq!(
            CubeRegion::classify(&Vector3::new(0.5, 0.1, 0.3)),
            CubeRegion::Sector(Pyramid::PlusX, SectorOrientation::YDominant)
        );
        assert_eq!(Pyramid::containing(&Vector3::new(0.1, -0.9, 0.3)), Pyramid::MinusY);
    }

    #[test]
    fn test_pyramid_edges_follow_test_order() {
        // On the shared edge of +z and +x the +z test wins
        assert_eq!(Pyramid::containing(&Vector3::new(0.5, 0.0, 0.5)), Pyramid::PlusZ);
        assert_eq!(Pyramid::containing(&Vector3::new(0.5, 0.5, 0.0)), Pyramid::PlusX);
        assert_eq!(Pyramid::containing(&Vector3::new(0.0, 0.5, 0.5)), Pyramid::PlusZ);
    }

    // ==================== Cube to ball ====================

    #[test]
    fn test_origin_maps_to_identity() {
        assert_eq!(cube_to_ball(&Vector3::zeros()), Vector3::zeros());
        assert!(is_identity(&cube_to_quaternion(&Vector3::zeros()), TOL));
    }

    #[test]
    fn test_face_centre_and_corner_reach_ball_surface() {
        let a = CUBE_SEMI_EDGE;
        for point in [
            Vector3::new(a, 0.0, 0.0),
            Vector3::new(0.0, -a, 0.0),
            Vector3::new(a, a, a),
            Vector3::new(-a, a, 0.3),
        ] {
            let h = cube_to_ball(&point);
            assert!(
                (h.norm() - HOMOCHORIC_RADIUS).abs() < 1e-9,
                "{:?} mapped to radius {}",
                point,
                h.norm()
            );
        }
    }

    #[test]
    fn test_face_centre_direction() {
        let h = cube_to_ball(&Vector3::new(CUBE_SEMI_EDGE, 0.0, 0.0));
        assert!((h - Vector3::new(HOMOCHORIC_RADIUS, 0.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn test_map_is_odd() {
        let points = [
            Vector3::new(0.3, -0.2, 0.7),
            Vector3::new(0.9, 0.4, -0.1),
            Vector3::new(-0.05, 0.8, 0.6),
        ];
        for point in points {
            let h = cube_to_ball(&point);
            let h_neg = cube_to_ball(&(-point));
            assert!((h + h_neg).norm() < 1e-12);
        }
    }

    #[test]
    fn test_ball_stays_inside_radius() {
        let grid = CubochoricGrid::new(6).unwrap();
        for index in 0..grid.len() {
            let h = cube_to_ball(&grid.cube_point(index));
            assert!(h.norm() <= HOMOCHORIC_RADIUS + 1e-9);
        }
    }

    // ==================== Ball to rotation ====================

    #[test]
    fn test_surface_is_rotation_by_pi() {
        let q = ball_to_quaternion(&Vector3::new(0.0, 0.0, HOMOCHORIC_RADIUS));
        assert!((rotation_angle(&q) - PI).abs() < 1e-8);
        assert!(q.w.abs() < 1e-9);
        assert!((q.k - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_homochoric_radius_relation() {
        // |h| = (3/4 (ω − sin ω))^(1/3)
        for omega in [0.1, 0.7, 1.5, 2.4, 3.0] {
            let radius = (0.75 * (omega - f64::sin(omega))).cbrt();
            let q = ball_to_quaternion(&Vector3::new(radius, 0.0, 0.0));
            assert!((rotation_angle(&q) - omega).abs() < 1e-7, "omega {}", omega);
        }
    }

    // ==================== Grid and sampling ====================

    #[test]
    fn test_grid_size_and_order() {
        let grid = CubochoricGrid::new(2).unwrap();
        assert_eq!(grid.len(), 125);
        let a = CUBE_SEMI_EDGE;
        assert!((grid.cube_point(0) - Vector3::new(-a, -a, -a)).norm() < TOL);
        // z varies fastest
        assert!((grid.cube_point(1) - Vector3::new(-a, -a, -0.5 * a)).norm() < TOL);
        assert!((grid.cube_point(62)).norm() < TOL);
        assert!((grid.cube_point(124) - Vector3::new(a, a, a)).norm() < TOL);
    }

    #[test]
    fn test_zero_steps_is_identity_only() {
        let sample = cubochoric_sampling(0).unwrap();
        assert_eq!(sample.len(), 1);
        assert!(is_identity(&sample[0], TOL));
    }

    #[test]
    fn test_opposite_faces_collapse() {
        // Interior points stay distinct, antipodal surface pairs collapse:
        // (2N+1)³ − ((2N+1)³ − (2N−1)³) / 2
        for (steps, expected) in [(1, 14), (2, 76), (3, 234), (4, 536)] {
            let sample = cubochoric_sampling(steps).unwrap();
            assert_eq!(sample.len(), expected, "N = {}", steps);
        }
    }

    #[test]
    fn test_sample_properties() {
        let sample = cubochoric_sampling(5).unwrap();
        let identities = sample.iter().filter(|q| is_identity(q, TOL)).count();
        assert_eq!(identities, 1);
        for q in &sample {
            assert!((q.into_inner().norm() - 1.0).abs() < 1e-6);
            assert!(is_canonical(q));
        }
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let first = cubochoric_sampling(4).unwrap();
        let second = cubochoric_sampling(4).unwrap();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.coords, b.coords);
        }
    }

    #[test]
    fn test_sample_size_grows_with_steps() {
        let mut previous = 0;
        for steps in 0..6 {
            let size = cubochoric_sampling(steps).unwrap().len();
            assert!(size > previous);
            previous = size;
        }
    }

    #[test]
    fn test_identity_is_grid_centre() {
        let grid = CubochoricGrid::new(3).unwrap();
        let centre = grid.len() / 2;
        assert!(is_identity(&grid.orientation(centre), TOL));
        assert!(!is_identity(&grid.orientation(0), TOL));
    }
}
