#[cfg(test)]
mod _tests_fundamental_sampling {
    use super::super::fundamental_sampling::*;
    use super::super::sample_request::*;
    use crate::error::SamplingError;
    use crate::fundamental_zone::RodriguesFundamentalZone;
    use crate::interfaces::SamplingMethod;
    use crate::rotations::is_identity;
    use crate::sampling::cubochoric_sampling;
    use crate::symmetries::{generate_symmetry_operations, ProperPointGroup, SymmetryOperatorSet};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    // ==================== Regression counts ====================

    #[test]
    fn test_cubic_regression_small_grids() {
        init_logger();
        for (steps, expected) in [(10, 361), (20, 2691)] {
            let sample = sample_fundamental(&SampleRequest::for_point_group("432").with_density(steps)).unwrap();
            assert_eq!(sample.len(), expected, "N = {}", steps);
            assert_eq!(sample.density_parameter(), steps as usize);
            assert_eq!(sample.point_group(), Some(ProperPointGroup::O));
        }
    }

    #[test]
    #[ignore = "8.1 million candidates; run with --ignored"]
    fn test_cubic_regression_full_grid() {
        init_logger();
        let sample = sample_fundamental(&SampleRequest::for_point_group("432").with_density(100)).unwrap();
        assert_eq!(sample.len(), 333_227);
    }

    #[test]
    fn test_specifiers_resolve_to_same_group() {
        let expected = 361;
        let requests = [
            SampleRequest::for_point_group("m-3m"),
            SampleRequest::for_point_group("Oh"),
            SampleRequest::for_space_group(225),
            SampleRequest::new(ProperPointGroup::O),
        ];
        for request in requests {
            let sample = sample_fundamental(&request.with_density(10)).unwrap();
            assert_eq!(sample.len(), expected);
        }
    }

    #[test]
    fn test_explicit_operators() {
        let operators = generate_symmetry_operations(ProperPointGroup::O);
        let sample = sample_fundamental(&SampleRequest::new(operators).with_density(10)).unwrap();
        assert_eq!(sample.len(), 361);
        assert_eq!(sample.point_group(), None);
    }

    #[test]
    fn test_triclinic_keeps_whole_sample() {
        let sample = sample_fundamental(&SampleRequest::for_point_group("-1").with_density(3)).unwrap();
        assert_eq!(sample.len(), cubochoric_sampling(3).unwrap().len());
        assert_eq!(sample.point_group(), Some(ProperPointGroup::C1));
    }

    // ==================== Sample properties ====================

    #[test]
    fn test_identity_present_once_for_every_method() {
        for method in SamplingMethod::ALL {
            let request = SampleRequest::for_point_group("622")
                .with_resolution(15.0)
                .with_method(method);
            let sample = sample_fundamental(&request).unwrap();
            assert!(!sample.is_empty());
            assert_eq!(sample.iter().filter(|q| is_identity(q, 1e-9)).count(), 1);
            let index = sample.identity_index().unwrap();
            assert!(is_identity(&sample.as_slice()[index], 1e-9));
        }
    }

    #[test]
    fn test_cross_method_consistency() {
        let zone = RodriguesFundamentalZone::from_operators(&generate_symmetry_operations(ProperPointGroup::O));
        let sizes: Vec<usize> = SamplingMethod::ALL
            .iter()
            .map(|&method| {
                let request = SampleRequest::for_point_group("432")
                    .with_resolution(10.0)
                    .with_method(method);
                let sample = sample_fundamental(&request).unwrap();
                for q in &sample {
                    assert!(zone.contains(q));
                    assert!((q.into_inner().norm() - 1.0).abs() < 1e-6);
                }
                sample.len()
            })
            .collect();
        eprintln!("Debug: sample sizes at 10° {:?}", sizes);
        let smallest = *sizes.iter().min().unwrap() as f64;
        let largest = *sizes.iter().max().unwrap() as f64;
        assert!(largest / smallest < 4.0);
    }

    #[test]
    fn test_sample_size_monotonic_in_resolution() {
        for method in SamplingMethod::ALL {
            let mut previous = usize::MAX;
            for resolution in [8.0, 12.0, 20.0, 40.0] {
                let request = SampleRequest::for_point_group("222")
                    .with_resolution(resolution)
                    .with_method(method);
                let size = sample_fundamental(&request).unwrap().len();
                assert!(size <= previous, "{} at {}°", method, resolution);
                previous = size;
            }
        }
    }

    #[test]
    fn test_reproducible() {
        let request = SampleRequest::for_point_group("4/mmm")
            .with_resolution(12.0)
            .with_method(SamplingMethod::HaarEuler);
        let first = sample_fundamental(&request).unwrap();
        let second = sample_fundamental(&request).unwrap();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.coords, b.coords);
        }
    }

    #[test]
    fn test_sample_serializes() {
        let sample = sample_fundamental(&SampleRequest::for_point_group("432").with_density(2)).unwrap();
        let value = serde_json::to_value(&sample).unwrap();
        assert_eq!(value["method"], "cubochoric");
        assert_eq!(value["density_parameter"], 2);
        assert_eq!(value["point_group"], "O");
        assert_eq!(value["quaternions"].as_array().unwrap().len(), sample.len());
        assert_eq!(sample.to_components().len(), sample.len());
    }

    // ==================== Errors ====================

    #[test]
    fn test_resolution_and_density_exclusive() {
        let both = SampleRequest::for_point_group("432").with_resolution(3.0).with_density(10);
        assert!(matches!(
            sample_fundamental(&both).unwrap_err(),
            SamplingError::ConflictingParameters(_)
        ));
        let neither = SampleRequest::for_point_group("432");
        assert!(matches!(
            sample_fundamental(&neither).unwrap_err(),
            SamplingError::ConflictingParameters(_)
        ));
    }

    #[test]
    fn test_invalid_inputs() {
        let err = sample_fundamental(&SampleRequest::for_point_group("432").with_resolution(0.01)).unwrap_err();
        assert!(matches!(err, SamplingError::InvalidResolution { .. }));

        let err = sample_fundamental(&SampleRequest::for_point_group("432").with_density(-1)).unwrap_err();
        assert!(matches!(err, SamplingError::InvalidParameter { .. }));

        let err = sample_fundamental(
            &SampleRequest::for_point_group("432")
                .with_density(0)
                .with_method(SamplingMethod::Quaternion),
        )
        .unwrap_err();
        assert!(matches!(err, SamplingError::InvalidParameter { .. }));

        let err = SampleRequest::for_point_group("432").with_method_name("random").unwrap_err();
        assert!(matches!(err, SamplingError::UnknownMethod(_)));
    }

    #[test]
    fn test_unresolvable_specifiers() {
        for request in [SampleRequest::for_point_group("8/mmm"), SampleRequest::for_space_group(231)] {
            let err = sample_fundamental(&request.with_density(2)).unwrap_err();
            assert!(matches!(err, SamplingError::UnresolvableSpecifier(_)));
        }
    }

    #[test]
    fn test_zero_density_is_identity() {
        let sample = sample_fundamental(&SampleRequest::for_point_group("432").with_density(0)).unwrap();
        assert_eq!(sample.len(), 1);
        assert_eq!(sample.identity_index(), Some(0));
    }

    #[test]
    fn test_method_by_name() {
        let request = SampleRequest::for_point_group("6/mmm")
            .with_density(6)
            .with_method_name("haar_euler")
            .unwrap();
        assert_eq!(request.method, SamplingMethod::HaarEuler);
        assert_eq!(sample_fundamental(&request).unwrap().method(), SamplingMethod::HaarEuler);
    }

    #[test]
    fn test_invalid_operator_set_rejected_before_sampling() {
        let err = SymmetryOperatorSet::from_components(&[[0.0, 0.0, 0.0, 1.0]]).unwrap_err();
        assert!(matches!(err, SamplingError::InvalidSymmetryGroup(_)));
    }
}
