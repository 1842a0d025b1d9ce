use log::info;

use crate::error::{Result, SamplingError};
use crate::generators::orientation_sample::OrientationSample;
use crate::generators::sample_request::LocalSampleRequest;
use crate::interfaces::{filter_map_grid, OrientationGrid};
use crate::rotations::{canonicalize, rotation_angle, QuaternionSet};
use crate::sampling::{select_density, SamplerGrid};

/// Uniform sample of the rotations at most `grid_width` degrees from the identity,
/// moved onto `center` by left multiplication when one is given.
pub fn sample_local(request: &LocalSampleRequest) -> Result<OrientationSample> {
    let density = select_density(request.resolution, request.density)?;
    if !request.grid_width.is_finite() || request.grid_width <= 0.0 {
        return Err(SamplingError::invalid_parameter(
            "grid_width",
            request.grid_width,
            "must be a positive number of degrees",
        ));
    }
    let grid = SamplerGrid::from_density(request.method, density)?;
    let max_angle = request.grid_width.to_radians();

    info!(
        "sampling {}° around {}: method={}, density parameter={}, {} candidates",
        request.grid_width,
        if request.center.is_some() { "centre" } else { "identity" },
        request.method,
        grid.density_parameter(),
        grid.len()
    );

    let nearby = filter_map_grid(&grid, |q| (rotation_angle(&q) <= max_angle).then_some(q));
    let unique = QuaternionSet::from_quaternions(nearby).into_vec();
    let quaternions = match request.center {
        Some(center) => unique.iter().map(|q| canonicalize(&(center * q))).collect(),
        None => unique,
    };
    info!("local sample holds {} orientations", quaternions.len());

    Ok(OrientationSample::new(
        quaternions,
        request.method,
        grid.density_parameter(),
        None,
    ))
}
