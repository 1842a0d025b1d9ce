use log::{debug, info};

use crate::error::Result;
use crate::fundamental_zone::FundamentalZoneReducer;
use crate::generators::orientation_sample::OrientationSample;
use crate::generators::sample_request::SampleRequest;
use crate::interfaces::OrientationGrid;
use crate::sampling::{density_parameter, select_density, SamplerGrid};

/// Uniform sample of the fundamental zone of the requested symmetry.
///
/// All arguments are validated before the grid is generated. Every orientation of the
/// result lies in the Rodrigues fundamental zone, no two are symmetry-equivalent and
/// the identity is present exactly once.
pub fn sample_fundamental(request: &SampleRequest) -> Result<OrientationSample> {
    let density = select_density(request.resolution, request.density)?;
    let point_group = request.symmetry.proper_point_group()?;
    let operators = request.symmetry.resolve()?;
    let parameter = density_parameter(request.method, density)?;
    let grid = SamplerGrid::new(request.method, parameter)?;
    let reducer = FundamentalZoneReducer::new(&operators)?;

    info!(
        "sampling fundamental zone: method={}, density parameter={}, {} operators, {} candidates",
        request.method,
        parameter,
        operators.len(),
        grid.len()
    );
    if let Some(group) = point_group {
        debug!("proper point group {}", group);
    }

    let quaternions = reducer.reduce_grid(&grid);
    info!("fundamental zone sample holds {} orientations", quaternions.len());

    Ok(OrientationSample::new(quaternions, request.method, parameter, point_group))
}
