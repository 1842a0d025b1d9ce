use crate::config::{CUBOCHORIC_RESOLUTION_NUMERATOR, CUBOCHORIC_RESOLUTION_OFFSET, FULL_TURN_DEGREES};
use crate::error::{Result, SamplingError};
use crate::interfaces::{Density, SamplingMethod};

/// Cubochoric semi-edge steps N = floor(131.97049 / (θ − 0.03732)).
///
/// The coefficients fit the mean disorientation between neighbouring grid points,
/// so θ must exceed the offset.
pub fn resolution_to_semi_edge_steps(resolution: f64) -> Result<usize> {
    if !resolution.is_finite() || resolution <= CUBOCHORIC_RESOLUTION_OFFSET {
        return Err(SamplingError::invalid_resolution(
            resolution,
            format!("cubochoric sampling requires a resolution above {}°", CUBOCHORIC_RESOLUTION_OFFSET),
        ));
    }
    let steps = (CUBOCHORIC_RESOLUTION_NUMERATOR / (resolution - CUBOCHORIC_RESOLUTION_OFFSET)).floor();
    let steps = steps as usize;
    check_cubochoric_size(steps).map_err(|_| {
        SamplingError::invalid_resolution(resolution, "resolution too fine for an addressable cubochoric grid")
    })?;
    Ok(steps)
}

/// Angular steps per full turn, n = ceil(360 / θ) rounded up to an even number.
pub fn resolution_to_angular_steps(resolution: f64) -> Result<usize> {
    if !resolution.is_finite() || resolution <= 0.0 {
        return Err(SamplingError::invalid_resolution(
            resolution,
            "resolution must be a positive number of degrees",
        ));
    }
    let raw = (FULL_TURN_DEGREES / resolution).ceil();
    if raw >= u32::MAX as f64 {
        return Err(SamplingError::invalid_resolution(
            resolution,
            "resolution too fine for an addressable angular grid",
        ));
    }
    let mut steps = raw as usize;
    if steps % 2 == 1 {
        steps += 1;
    }
    check_angular_size(steps).map_err(|_| {
        SamplingError::invalid_resolution(resolution, "resolution too fine for an addressable angular grid")
    })?;
    Ok(steps)
}

/// Translate an explicit or resolution-derived density into the method's step count.
pub fn density_parameter(method: SamplingMethod, density: Density) -> Result<usize> {
    match (method, density) {
        (SamplingMethod::Cubochoric, Density::Resolution(resolution)) => {
            resolution_to_semi_edge_steps(resolution)
        }
        (_, Density::Resolution(resolution)) => resolution_to_angular_steps(resolution),
        (SamplingMethod::Cubochoric, Density::Steps(steps)) => {
            if steps < 0 {
                return Err(SamplingError::invalid_parameter(
                    "semi_edge_steps",
                    steps,
                    "must be a non-negative integer",
                ));
            }
            let steps = steps as usize;
            check_cubochoric_size(steps)?;
            Ok(steps)
        }
        (_, Density::Steps(steps)) => {
            if steps < 1 {
                return Err(SamplingError::invalid_parameter(
                    "angular_steps",
                    steps,
                    "must be a positive integer",
                ));
            }
            let steps = steps as usize;
            check_angular_size(steps)?;
            Ok(steps)
        }
    }
}

/// Resolve the mutually exclusive resolution / density arguments.
pub fn select_density(resolution: Option<f64>, steps: Option<i64>) -> Result<Density> {
    match (resolution, steps) {
        (Some(resolution), None) => Ok(Density::Resolution(resolution)),
        (None, Some(steps)) => Ok(Density::Steps(steps)),
        (Some(resolution), Some(steps)) => Err(SamplingError::ConflictingParameters(format!(
            "got both resolution {}° and density {}",
            resolution, steps
        ))),
        (None, None) => Err(SamplingError::ConflictingParameters(
            "got neither a resolution nor a density".to_string(),
        )),
    }
}

/// (2N + 1)³ must be addressable
pub(crate) fn check_cubochoric_size(steps: usize) -> Result<usize> {
    steps
        .checked_mul(2)
        .and_then(|n| n.checked_add(1))
        .and_then(|side| side.checked_pow(3))
        .ok_or_else(|| SamplingError::invalid_parameter("semi_edge_steps", steps, "grid size overflows"))
}

/// n · n · (n/2 + 1) must be addressable
pub(crate) fn check_angular_size(steps: usize) -> Result<usize> {
    steps
        .checked_mul(steps)
        .and_then(|n| n.checked_mul(steps / 2 + 1))
        .ok_or_else(|| SamplingError::invalid_parameter("angular_steps", steps, "grid size overflows"))
}
