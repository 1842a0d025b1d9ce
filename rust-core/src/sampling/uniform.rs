use log::debug;
use nalgebra::UnitQuaternion;

use crate::error::Result;
use crate::interfaces::{filter_map_grid, Density, OrientationGrid, SamplingMethod};
use crate::rotations::QuaternionSet;
use crate::sampling::cubochoric::CubochoricGrid;
use crate::sampling::haar_euler::HaarEulerGrid;
use crate::sampling::quaternion_grid::QuaternionGrid;
use crate::sampling::resolution::density_parameter;

/// Candidate grid of any of the three samplers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerGrid {
    Cubochoric(CubochoricGrid),
    HaarEuler(HaarEulerGrid),
    Quaternion(QuaternionGrid),
}

impl SamplerGrid {
    /// Grid for `method` with an already translated density parameter
    pub fn new(method: SamplingMethod, density_parameter: usize) -> Result<Self> {
        Ok(match method {
            SamplingMethod::Cubochoric => Self::Cubochoric(CubochoricGrid::new(density_parameter)?),
            SamplingMethod::HaarEuler => Self::HaarEuler(HaarEulerGrid::new(density_parameter)?),
            SamplingMethod::Quaternion => Self::Quaternion(QuaternionGrid::new(density_parameter)?),
        })
    }

    /// Translate `density` and build the matching grid
    pub fn from_density(method: SamplingMethod, density: Density) -> Result<Self> {
        Self::new(method, density_parameter(method, density)?)
    }

    pub fn method(&self) -> SamplingMethod {
        match self {
            Self::Cubochoric(_) => SamplingMethod::Cubochoric,
            Self::HaarEuler(_) => SamplingMethod::HaarEuler,
            Self::Quaternion(_) => SamplingMethod::Quaternion,
        }
    }

    /// Semi-edge steps (cubochoric) or angular steps
    pub fn density_parameter(&self) -> usize {
        match self {
            Self::Cubochoric(grid) => grid.semi_edge_steps(),
            Self::HaarEuler(grid) => grid.steps(),
            Self::Quaternion(grid) => grid.steps(),
        }
    }
}

impl OrientationGrid for SamplerGrid {
    fn len(&self) -> usize {
        match self {
            Self::Cubochoric(grid) => grid.len(),
            Self::HaarEuler(grid) => grid.len(),
            Self::Quaternion(grid) => grid.len(),
        }
    }

    fn orientation(&self, index: usize) -> UnitQuaternion<f64> {
        match self {
            Self::Cubochoric(grid) => grid.orientation(index),
            Self::HaarEuler(grid) => grid.orientation(index),
            Self::Quaternion(grid) => grid.orientation(index),
        }
    }
}

/// Uniform sample of all of SO(3): canonical, free of duplicates, in grid order.
pub fn uniform_so3_sample(method: SamplingMethod, density: Density) -> Result<Vec<UnitQuaternion<f64>>> {
    let grid = SamplerGrid::from_density(method, density)?;
    let candidates = filter_map_grid(&grid, Some);
    let unique = QuaternionSet::from_quaternions(candidates).into_vec();
    debug!(
        "{} sample (parameter {}): {} grid points, {} orientations",
        method,
        grid.density_parameter(),
        grid.len(),
        unique.len()
    );
    Ok(unique)
}
