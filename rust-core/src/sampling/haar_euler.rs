use log::debug;
use nalgebra::UnitQuaternion;
use std::f64::consts::TAU;

use crate::error::{Result, SamplingError};
use crate::interfaces::{filter_map_grid, OrientationGrid};
use crate::rotations::{from_euler_zxz, QuaternionSet};
use crate::sampling::resolution::check_angular_size;

/// Bunge Euler grid with Haar weighting: α and γ uniform on [0, 2π), cos β uniform on [−1, 1].
///
/// Indexed α-major, then β, then γ. The first point (α = β = γ = 0) is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HaarEulerGrid {
    steps: usize,
    beta_steps: usize,
}

impl HaarEulerGrid {
    pub fn new(steps: usize) -> Result<Self> {
        if steps == 0 {
            return Err(SamplingError::invalid_parameter(
                "angular_steps",
                steps,
                "must be a positive integer",
            ));
        }
        check_angular_size(steps)?;
        Ok(Self {
            steps,
            beta_steps: steps / 2 + 1,
        })
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Bunge angles (α, β, γ) of grid point `index`
    pub fn euler_angles(&self, index: usize) -> (f64, f64, f64) {
        let per_alpha = self.beta_steps * self.steps;
        let a = index / per_alpha;
        let b = (index / self.steps) % self.beta_steps;
        let g = index % self.steps;

        let step = TAU / self.steps as f64;
        // cos β = linspace(1, −1, beta_steps), endpoints included
        let cos_beta = if self.beta_steps > 1 {
            1.0 - 2.0 * b as f64 / (self.beta_steps - 1) as f64
        } else {
            1.0
        };
        (a as f64 * step, cos_beta.clamp(-1.0, 1.0).acos(), g as f64 * step)
    }
}

impl OrientationGrid for HaarEulerGrid {
    fn len(&self) -> usize {
        self.steps * self.beta_steps * self.steps
    }

    fn orientation(&self, index: usize) -> UnitQuaternion<f64> {
        let (alpha, beta, gamma) = self.euler_angles(index);
        from_euler_zxz(alpha, beta, gamma)
    }
}

/// All distinct orientations of the Haar-Euler grid, in grid order.
/// Points on the β = 0 and β = π poles only depend on α ± γ and collapse.
pub fn haar_euler_sampling(steps: usize) -> Result<Vec<UnitQuaternion<f64>>> {
    let grid = HaarEulerGrid::new(steps)?;
    let candidates = filter_map_grid(&grid, Some);
    let unique = QuaternionSet::from_quaternions(candidates).into_vec();
    debug!(
        "haar-euler grid n={}: {} points, {} distinct orientations",
        steps,
        grid.len(),
        unique.len()
    );
    Ok(unique)
}
