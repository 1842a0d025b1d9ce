use log::debug;
use nalgebra::{Quaternion, UnitQuaternion};
use std::f64::consts::{PI, TAU};

use crate::error::{Result, SamplingError};
use crate::interfaces::{filter_map_grid, OrientationGrid};
use crate::rotations::{canonicalize, QuaternionSet};
use crate::sampling::resolution::check_angular_size;

/// Layered grid on S³: equal-measure layers u ∈ [0, 1), each the product of two
/// orthogonal circles of radii √(1−u) and √u.
///
/// θ₂ covers a half circle only, which removes the q ~ −q double cover up to the
/// seam handled by canonicalization. Indexed u-major, then θ₁, then θ₂.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuaternionGrid {
    steps: usize,
    half_steps: usize,
}

impl QuaternionGrid {
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
            half_steps: (steps + 1) / 2,
        })
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Layer parameter and circle angles (u, θ₁, θ₂) of grid point `index`
    pub fn layer_coordinates(&self, index: usize) -> (f64, f64, f64) {
        let per_layer = self.steps * self.half_steps;
        let layer = index / per_layer;
        let first = (index / self.half_steps) % self.steps;
        let second = index % self.half_steps;

        let n = self.steps as f64;
        let u = layer as f64 / n;
        let theta1 = first as f64 * TAU / n;
        let theta2 = second as f64 * PI / self.half_steps as f64;
        (u, theta1, theta2)
    }
}

impl OrientationGrid for QuaternionGrid {
    fn len(&self) -> usize {
        self.steps * self.steps * self.half_steps
    }

    fn orientation(&self, index: usize) -> UnitQuaternion<f64> {
        let (u, theta1, theta2) = self.layer_coordinates(index);
        let a = (1.0 - u).sqrt();
        let b = u.sqrt();
        let (sin1, cos1) = theta1.sin_cos();
        let (sin2, cos2) = theta2.sin_cos();
        let q = Quaternion::new(a * cos1, a * sin1, b * sin2, b * cos2);
        canonicalize(&UnitQuaternion::new_normalize(q))
    }
}

/// All distinct orientations of the layered quaternion grid, in grid order.
/// The u = 0 layer does not depend on θ₂ and collapses to n points.
pub fn quaternion_sampling(steps: usize) -> Result<Vec<UnitQuaternion<f64>>> {
    let grid = QuaternionGrid::new(steps)?;
    let candidates = filter_map_grid(&grid, Some);
    let unique = QuaternionSet::from_quaternions(candidates).into_vec();
    debug!(
        "quaternion grid n={}: {} points, {} distinct orientations",
        steps,
        grid.len(),
        unique.len()
    );
    Ok(unique)
}
