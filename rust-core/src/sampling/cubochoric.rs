use log::debug;
use nalgebra::{UnitQuaternion, Vector3};

use crate::config::CUBE_SEMI_EDGE;
use crate::error::Result;
use crate::interfaces::{filter_map_grid, OrientationGrid};
use crate::rotations::QuaternionSet;
use crate::sampling::cubochoric_mapping::cube_to_quaternion;
use crate::sampling::resolution::check_cubochoric_size;

/// Uniform (2N + 1)³ grid over the cubochoric cube, indexed x-major, then y, then z.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubochoricGrid {
    semi_edge_steps: usize,
    side: usize,
}

impl CubochoricGrid {
    /// Grid with `semi_edge_steps` steps from the cube centre to a face; 0 gives the centre only
    pub fn new(semi_edge_steps: usize) -> Result<Self> {
        check_cubochoric_size(semi_edge_steps)?;
        Ok(Self {
            semi_edge_steps,
            side: 2 * semi_edge_steps + 1,
        })
    }

    pub fn semi_edge_steps(&self) -> usize {
        self.semi_edge_steps
    }

    /// Cube coordinates of grid point `index`
    pub fn cube_point(&self, index: usize) -> Vector3<f64> {
        if self.semi_edge_steps == 0 {
            return Vector3::zeros();
        }
        let n = self.semi_edge_steps as f64;
        let coordinate = |step: usize| (step as f64 - n) / n * CUBE_SEMI_EDGE;

        let i = index / (self.side * self.side);
        let j = (index / self.side) % self.side;
        let k = index % self.side;
        Vector3::new(coordinate(i), coordinate(j), coordinate(k))
    }
}

impl OrientationGrid for CubochoricGrid {
    fn len(&self) -> usize {
        self.side * self.side * self.side
    }

    fn orientation(&self, index: usize) -> UnitQuaternion<f64> {
        cube_to_quaternion(&self.cube_point(index))
    }
}

/// All distinct orientations of the cubochoric grid, in grid order.
///
/// Opposite cube faces map to the same rotations by π; those are collapsed.
pub fn cubochoric_sampling(semi_edge_steps: usize) -> Result<Vec<UnitQuaternion<f64>>> {
    let grid = CubochoricGrid::new(semi_edge_steps)?;
    let candidates = filter_map_grid(&grid, Some);
    let unique = QuaternionSet::from_quaternions(candidates).into_vec();
    debug!(
        "cubochoric grid N={}: {} points, {} distinct orientations",
        semi_edge_steps,
        grid.len(),
        unique.len()
    );
    Ok(unique)
}
