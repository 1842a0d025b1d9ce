// Definitions that are used throughout all modules

use nalgebra::UnitQuaternion;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SamplingError;

// Enumeration for the sampling strategy over SO(3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingMethod {
    Cubochoric,
    HaarEuler,
    Quaternion,
}

impl SamplingMethod {
    pub const ALL: [SamplingMethod; 3] = [Self::Cubochoric, Self::HaarEuler, Self::Quaternion];

    /// Identifier accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cubochoric => "cubochoric",
            Self::HaarEuler => "haar_euler",
            Self::Quaternion => "quaternion",
        }
    }
}

impl fmt::Display for SamplingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SamplingMethod {
    type Err = SamplingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cubochoric" => Ok(Self::Cubochoric),
            "haar_euler" => Ok(Self::HaarEuler),
            "quaternion" => Ok(Self::Quaternion),
            other => Err(SamplingError::UnknownMethod(other.to_string())),
        }
    }
}

// How dense a grid should be: either a target resolution or the method's own step count
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Density {
    /// Target average disorientation in degrees
    Resolution(f64),
    /// Semi-edge steps (cubochoric) or angular steps (haar_euler, quaternion)
    Steps(i64),
}

// Indexed source of candidate orientations; samplers expose their grids through this
// so the reducer can visit millions of candidates without materialising them.
pub trait OrientationGrid: Sync {
    /// Number of grid points, including any that map to the same rotation
    fn len(&self) -> usize;

    /// Orientation at `index`, for `index < self.len()`
    fn orientation(&self, index: usize) -> UnitQuaternion<f64>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OrientationGrid for [UnitQuaternion<f64>] {
    fn len(&self) -> usize {
        <[UnitQuaternion<f64>]>::len(self)
    }

    fn orientation(&self, index: usize) -> UnitQuaternion<f64> {
        self[index]
    }
}

impl OrientationGrid for Vec<UnitQuaternion<f64>> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn orientation(&self, index: usize) -> UnitQuaternion<f64> {
        self[index]
    }
}

/// Visit every grid point in index order, keeping the `Some` results in that order.
/// Runs on the rayon pool when the `parallel` feature is enabled.
pub(crate) fn filter_map_grid<G, T, F>(grid: &G, f: F) -> Vec<T>
where
    G: OrientationGrid + ?Sized,
    T: Send,
    F: Fn(UnitQuaternion<f64>) -> Option<T> + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        (0..grid.len())
            .into_par_iter()
            .filter_map(|index| f(grid.orientation(index)))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..grid.len())
            .filter_map(|index| f(grid.orientation(index)))
            .collect()
    }
}
