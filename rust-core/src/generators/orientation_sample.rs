use nalgebra::UnitQuaternion;
use serde::Serialize;

use crate::config::GROUP_CLOSURE_TOLERANCE;
use crate::interfaces::SamplingMethod;
use crate::rotations::is_identity;
use crate::symmetries::ProperPointGroup;

/// Result of a sampling request: canonical orientations in generation order,
/// at most one per symmetry class.
#[derive(Debug, Clone, Serialize)]
pub struct OrientationSample {
    quaternions: Vec<UnitQuaternion<f64>>,
    method: SamplingMethod,
    density_parameter: usize,
    point_group: Option<ProperPointGroup>,
}

impl OrientationSample {
    pub(crate) fn new(
        quaternions: Vec<UnitQuaternion<f64>>,
        method: SamplingMethod,
        density_parameter: usize,
        point_group: Option<ProperPointGroup>,
    ) -> Self {
        Self {
            quaternions,
            method,
            density_parameter,
            point_group,
        }
    }

    pub fn len(&self) -> usize {
        self.quaternions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quaternions.is_empty()
    }

    pub fn as_slice(&self) -> &[UnitQuaternion<f64>] {
        &self.quaternions
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnitQuaternion<f64>> {
        self.quaternions.iter()
    }

    pub fn into_quaternions(self) -> Vec<UnitQuaternion<f64>> {
        self.quaternions
    }

    /// Sampler that produced the candidates
    pub fn method(&self) -> SamplingMethod {
        self.method
    }

    /// Semi-edge steps (cubochoric) or angular steps actually used
    pub fn density_parameter(&self) -> usize {
        self.density_parameter
    }

    /// Proper point group of the reduction, `None` for explicit operators or local samples
    pub fn point_group(&self) -> Option<ProperPointGroup> {
        self.point_group
    }

    /// Position of the identity orientation
    pub fn identity_index(&self) -> Option<usize> {
        self.quaternions
            .iter()
            .position(|q| is_identity(q, GROUP_CLOSURE_TOLERANCE))
    }

    /// (w, x, y, z) rows
    pub fn to_components(&self) -> Vec<[f64; 4]> {
        self.quaternions
            .iter()
            .map(|q| [q.w, q.i, q.j, q.k])
            .collect()
    }
}

impl<'a> IntoIterator for &'a OrientationSample {
    type Item = &'a UnitQuaternion<f64>;
    type IntoIter = std::slice::Iter<'a, UnitQuaternion<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.quaternions.iter()
    }
}
