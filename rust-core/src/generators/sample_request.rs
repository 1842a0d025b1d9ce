use nalgebra::UnitQuaternion;
use serde::Serialize;

use crate::error::Result;
use crate::interfaces::SamplingMethod;
use crate::symmetries::{
    generate_symmetry_operations, PointGroup, ProperPointGroup, SymmetryOperatorSet,
};

/// Crystal symmetry of a request: a point group symbol, a space group number or explicit operators.
#[derive(Debug, Clone, Serialize)]
pub enum SymmetrySpecifier {
    /// Hermann–Mauguin or Schoenflies symbol, e.g. "m-3m", "432", "D6h"
    PointGroup(String),
    /// International Tables number, 1..=230
    SpaceGroup(u16),
    Operators(SymmetryOperatorSet),
}

impl SymmetrySpecifier {
    /// Proper point group the specifier reduces to, `None` for explicit operators.
    /// Improper groups are replaced by their rotation subgroup.
    pub fn proper_point_group(&self) -> Result<Option<ProperPointGroup>> {
        let group = match self {
            Self::PointGroup(symbol) => symbol.parse::<PointGroup>()?,
            Self::SpaceGroup(number) => PointGroup::from_space_group(*number)?,
            Self::Operators(_) => return Ok(None),
        };
        Ok(Some(group.proper_subgroup()))
    }

    /// Rotation operators used for the zone reduction
    pub fn resolve(&self) -> Result<SymmetryOperatorSet> {
        match self {
            Self::Operators(operators) => Ok(operators.clone()),
            _ => Ok(self
                .proper_point_group()?
                .map(generate_symmetry_operations)
                .unwrap_or_else(SymmetryOperatorSet::identity_only)),
        }
    }
}

impl From<PointGroup> for SymmetrySpecifier {
    fn from(group: PointGroup) -> Self {
        Self::PointGroup(group.hermann_mauguin().to_string())
    }
}

impl From<ProperPointGroup> for SymmetrySpecifier {
    fn from(group: ProperPointGroup) -> Self {
        Self::PointGroup(group.hermann_mauguin().to_string())
    }
}

impl From<SymmetryOperatorSet> for SymmetrySpecifier {
    fn from(operators: SymmetryOperatorSet) -> Self {
        Self::Operators(operators)
    }
}

/// Builder-style parameters for a fundamental zone sample.
///
/// Exactly one of `resolution` and `density` must be set before sampling.
#[derive(Debug, Clone, Serialize)]
pub struct SampleRequest {
    pub symmetry: SymmetrySpecifier,
    /// Target average disorientation in degrees
    pub resolution: Option<f64>,
    /// Explicit semi-edge (cubochoric) or angular step count
    pub density: Option<i64>,
    pub method: SamplingMethod,
}

impl SampleRequest {
    /// Request for `symmetry` with the cubochoric method and no density set yet
    pub fn new(symmetry: impl Into<SymmetrySpecifier>) -> Self {
        Self {
            symmetry: symmetry.into(),
            resolution: None,
            density: None,
            method: SamplingMethod::Cubochoric,
        }
    }

    /// Request for a point group symbol such as "432" or "m-3m"
    pub fn for_point_group(symbol: &str) -> Self {
        Self::new(SymmetrySpecifier::PointGroup(symbol.to_string()))
    }

    pub fn for_space_group(number: u16) -> Self {
        Self::new(SymmetrySpecifier::SpaceGroup(number))
    }

    pub fn with_resolution(mut self, degrees: f64) -> Self {
        self.resolution = Some(degrees);
        self
    }

    pub fn with_density(mut self, steps: i64) -> Self {
        self.density = Some(steps);
        self
    }

    pub fn with_method(mut self, method: SamplingMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the method from its identifier: "cubochoric", "haar_euler" or "quaternion"
    pub fn with_method_name(self, name: &str) -> Result<Self> {
        Ok(self.with_method(name.parse()?))
    }
}

/// Parameters for a sample of the rotations within `grid_width` degrees of `center`.
#[derive(Debug, Clone, Serialize)]
pub struct LocalSampleRequest {
    pub resolution: Option<f64>,
    pub density: Option<i64>,
    pub method: SamplingMethod,
    /// Largest rotation angle away from the centre, in degrees
    pub grid_width: f64,
    /// Orientation the sample is moved to by left multiplication; identity if unset
    pub center: Option<UnitQuaternion<f64>>,
}

impl LocalSampleRequest {
    pub fn new() -> Self {
        Self {
            resolution: None,
            density: None,
            method: SamplingMethod::Cubochoric,
            grid_width: 10.0,
            center: None,
        }
    }

    pub fn with_resolution(mut self, degrees: f64) -> Self {
        self.resolution = Some(degrees);
        self
    }

    pub fn with_density(mut self, steps: i64) -> Self {
        self.density = Some(steps);
        self
    }

    pub fn with_method(mut self, method: SamplingMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_grid_width(mut self, degrees: f64) -> Self {
        self.grid_width = degrees;
        self
    }

    pub fn with_center(mut self, center: UnitQuaternion<f64>) -> Self {
        self.center = Some(center);
        self
    }
}

impl Default for LocalSampleRequest {
    fn default() -> Self {
        Self::new()
    }
}
