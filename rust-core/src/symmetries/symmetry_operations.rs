use nalgebra::{Quaternion, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::{GROUP_CLOSURE_TOLERANCE, OPERATOR_MATCH_TOLERANCE, UNIT_NORM_TOLERANCE};
use crate::error::{Result, SamplingError};
use crate::rotations::{canonicalize, is_identity, rotation_angle, QuaternionSet};

/// A single proper symmetry operation, stored as a canonical unit quaternion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SymmetryOperation {
    /// Rotation with the crate's sign convention applied
    pub rotation: UnitQuaternion<f64>,
}

impl SymmetryOperation {
    /// Create a new symmetry operation
    pub fn new(rotation: UnitQuaternion<f64>) -> Self {
        Self {
            rotation: canonicalize(&rotation),
        }
    }

    /// Create identity operation
    pub fn identity() -> Self {
        Self {
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Apply symmetry operation to a point
    pub fn apply(&self, point: Vector3<f64>) -> Vector3<f64> {
        self.rotation * point
    }

    /// Left-act on an orientation, g · q, returning the canonical result
    pub fn act_on(&self, q: &UnitQuaternion<f64>) -> UnitQuaternion<f64> {
        canonicalize(&(self.rotation * q))
    }

    /// Operation applied after `other`
    pub fn compose(&self, other: &Self) -> Self {
        Self::new(self.rotation * other.rotation)
    }

    pub fn inverse(&self) -> Self {
        Self::new(self.rotation.inverse())
    }

    /// Rotation angle in [0, π]
    pub fn angle(&self) -> f64 {
        rotation_angle(&self.rotation)
    }

    /// Unit rotation axis, `None` for the identity
    pub fn axis(&self) -> Option<Vector3<f64>> {
        self.rotation.axis().map(|axis| axis.into_inner())
    }

    /// Get the order of this symmetry operation (how many times to apply to get identity)
    pub fn order(&self) -> usize {
        let angle = self.angle();
        if angle < GROUP_CLOSURE_TOLERANCE {
            return 1;
        }
        // Crystallographic rotations have angle 2π/n
        (2.0 * std::f64::consts::PI / angle).round() as usize
    }

    /// Check if this is the identity operation
    pub fn is_identity(&self) -> bool {
        is_identity(&self.rotation, GROUP_CLOSURE_TOLERANCE)
    }
}

/// A validated proper point group: non-empty, identity first, closed under multiplication.
#[derive(Debug, Clone, Serialize)]
pub struct SymmetryOperatorSet {
    operations: Vec<SymmetryOperation>,
}

impl SymmetryOperatorSet {
    /// Validate an operator list supplied by a caller.
    ///
    /// Duplicates (including q/−q pairs) are merged; the identity is moved to the front.
    pub fn new(rotations: Vec<UnitQuaternion<f64>>) -> Result<Self> {
        if rotations.is_empty() {
            return Err(SamplingError::InvalidSymmetryGroup(
                "operator set is empty".to_string(),
            ));
        }

        let mut unique = QuaternionSet::with_tolerance(OPERATOR_MATCH_TOLERANCE);
        for q in rotations {
            unique.insert(q);
        }
        let unique = unique.into_vec();
        let identity_index = unique
            .iter()
            .position(|q| is_identity(q, OPERATOR_MATCH_TOLERANCE))
            .ok_or_else(|| {
                SamplingError::InvalidSymmetryGroup("operator set does not contain the identity".to_string())
            })?;

        let mut operations: Vec<SymmetryOperation> = unique.into_iter().map(SymmetryOperation::new).collect();
        operations.remove(identity_index);
        operations.insert(0, SymmetryOperation::identity());

        let set = Self { operations };
        set.check_closure()?;
        Ok(set)
    }

    /// Validate raw (w, x, y, z) components; each must already have unit norm
    pub fn from_components(components: &[[f64; 4]]) -> Result<Self> {
        let rotations = components
            .iter()
            .map(|&[w, x, y, z]| {
                let q = Quaternion::new(w, x, y, z);
                if (q.norm() - 1.0).abs() > UNIT_NORM_TOLERANCE {
                    return Err(SamplingError::InvalidSymmetryGroup(format!(
                        "operator ({}, {}, {}, {}) is not a unit quaternion",
                        w, x, y, z
                    )));
                }
                Ok(UnitQuaternion::from_quaternion(q))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(rotations)
    }

    /// Close a set of generators under multiplication
    pub fn from_generators(generators: &[UnitQuaternion<f64>]) -> Self {
        let mut group = QuaternionSet::with_tolerance(GROUP_CLOSURE_TOLERANCE);
        group.insert(UnitQuaternion::identity());

        let mut frontier: Vec<UnitQuaternion<f64>> = vec![UnitQuaternion::identity()];
        while !frontier.is_empty() {
            let mut next = Vec::new();
            for element in &frontier {
                for generator in generators {
                    let product = canonicalize(&(generator * element));
                    if group.insert(product) {
                        next.push(product);
                    }
                }
            }
            frontier = next;
        }

        Self {
            operations: group.into_vec().into_iter().map(SymmetryOperation::new).collect(),
        }
    }

    /// The trivial group {identity}
    pub fn identity_only() -> Self {
        Self {
            operations: vec![SymmetryOperation::identity()],
        }
    }

    pub fn operations(&self) -> &[SymmetryOperation] {
        &self.operations
    }

    /// Rotations in set order, identity first
    pub fn rotations(&self) -> impl Iterator<Item = &UnitQuaternion<f64>> + '_ {
        self.operations.iter().map(|op| &op.rotation)
    }

    /// Group order
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Symmetry-equivalent orientations {g · q}, canonical, in operator order
    pub fn orbit(&self, q: &UnitQuaternion<f64>) -> Vec<UnitQuaternion<f64>> {
        self.operations.iter().map(|op| op.act_on(q)).collect()
    }

    /// Check that every product of two members is a member
    fn check_closure(&self) -> Result<()> {
        let mut membership = QuaternionSet::with_tolerance(OPERATOR_MATCH_TOLERANCE);
        for q in self.rotations() {
            membership.insert(*q);
        }

        for a in &self.operations {
            for b in &self.operations {
                let product = a.compose(b);
                if !membership.contains(&product.rotation) {
                    return Err(SamplingError::InvalidSymmetryGroup(format!(
                        "operator set of size {} is not closed under multiplication",
                        self.len()
                    )));
                }
            }
        }
        Ok(())
    }
}
