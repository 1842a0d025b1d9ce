use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::{FUNDAMENTAL_ZONE_TOLERANCE, GROUP_CLOSURE_TOLERANCE};
use crate::symmetries::SymmetryOperatorSet;

/// Where an orientation lies relative to the fundamental zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneMembership {
    Outside,
    Interior,
    /// Within tolerance of at least one bounding plane
    Boundary,
}

/// Slab |n·ρ| ≤ tan(ω/4) in Rodrigues space, from one rotation axis and angle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZonePlane {
    /// Unit rotation axis, sign fixed by the first operator that produced it
    pub normal: Vector3<f64>,
    /// tan(ω/4), the distance of both planes from the origin
    pub half_width: f64,
}

impl ZonePlane {
    /// Signed excess of q over the slab in homogeneous form, |n·v| − tan(ω/4)·|w|.
    /// Positive means outside; valid for w = 0.
    pub fn excess(&self, q: &UnitQuaternion<f64>) -> f64 {
        self.normal.dot(&q.imag()).abs() - self.half_width * q.w.abs()
    }
}

/// Rodrigues fundamental zone of a proper point group: the convex polytope of
/// orientations whose rotation angle is smallest within their symmetry orbit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RodriguesFundamentalZone {
    planes: Vec<ZonePlane>,
    tolerance: f64,
}

impl RodriguesFundamentalZone {
    /// One plane pair per distinct (axis up to sign, angle) among the non-identity operators
    pub fn from_operators(operators: &SymmetryOperatorSet) -> Self {
        let mut planes: Vec<ZonePlane> = Vec::new();
        for op in operators.operations() {
            if op.is_identity() {
                continue;
            }
            let Some(normal) = op.axis() else {
                continue;
            };
            let half_width = (0.25 * op.angle()).tan();
            let duplicate = planes.iter().any(|plane| {
                (plane.half_width - half_width).abs() < GROUP_CLOSURE_TOLERANCE
                    && ((plane.normal - normal).norm() < GROUP_CLOSURE_TOLERANCE
                        || (plane.normal + normal).norm() < GROUP_CLOSURE_TOLERANCE)
            });
            if !duplicate {
                planes.push(ZonePlane { normal, half_width });
            }
        }
        Self {
            planes,
            tolerance: FUNDAMENTAL_ZONE_TOLERANCE,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn planes(&self) -> &[ZonePlane] {
        &self.planes
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// The trivial group has no planes and its zone is all of SO(3)
    pub fn is_unbounded(&self) -> bool {
        self.planes.is_empty()
    }

    /// Test the orientation against every plane; any plane it exceeds places it outside.
    pub fn classify(&self, q: &UnitQuaternion<f64>) -> ZoneMembership {
        let mut on_boundary = false;
        for plane in &self.planes {
            let excess = plane.excess(q);
            if excess > self.tolerance {
                return ZoneMembership::Outside;
            }
            if excess >= -self.tolerance {
                on_boundary = true;
            }
        }
        if on_boundary {
            ZoneMembership::Boundary
        } else {
            ZoneMembership::Interior
        }
    }

    /// Inside or on the boundary
    pub fn contains(&self, q: &UnitQuaternion<f64>) -> bool {
        self.classify(q) != ZoneMembership::Outside
    }

    /// Membership of a Rodrigues vector ρ = tan(ω/2)·n
    pub fn contains_rodrigues(&self, rodrigues: &Vector3<f64>) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.normal.dot(rodrigues).abs() - plane.half_width <= self.tolerance)
    }
}
