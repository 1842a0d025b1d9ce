use log::debug;
use nalgebra::UnitQuaternion;
use std::cmp::Ordering;

use crate::config::CANONICAL_SIGN_TOLERANCE;
use crate::error::{Result, SamplingError};
use crate::fundamental_zone::rodrigues_zone::{RodriguesFundamentalZone, ZoneMembership};
use crate::interfaces::{filter_map_grid, OrientationGrid};
use crate::rotations::{canonicalize, compare_vector_parts, QuaternionSet};
use crate::symmetries::SymmetryOperatorSet;

/// Maps candidate orientations onto one canonical representative per symmetry class.
#[derive(Debug, Clone)]
pub struct FundamentalZoneReducer {
    operators: SymmetryOperatorSet,
    zone: RodriguesFundamentalZone,
}

impl FundamentalZoneReducer {
    pub fn new(operators: &SymmetryOperatorSet) -> Result<Self> {
        match operators.operations().first() {
            None => {
                return Err(SamplingError::InvalidSymmetryGroup(
                    "operator set is empty".to_string(),
                ))
            }
            Some(first) if !first.is_identity() => {
                return Err(SamplingError::InvalidSymmetryGroup(
                    "operator set does not start with the identity".to_string(),
                ))
            }
            Some(_) => {}
        }
        Ok(Self {
            operators: operators.clone(),
            zone: RodriguesFundamentalZone::from_operators(operators),
        })
    }

    pub fn operators(&self) -> &SymmetryOperatorSet {
        &self.operators
    }

    pub fn zone(&self) -> &RodriguesFundamentalZone {
        &self.zone
    }

    /// Canonical representative of `q` if it lies in the zone, `None` if it lies outside.
    ///
    /// Interior orientations represent themselves. On the boundary several orbit members
    /// are in the zone; the one with the lexicographically greatest vector part wins.
    pub fn representative(&self, q: &UnitQuaternion<f64>) -> Option<UnitQuaternion<f64>> {
        let q = canonicalize(q);
        match self.zone.classify(&q) {
            ZoneMembership::Outside => None,
            ZoneMembership::Interior => Some(q),
            ZoneMembership::Boundary => Some(self.boundary_representative(&q)),
        }
    }

    fn boundary_representative(&self, q: &UnitQuaternion<f64>) -> UnitQuaternion<f64> {
        let mut best = *q;
        for candidate in self.operators.orbit(q) {
            if !self.zone.contains(&candidate) {
                continue;
            }
            if compare_vector_parts(&candidate, &best, CANONICAL_SIGN_TOLERANCE) == Ordering::Greater {
                best = candidate;
            }
        }
        best
    }

    /// Reduce a sequence of candidates, keeping the first occurrence of each representative
    pub fn reduce(&self, candidates: &[UnitQuaternion<f64>]) -> Vec<UnitQuaternion<f64>> {
        self.reduce_grid(candidates)
    }

    /// Reduce an indexed grid without materialising it; output follows grid order.
    pub fn reduce_grid<G>(&self, grid: &G) -> Vec<UnitQuaternion<f64>>
    where
        G: OrientationGrid + ?Sized,
    {
        let representatives = filter_map_grid(grid, |q| self.representative(&q));
        let kept = representatives.len();
        let reduced = QuaternionSet::from_quaternions(representatives).into_vec();
        debug!(
            "fundamental zone ({} operators, {} planes): {} candidates, {} in zone, {} distinct",
            self.operators.len(),
            self.zone.planes().len(),
            grid.len(),
            kept,
            reduced.len()
        );
        reduced
    }
}
