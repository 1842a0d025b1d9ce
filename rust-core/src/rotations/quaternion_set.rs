use nalgebra::UnitQuaternion;
use std::collections::HashMap;

use crate::config::DEDUPLICATION_TOLERANCE;
use crate::rotations::quaternion_ops::{canonicalize, negate, quaternion_distance};

/// Insertion-ordered set of rotations with tolerant membership.
///
/// Members are canonical quaternions bucketed on a 4D grid of cell size
/// `4 · tolerance`; a lookup visits the neighbouring cell along every axis whose
/// coordinate lies within `tolerance` of a cell wall, so two rotations closer
/// than `tolerance` always meet.
#[derive(Debug, Clone)]
pub struct QuaternionSet {
    tolerance: f64,
    cell_size: f64,
    cells: HashMap<[i64; 4], Vec<usize>>,
    members: Vec<UnitQuaternion<f64>>,
}

impl QuaternionSet {
    /// Create an empty set with the crate's deduplication tolerance
    pub fn new() -> Self {
        Self::with_tolerance(DEDUPLICATION_TOLERANCE)
    }

    /// Create an empty set; `tolerance` is a Euclidean distance between unit quaternions
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            cell_size: 4.0 * tolerance,
            cells: HashMap::new(),
            members: Vec::new(),
        }
    }

    /// Build a set from a sequence, keeping the first of every group of duplicates
    pub fn from_quaternions<I>(quaternions: I) -> Self
    where
        I: IntoIterator<Item = UnitQuaternion<f64>>,
    {
        let mut set = Self::new();
        for q in quaternions {
            set.insert(q);
        }
        set
    }

    /// Insert the canonical form of `q`. Returns `false` if an equal rotation is present.
    pub fn insert(&mut self, q: UnitQuaternion<f64>) -> bool {
        let q = canonicalize(&q);
        if self.contains(&q) {
            return false;
        }
        let index = self.members.len();
        self.cells.entry(self.cell_of(&q)).or_default().push(index);
        self.members.push(q);
        true
    }

    /// Whether a rotation within tolerance of `q` (either sign) is a member
    pub fn contains(&self, q: &UnitQuaternion<f64>) -> bool {
        let q = canonicalize(q);
        if self.find(&q).is_some() {
            return true;
        }
        // Rotations by ~π may sit on either sheet after canonicalization
        q.w.abs() <= self.cell_size && self.find(&negate(&q)).is_some()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn as_slice(&self) -> &[UnitQuaternion<f64>] {
        &self.members
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnitQuaternion<f64>> {
        self.members.iter()
    }

    pub fn into_vec(self) -> Vec<UnitQuaternion<f64>> {
        self.members
    }

    fn cell_of(&self, q: &UnitQuaternion<f64>) -> [i64; 4] {
        [q.w, q.i, q.j, q.k].map(|c| (c / self.cell_size).floor() as i64)
    }

    fn find(&self, q: &UnitQuaternion<f64>) -> Option<usize> {
        let components = [q.w, q.i, q.j, q.k];
        let mut keys: Vec<[i64; 4]> = vec![self.cell_of(q)];

        for (axis, &c) in components.iter().enumerate() {
            let scaled = c / self.cell_size;
            let base = scaled.floor();
            let offset = if (scaled - base) * self.cell_size < self.tolerance {
                -1
            } else if (base + 1.0 - scaled) * self.cell_size < self.tolerance {
                1
            } else {
                continue;
            };
            let shifted: Vec<[i64; 4]> = keys
                .iter()
                .map(|key| {
                    let mut key = *key;
                    key[axis] += offset;
                    key
                })
                .collect();
            keys.extend(shifted);
        }

        keys.iter()
            .filter_map(|key| self.cells.get(key))
            .flatten()
            .copied()
            .find(|&index| quaternion_distance(&self.members[index], q) < self.tolerance)
    }
}

impl Default for QuaternionSet {
    fn default() -> Self {
        Self::new()
    }
}
