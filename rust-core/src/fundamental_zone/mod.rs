// Fundamental zone module: Contains the Rodrigues fundamental zone and the symmetry reduction of samples
// This module keeps exactly one orientation per symmetry class of a proper point group

// ======================== MODULE DECLARATIONS ========================
pub mod disorientation;
pub mod reducer;
pub mod rodrigues_zone;

// Test modules
mod _tests_disorientation;
mod _tests_rodrigues_zone;

// ======================== RODRIGUES FUNDAMENTAL ZONE ========================
pub use rodrigues_zone::{
    RodriguesFundamentalZone, // struct - intersection of |n·ρ| <= tan(ω/4) slabs, one per operator axis and angle
    ZoneMembership,           // enum - Outside, Interior, Boundary
    ZonePlane,                // struct - unit normal and tan(ω/4)
};
// RodriguesFundamentalZone impl methods:
//   from_operators(operators: &SymmetryOperatorSet) -> Self       - builds the deduplicated plane list
//   with_tolerance(self, tolerance: f64) -> Self                  - overrides FUNDAMENTAL_ZONE_TOLERANCE
//   classify(&self, q: &UnitQuaternion<f64>) -> ZoneMembership    - homogeneous test, valid for rotations by π
//   contains(&self, q) -> bool / contains_rodrigues(&self, ρ: &Vector3<f64>) -> bool
//   planes(&self) -> &[ZonePlane] / tolerance(&self) -> f64 / is_unbounded(&self) -> bool

// ======================== REDUCTION ========================
pub use reducer::FundamentalZoneReducer; // struct - zone filter with boundary tie-break and de-duplication
// FundamentalZoneReducer impl methods:
//   new(operators: &SymmetryOperatorSet) -> Result<Self>                      - rejects empty or identity-less sets
//   representative(&self, q) -> Option<UnitQuaternion<f64>>                    - None outside the zone
//   reduce(&self, candidates: &[UnitQuaternion<f64>]) -> Vec<UnitQuaternion<f64>> - first occurrence order
//   reduce_grid<G: OrientationGrid>(&self, grid: &G) -> Vec<UnitQuaternion<f64>>  - streams an indexed grid

// ======================== DISORIENTATION ========================
pub use disorientation::{
    disorientation,               // fn(a, b, operators: &SymmetryOperatorSet) -> f64 - min over g of angle((g·a)·b⁻¹)
    minimal_angle_representative, // fn(q, operators) -> UnitQuaternion<f64> - orbit member with the smallest angle
};
