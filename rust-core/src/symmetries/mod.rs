// Symmetries module: Contains point group tables and proper rotation operator sets
// This module resolves crystallographic symmetry specifiers to the rotations used for zone reduction

// ======================== MODULE DECLARATIONS ========================
pub mod point_groups;
pub mod symmetry_operations;
pub mod symmetry_point_groups;


// ======================== POINT GROUP TABLES ========================
pub use point_groups::{
    PointGroup,       // enum - the 32 crystallographic point groups (Schoenflies names)
    ProperPointGroup, // enum - the 11 rotation-only point groups (C1, C2, D2, C4, D4, C3, D3, C6, D6, T, O)
};

// PointGroup impl methods:
//   hermann_mauguin(&self) -> &'static str                     - short international symbol ("m-3m")
//   schoenflies(&self) -> &'static str                         - Schoenflies symbol ("Oh")
//   is_proper(&self) -> bool                                   - true for the 11 rotation groups
//   proper_subgroup(&self) -> ProperPointGroup                 - rotation subgroup used for sampling
//   from_space_group(number: u16) -> Result<PointGroup>        - point group of space group 1..=230
//   from_str(s: &str) -> Result<PointGroup>                    - parses either symbol family

// ProperPointGroup impl methods:
//   order(&self) -> usize                                      - number of rotations
//   hermann_mauguin(&self) -> &'static str                     - short international symbol ("432")
//   as_point_group(&self) -> PointGroup                        - the same group in the full table

// ======================== SYMMETRY OPERATIONS ========================
pub use symmetry_operations::{
    SymmetryOperation,   // struct - proper rotation stored as a canonical unit quaternion
    SymmetryOperatorSet, // struct - validated group of rotations, identity first
};
// SymmetryOperation impl methods:
//   new(rotation: UnitQuaternion<f64>) -> Self                 - canonicalizes the sign
//   identity() -> Self                                         - identity operation
//   apply(&self, point: Vector3<f64>) -> Vector3<f64>          - rotates a vector
//   act_on(&self, q: &UnitQuaternion<f64>) -> UnitQuaternion<f64> - canonical g · q
//   compose(&self, other: &Self) -> Self / inverse(&self) -> Self
//   angle(&self) -> f64 / axis(&self) -> Option<Vector3<f64>> / order(&self) -> usize / is_identity(&self) -> bool

// SymmetryOperatorSet impl methods:
//   new(rotations: Vec<UnitQuaternion<f64>>) -> Result<Self>   - validates non-empty, identity, closure
//   from_components(components: &[[f64; 4]]) -> Result<Self>   - validates unit norms first
//   from_generators(generators: &[UnitQuaternion<f64>]) -> Self - closes generators under multiplication
//   identity_only() -> Self                                    - trivial group
//   operations(&self) / rotations(&self) / len(&self) / is_empty(&self)
//   orbit(&self, q: &UnitQuaternion<f64>) -> Vec<UnitQuaternion<f64>> - canonical {g · q}

// ======================== POINT GROUP GENERATORS ========================
pub use symmetry_point_groups::{
    generate_symmetry_operations,     // fn(group: ProperPointGroup) -> SymmetryOperatorSet - dispatches on crystal system
    generate_cubic_operations,        // fn(group) -> SymmetryOperatorSet - 23 and 432
    generate_hexagonal_operations,    // fn(group) -> SymmetryOperatorSet - 6 and 622
    generate_tetragonal_operations,   // fn(group) -> SymmetryOperatorSet - 4 and 422
    generate_orthorhombic_operations, // fn() -> SymmetryOperatorSet - 222
    generate_trigonal_operations,     // fn(group) -> SymmetryOperatorSet - 3 and 32
    generate_monoclinic_operations,   // fn() -> SymmetryOperatorSet - 2
    generate_triclinic_operations,    // fn() -> SymmetryOperatorSet - 1
};
