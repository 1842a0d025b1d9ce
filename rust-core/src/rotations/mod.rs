// Rotations module: Contains the unit-quaternion utilities the samplers and the reducer share
// This module fixes the double-cover convention and provides tolerant rotation sets

// ======================== MODULE DECLARATIONS ========================
pub mod quaternion_ops;
pub mod quaternion_set;


// ======================== QUATERNION UTILITIES ========================
pub use quaternion_ops::{
    canonicalize,          // fn(q: &UnitQuaternion<f64>) -> UnitQuaternion<f64> - sign convention for q ~ -q
    compare_vector_parts,  // fn(a, b, tol: f64) -> Ordering - tolerant lexicographic order on (x, y, z)
    from_axis_angle,       // fn(axis: Vector3<f64>, angle: f64) -> UnitQuaternion<f64> - canonical axis-angle rotation
    from_euler_zxz,        // fn(alpha: f64, beta: f64, gamma: f64) -> UnitQuaternion<f64> - Bunge Euler angles
    is_canonical,          // fn(q: &UnitQuaternion<f64>) -> bool - checks the sign convention
    is_identity,           // fn(q: &UnitQuaternion<f64>, tol: f64) -> bool - identity up to sign
    misorientation_angle,  // fn(a, b) -> f64 - rotation angle of a * b^-1
    negate,                // fn(q: &UnitQuaternion<f64>) -> UnitQuaternion<f64> - other sheet of the double cover
    quaternion_distance,   // fn(a, b) -> f64 - Euclidean distance up to sign
    rodrigues_vector,      // fn(q: &UnitQuaternion<f64>) -> Option<Vector3<f64>> - tan(ω/2)·n, None at ω = π
    rotation_angle,        // fn(q: &UnitQuaternion<f64>) -> f64 - angle in [0, π]
};

// ======================== DEDUPLICATION ========================
pub use quaternion_set::QuaternionSet; // struct - insertion-ordered set with tolerant membership
// QuaternionSet impl methods:
//   new() -> Self                                             - empty set with DEDUPLICATION_TOLERANCE
//   with_tolerance(tolerance: f64) -> Self                    - empty set with custom tolerance
//   from_quaternions(iter) -> Self                            - deduplicates a sequence, first occurrence wins
//   insert(&mut self, q: UnitQuaternion<f64>) -> bool         - inserts canonical form, false on duplicate
//   contains(&self, q: &UnitQuaternion<f64>) -> bool          - tolerant membership test
//   len(&self) / is_empty(&self) / as_slice(&self) / iter(&self) / into_vec(self)
