// Generators module: Contains the public sampling entry points
// This module resolves a request to operators and a grid, then hands the grid to the reducer

// ======================== MODULE DECLARATIONS ========================
pub mod fundamental_sampling;
pub mod local_sampling;
pub mod orientation_sample;
pub mod sample_request;

// Test modules
mod _tests_fundamental_sampling;

// ======================== REQUESTS ========================
pub use sample_request::{
    LocalSampleRequest, // struct - resolution/density, method, grid_width (degrees), optional centre
    SampleRequest,      // struct - symmetry, resolution/density, method
    SymmetrySpecifier,  // enum - PointGroup(String), SpaceGroup(u16), Operators(SymmetryOperatorSet)
};
// SampleRequest impl methods:
//   new(symmetry: impl Into<SymmetrySpecifier>) -> Self          - cubochoric, density unset
//   for_point_group(symbol: &str) -> Self / for_space_group(number: u16) -> Self
//   with_resolution(self, degrees: f64) -> Self / with_density(self, steps: i64) -> Self
//   with_method(self, method: SamplingMethod) -> Self / with_method_name(self, name: &str) -> Result<Self>

// SymmetrySpecifier impl methods:
//   proper_point_group(&self) -> Result<Option<ProperPointGroup>> - rotation subgroup, None for explicit operators
//   resolve(&self) -> Result<SymmetryOperatorSet>                  - operators used by the reducer

// ======================== RESULTS ========================
pub use orientation_sample::OrientationSample; // struct - ordered canonical orientations plus provenance
// OrientationSample impl methods:
//   len / is_empty / as_slice / iter / into_quaternions / to_components
//   method(&self) -> SamplingMethod / density_parameter(&self) -> usize / point_group(&self) -> Option<ProperPointGroup>
//   identity_index(&self) -> Option<usize>                        - position of the identity

// ======================== ENTRY POINTS ========================
pub use fundamental_sampling::sample_fundamental; // fn(request: &SampleRequest) -> Result<OrientationSample>
pub use local_sampling::sample_local; // fn(request: &LocalSampleRequest) -> Result<OrientationSample>
