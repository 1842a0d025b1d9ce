// Sampling module: Contains the three uniform samplers of SO(3) and the resolution translator
// This module turns a requested resolution or step count into an indexed grid of candidate orientations

// ======================== MODULE DECLARATIONS ========================
pub mod cubochoric;
pub mod cubochoric_mapping;
pub mod haar_euler;
pub mod quaternion_grid;
pub mod resolution;
pub mod uniform;

mod _tests_cubochoric;

// ======================== RESOLUTION TRANSLATION ========================
pub use resolution::{
    density_parameter,             // fn(method: SamplingMethod, density: Density) -> Result<usize> - step count for a method
    resolution_to_angular_steps,   // fn(resolution: f64) -> Result<usize> - ceil(360/θ), bumped to even
    resolution_to_semi_edge_steps, // fn(resolution: f64) -> Result<usize> - floor(131.97049/(θ - 0.03732))
    select_density,                // fn(resolution: Option<f64>, steps: Option<i64>) -> Result<Density> - exactly one of the two
};

// ======================== CUBOCHORIC PROJECTION ========================
pub use cubochoric_mapping::{
    ball_to_quaternion, // fn(h: &Vector3<f64>) -> UnitQuaternion<f64> - homochoric vector to rotation
    cube_to_ball,       // fn(point: &Vector3<f64>) -> Vector3<f64> - equal-volume cube to ball map
    cube_to_quaternion, // fn(point: &Vector3<f64>) -> UnitQuaternion<f64> - composed, canonical
    CubeRegion,         // enum - Origin, PyramidAxis(Pyramid), Sector(Pyramid, SectorOrientation)
    Pyramid,            // enum - the six cube pyramids, +z, -z, +x, -x, +y, -y
    SectorOrientation,  // enum - XDominant (|Y| <= |X|) or YDominant
};

// ======================== SAMPLER GRIDS ========================
pub use cubochoric::{
    cubochoric_sampling, // fn(semi_edge_steps: usize) -> Result<Vec<UnitQuaternion<f64>>> - distinct grid orientations
    CubochoricGrid,      // struct - (2N+1)^3 cube grid, x-major
};
pub use haar_euler::{
    haar_euler_sampling, // fn(steps: usize) -> Result<Vec<UnitQuaternion<f64>>> - distinct grid orientations
    HaarEulerGrid,       // struct - n x (n/2+1) x n Bunge grid, cos(beta) uniform
};
pub use quaternion_grid::{
    quaternion_sampling, // fn(steps: usize) -> Result<Vec<UnitQuaternion<f64>>> - distinct grid orientations
    QuaternionGrid,      // struct - n x n x ceil(n/2) layered grid on S^3
};

// Grid impl methods (all three implement OrientationGrid):
//   new(parameter: usize) -> Result<Self>                        - validates the step count and grid size
//   len(&self) -> usize                                          - number of grid points before de-duplication
//   orientation(&self, index: usize) -> UnitQuaternion<f64>      - canonical orientation of one grid point
//   cube_point / euler_angles / layer_coordinates(&self, index)  - raw grid coordinates

// ======================== UNIFORM SO(3) SAMPLING ========================
pub use uniform::{
    uniform_so3_sample, // fn(method: SamplingMethod, density: Density) -> Result<Vec<UnitQuaternion<f64>>>
    SamplerGrid,        // enum - any of the three grids, dispatching OrientationGrid
};
