//! SO(3) orientation sampling library
//!
//! This library generates deterministic, uniform samples of the rotation group and reduces
//! them to the fundamental zone of a crystallographic point group, for texture analysis
//! and orientation-distribution work.

pub mod config;
pub mod error;
pub mod fundamental_zone;
pub mod generators;
pub mod interfaces;
pub mod rotations;
pub mod sampling;
pub mod symmetries;

pub use error::{Result, SamplingError};
pub use generators::{
    sample_fundamental, sample_local, LocalSampleRequest, OrientationSample, SampleRequest,
    SymmetrySpecifier,
};
pub use interfaces::{Density, OrientationGrid, SamplingMethod};
pub use sampling::uniform_so3_sample;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
