//! Error types for sampling requests.
//!
//! Every failure is detected before any grid is generated, so a request either
//! returns a complete sample or one of these errors.

use thiserror::Error;

/// Result type alias used throughout the library
pub type Result<T> = std::result::Result<T, SamplingError>;

/// Errors that can occur while translating, sampling or reducing orientations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplingError {
    /// Resolution lies outside the domain of the translating formula
    #[error("invalid resolution {resolution}°: {reason}")]
    InvalidResolution { resolution: f64, reason: String },

    /// Density parameter (or other numeric argument) is out of range
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// Both or neither of resolution and density were supplied
    #[error("exactly one of resolution or density must be given ({0})")]
    ConflictingParameters(String),

    /// Method identifier is not one of the recognised samplers
    #[error("unknown sampling method `{0}`, expected one of: cubochoric, haar_euler, quaternion")]
    UnknownMethod(String),

    /// Operator set is empty, lacks the identity or is not closed
    #[error("invalid symmetry group: {0}")]
    InvalidSymmetryGroup(String),

    /// Point group or space group specifier has no table entry
    #[error("unresolvable symmetry specifier `{0}`")]
    UnresolvableSpecifier(String),
}

impl SamplingError {
    pub(crate) fn invalid_resolution(resolution: f64, reason: impl Into<String>) -> Self {
        Self::InvalidResolution {
            resolution,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_parameter(
        name: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
