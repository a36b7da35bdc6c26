//! Result and Error types for stools-depletion
use std::path::PathBuf;

/// Type alias for Result<T, depletion::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `stools-depletion` crate
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("key \"{variable}\" not found on material {material}")]
    KeyNotFound { variable: String, material: String },

    #[error("the following times were not present in file {path:?}: {}", join_points(.points))]
    CoordinateNotFound { points: Vec<f64>, path: PathBuf },

    #[error("{axis} not stored on material {material}")]
    AxisUnavailable { axis: &'static str, material: String },

    #[error("isotopes not found on material {material}: {}", .names.join(", "))]
    IsotopeNotFound { names: Vec<String>, material: String },

    #[error("failed to parse \"{token}\" for variable {variable}")]
    ParseError {
        variable: String,
        token: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("{variable} for material {material} has not been loaded")]
    DataNotLoaded { variable: String, material: String },

    #[error("{variable} has an unexpected shape (expected {expected}, found {found:?})")]
    UnexpectedShape {
        variable: String,
        expected: &'static str,
        found: (usize, usize),
    },

    #[error("inconsistent length of {variable} (expected {expected:?}, found {found:?})")]
    UnexpectedLength {
        variable: String,
        expected: usize,
        found: usize,
    },
}

fn join_points(points: &[f64]) -> String {
    points
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}
