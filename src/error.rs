use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for cable infill estimation.
#[derive(Debug, Error)]
pub enum InfillError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Estimate(#[from] EstimateError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while reading a path description string.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("path data is empty")]
    EmptyPathData,

    #[error("command '{command}' expects {expected} argument(s), found {found}")]
    MissingArgument {
        command: char,
        expected: usize,
        found: usize,
    },

    #[error("command '{command}' has invalid numeric argument {token:?}")]
    InvalidNumber { command: char, token: String },

    #[error("command '{command}' has non-finite argument {token:?}")]
    NonFiniteNumber { command: char, token: String },
}

/// Errors related to geometric inputs.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("non-finite {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("{parameter} must be positive, got {value}")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("spacing step {step} does not advance past offset {radius}")]
    StepTooSmall { radius: f64, step: f64 },

    #[error("edge {edge} needs {needed} offset lines, limit is {limit}")]
    TooManyLines {
        edge: usize,
        needed: f64,
        limit: usize,
    },
}

/// Errors reported by the estimation pipeline as a whole.
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("no boundary found: {reason}")]
    NoBoundaryFound { reason: String },
}

/// Errors raised while locating path data inside an SVG document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("SVG element not found")]
    NoSvgElement,

    #[error("path with a 'd' attribute not found in SVG")]
    NoPathElement,
}

/// Errors related to loading and validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config value '{key}': {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

/// Convenience type alias for results using [`InfillError`].
pub type Result<T> = std::result::Result<T, InfillError>;
