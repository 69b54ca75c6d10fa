//! Error handling for the chain file reader

use std::io;
use thiserror::Error;

/// Unified error to report failures while reading a kinematic chain from YAML.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("IO Error: {0}")]
    IoError(#[from] io::Error),

    #[error("Parse Error: {0}")]
    ParseError(String),

    #[error("Invalid Length of {field}: expected {expected}, found {found}")]
    InvalidLength {
        field: String,
        expected: usize,
        found: usize,
    },
}
