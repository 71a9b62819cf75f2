//! Error types for the coilgun simulator.
//!
//! This module provides a unified error type [`CoilgunError`] that covers
//! all error conditions that can occur during coil data loading,
//! configuration validation, and simulation setup.
//!
//! Note that a table lookup beyond the tabulated distance range is *not* an
//! error: it returns a defined saturated extrapolation (last known
//! inductance, zero force).

use thiserror::Error;

/// Result type alias using [`CoilgunError`].
pub type Result<T> = std::result::Result<T, CoilgunError>;

/// Unified error type for all coilgun operations.
#[derive(Error, Debug)]
pub enum CoilgunError {
    // ============ Coil Data Loading Errors ============
    /// Error reading a coil descriptor or data file
    #[error("Failed to read coil file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed descriptor JSON
    #[error("Failed to parse coil descriptor '{path}': {source}")]
    DescriptorParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Malformed value in the coil data table
    #[error("Invalid coil data in '{path}' at line {line}: {message}")]
    DataParse {
        path: String,
        line: usize,
        message: String,
    },

    /// A data row does not have one force column per current breakpoint
    #[error("Coil data line {line} has {found} columns, expected {expected} (distance, inductance, one force per breakpoint)")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The data table has no rows
    #[error("Coil data table '{path}' contains no data rows")]
    EmptyTable { path: String },

    /// Current breakpoints must be strictly ascending
    #[error("Coil descriptor breakpoints must be strictly ascending (Currents[{index}] = {value} does not increase)")]
    NonAscendingBreakpoints { index: usize, value: f64 },

    /// The descriptor lists no current breakpoints
    #[error("Coil descriptor has no current breakpoints")]
    NoBreakpoints,

    // ============ Configuration Errors ============
    /// A physical parameter is out of range
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter { name: String, message: String },

    /// The selected switching method has no circuit model yet
    #[error("Switching method '{method}' is not implemented")]
    UnimplementedMethod { method: String },
}

impl CoilgunError {
    /// Create a file-read error.
    pub fn file_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a data-parse error.
    pub fn data_parse(path: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::DataParse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// Create an invalid-parameter error.
    pub fn invalid_parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}
