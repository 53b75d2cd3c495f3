//! # Error Types
//!
//! Structured error types for `lift_core`. Engine failures that have a
//! sensible fallback (missing price entry, no suitable power unit) do not
//! surface here at all. Those are reported in-band as zero prices or `None`
//! sentinels. `SizingError` covers hard failures only: malformed input,
//! empty catalogs, file I/O.
//!
//! ## Example
//!
//! ```rust
//! use lift_core::errors::{SizingError, SizingResult};
//!
//! fn validate_speed(speed_mps: f64) -> SizingResult<()> {
//!     if !(speed_mps > 0.0) {
//!         return Err(SizingError::invalid_input(
//!             "speed_mps",
//!             speed_mps.to_string(),
//!             "Rated speed must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for lift_core operations
pub type SizingResult<T> = Result<T, SizingError>;

/// Structured error type for sizing operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SizingError {
    /// An input value is invalid (NaN, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A catalog has no entries to select from
    #[error("Catalog '{catalog}' is empty")]
    EmptyCatalog { catalog: String },

    /// Project not found in a store
    #[error("Project not found: {project_number}")]
    ProjectNotFound { project_number: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// File is locked by another user/process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SizingError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SizingError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an EmptyCatalog error
    pub fn empty_catalog(catalog: impl Into<String>) -> Self {
        SizingError::EmptyCatalog {
            catalog: catalog.into(),
        }
    }

    /// Create a ProjectNotFound error
    pub fn project_not_found(project_number: impl Into<String>) -> Self {
        SizingError::ProjectNotFound {
            project_number: project_number.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SizingError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(
        path: impl Into<String>,
        locked_by: impl Into<String>,
        locked_at: impl Into<String>,
    ) -> Self {
        SizingError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SizingError::FileLocked { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SizingError::InvalidInput { .. } => "INVALID_INPUT",
            SizingError::EmptyCatalog { .. } => "EMPTY_CATALOG",
            SizingError::ProjectNotFound { .. } => "PROJECT_NOT_FOUND",
            SizingError::FileError { .. } => "FILE_ERROR",
            SizingError::FileLocked { .. } => "FILE_LOCKED",
            SizingError::SerializationError { .. } => "SERIALIZATION_ERROR",
            SizingError::VersionMismatch { .. } => "VERSION_MISMATCH",
            SizingError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}
