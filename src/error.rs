//! Error types and handling infrastructure for logjump.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types and `anyhow` for application-level error handling with context.
//!
//! ## Design Principles
//!
//! - **User-friendly messages**: Errors should provide actionable feedback
//! - **Preserved cursor state**: Failures report which state (if any) changed
//! - **Consistency**: Standardized Result type across all modules

use crate::navigator::ScanDirection;
use thiserror::Error;

/// The main error type for logjump navigation operations.
///
/// Covers every operator-facing failure a navigation command can produce.
/// Operator-facing errors are synchronous and never retried automatically;
/// the operator re-invokes the command after correcting configuration or
/// document availability.
#[derive(Error, Debug)]
pub enum NavError {
    /// Navigation preconditions are not satisfied (session guard failure).
    ///
    /// Reported to the operator, the operation is aborted and no state changes.
    #[error("session not configured: {0}")]
    NotConfigured(#[from] ConfigError),

    /// No further matching record exists in the requested direction.
    ///
    /// The cursor position from before the scan is preserved.
    #[error("moved past the {} error record", direction.boundary_label())]
    BoundaryReached { direction: ScanDirection },

    /// The resolved path is not available in the document registry.
    ///
    /// The log-stream cursor may already point at the matching record: the
    /// search step succeeded, the visit step is the one that failed.
    #[error("document not open: {path}")]
    UnknownDocument { path: String },

    /// Reading the log source into a stream failed.
    #[error("log source read failed: {message}")]
    Source {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Session guard failures: the configuration a scan depends on is absent.
///
/// Checked at the start of every navigation operation, not only at session
/// start, since configuration can be cleared independently of navigation
/// calls.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The configured log stream handle does not resolve to a live source.
    #[error("no live log source is attached")]
    MissingLogSource,

    /// The package filter has not been set for this session.
    #[error("no package filter is set")]
    MissingPackageFilter,
}

/// Failures from the pure location parser.
///
/// Internal to the scan loop: the navigator treats both variants as "no
/// match here" and keeps scanning. The two kinds stay distinguishable for
/// testability.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// No `(<path>:<line>)` span matched the candidate text.
    #[error("no source location pattern in candidate text")]
    NoMatch,

    /// A span matched but its line-number text is not a valid positive integer.
    #[error("matched location has invalid line number: {digits:?}")]
    InvalidLineNumber { digits: String },
}

/// Standard Result type for logjump operations.
///
/// This type alias provides a consistent error handling interface across
/// all modules in the logjump codebase.
pub type Result<T> = std::result::Result<T, NavError>;

impl NavError {
    /// Create an UnknownDocument error for a path missing from the registry
    pub fn unknown_document(path: impl Into<String>) -> Self {
        Self::UnknownDocument { path: path.into() }
    }

    /// Create a Source error from an io::Error with additional context
    pub fn source_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Source {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversion from io::Error for `?` at the stream-loading boundary
impl From<std::io::Error> for NavError {
    fn from(err: std::io::Error) -> Self {
        let message = match err.kind() {
            std::io::ErrorKind::NotFound => "log source not found".to_string(),
            std::io::ErrorKind::PermissionDenied => "permission denied".to_string(),
            _ => "IO operation failed".to_string(),
        };
        Self::Source {
            message,
            source: err,
        }
    }
}
