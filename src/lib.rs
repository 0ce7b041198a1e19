//! # logjump - Device-Log Error Navigation
//!
//! A log-navigation aid that scans device-log output for error records,
//! extracts the embedded `(file:line)` source reference from each, and jumps
//! between occurrences — stopping at a record or activating the referenced
//! document in an injected registry.
//!
//! ## Features
//!
//! - **Directional search**: next/previous traversal over error records with
//!   one parameterized scan for both directions
//! - **Tolerant skipping**: records without a parseable source reference are
//!   passed over instead of surfacing as false positives
//! - **Package filtering**: matches are restricted to records naming the
//!   operator's own package
//! - **Host-injected collaborators**: log source and document registry are
//!   small traits, implemented once per target environment
//!
//! ## Architecture
//!
//! The library is organized into focused modules following modern Rust patterns:
//!
//! - [`error`] - Centralized error types and handling
//! - [`pattern`] - Severity classification and the compiled location pattern
//! - [`location`] - Pure source-location extraction
//! - [`stream`] - Log stream abstraction with an in-memory implementation
//! - [`navigator`] - The directional skip-and-retry scan
//! - [`session`] - Session configuration, guard checks, command surface
//! - [`docs`] - Document registry collaborator
//! - [`app`] - Interactive command loop for the CLI host

// Core modules
pub mod error;
pub mod location;
pub mod pattern;
pub mod stream;

// Navigation core
pub mod docs;
pub mod navigator;
pub mod session;

// Host-facing surface
pub mod app;
pub mod lookup;

// Re-export commonly used types for convenience
pub use error::{ConfigError, LocationError, NavError, Result};

// Public API surface for external usage
pub use docs::{DocumentHandle, DocumentRegistry, OpenDocuments};
pub use location::SourceLocation;
pub use navigator::{ErrorRecord, Navigator, ScanDirection};
pub use pattern::{is_error_start, PatternRules, Severity};
pub use session::Session;
pub use stream::{InMemoryLogStream, LogStream};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
