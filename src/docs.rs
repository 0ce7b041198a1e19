//! Document registry abstraction for visiting extracted locations.
//!
//! The hosting environment owns the set of already-open documents; the core
//! never creates or loads one. It only asks the registry to make a path the
//! active view at a given line. Lookups for unopened paths fail and surface
//! as [`NavError::UnknownDocument`](crate::error::NavError::UnknownDocument).
//!
//! TODO: auto-open unopened paths instead of failing the visit.

use std::borrow::Cow;

/// Opaque handle to an open document, valid for the registry that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentHandle(pub(crate) usize);

/// Lookup-by-path registry of addressable open documents.
///
/// Implemented once per target environment (editor plugin, terminal tool,
/// IDE extension). Path matching is strict string equality; alias or fuzzy
/// resolution is deliberately not part of the contract.
pub trait DocumentRegistry {
    /// Resolve a path to a handle, or `None` if the path is not open
    fn resolve(&self, path: &str) -> Option<DocumentHandle>;

    /// Make the document the active view, positioned at the 1-based `line`.
    ///
    /// Clamping `line` to the document's own bounds is the collaborator's
    /// responsibility, not the core's.
    fn move_to(&mut self, handle: DocumentHandle, line: u32);
}

/// In-memory registry used by the CLI host and the test suite.
#[derive(Debug, Default)]
pub struct OpenDocuments {
    paths: Vec<String>,
    /// Most recent (handle, line) activation, if any
    active: Option<(DocumentHandle, u32)>,
}

impl OpenDocuments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a path as open, returning its handle.
    ///
    /// Re-opening an already-open path returns the existing handle.
    pub fn open(&mut self, path: impl Into<String>) -> DocumentHandle {
        let path = path.into();
        if let Some(handle) = self.resolve(&path) {
            return handle;
        }
        self.paths.push(path);
        DocumentHandle(self.paths.len() - 1)
    }

    /// Path of the currently active view, with its cursor line
    pub fn active_view(&self) -> Option<(Cow<'_, str>, u32)> {
        self.active
            .map(|(handle, line)| (Cow::Borrowed(self.paths[handle.0].as_str()), line))
    }
}

impl DocumentRegistry for OpenDocuments {
    fn resolve(&self, path: &str) -> Option<DocumentHandle> {
        self.paths
            .iter()
            .position(|open| open == path)
            .map(DocumentHandle)
    }

    fn move_to(&mut self, handle: DocumentHandle, line: u32) {
        self.active = Some((handle, line));
    }
}
