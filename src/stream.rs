//! Log stream abstraction with line-oriented navigation.
//!
//! This module defines the LogStream trait that provides a consistent
//! interface to the append-only text corpus being searched. The trait uses
//! byte-offset navigation; the hosting environment owns the stream and may
//! append to it at any time, while the core only reads line geometry and
//! repositions the cursor.

pub mod in_memory;

pub use in_memory::InMemoryLogStream;

use std::borrow::Cow;

/// Core trait for read access to an append-only log view.
///
/// Offsets are byte positions into the stream. A "line" is a maximal run of
/// text delimited by `\n`; line-end offsets exclude the newline byte. The
/// stream is never truncated during a session, so offsets handed out by one
/// query remain valid for later queries within the same scan.
pub trait LogStream {
    /// Identity of the underlying log view (for messages and lookups)
    fn source_name(&self) -> &str;

    /// Whether the backing source still exists.
    ///
    /// A host whose log view can be torn down independently of the session
    /// (killed buffer, deleted file) reports that here; the session guard
    /// treats a dead stream the same as an absent one.
    fn is_live(&self) -> bool;

    /// Offset one past the last byte currently in the stream
    fn end_offset(&self) -> u64;

    /// Current cursor position within the stream
    fn cursor(&self) -> u64;

    /// Reposition the cursor, clamped to the current stream end
    fn move_cursor(&mut self, offset: u64);

    /// Start offset of the line containing `offset`
    fn line_start(&self, offset: u64) -> u64;

    /// End offset of the line containing `offset` (excludes the newline)
    fn line_end(&self, offset: u64) -> u64;

    /// Start offset of the line after the one containing `offset`
    ///
    /// Returns `None` when the containing line is the last line.
    fn next_line_start(&self, offset: u64) -> Option<u64>;

    /// Start offset of the line before the one containing `offset`
    ///
    /// Returns `None` when the containing line is the first line.
    fn prev_line_start(&self, offset: u64) -> Option<u64>;

    /// Read the text in `[start, end)`, both clamped to the stream end
    fn span(&self, start: u64, end: u64) -> Cow<'_, str>;
}
