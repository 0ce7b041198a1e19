//! In-memory log stream for session-sized corpora.
//!
//! This implementation keeps the whole log text in memory together with a
//! line-start index built with memchr. Appends re-index only the new tail,
//! matching the append-only lifecycle of a live device log.

use crate::stream::LogStream;
use memchr::memchr_iter;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Production in-memory stream backing the CLI host and the test suite.
#[derive(Debug)]
pub struct InMemoryLogStream {
    /// Identity of the log view
    name: String,

    /// Full stream content (source of truth)
    content: String,

    /// Byte offsets where each line starts
    ///
    /// - line_starts[0] = 0 (first line always starts at byte 0)
    /// - line_starts[n] = byte position after the nth newline
    ///
    /// A trailing newline does not open a new line; the index tracks lines
    /// with content positions only. Grows monotonically under `append`.
    line_starts: Vec<u64>,

    /// Current cursor position
    cursor: u64,
}

impl InMemoryLogStream {
    /// Create a stream over already-collected log text.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let mut stream = Self {
            name: name.into(),
            content: String::new(),
            line_starts: vec![0],
            cursor: 0,
        };
        stream.append(&content);
        stream
    }

    /// Load a stream from a log file, naming it after the path.
    pub fn from_file(path: &Path) -> crate::error::Result<Self> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8_lossy(&bytes).into_owned();
        Ok(Self::new(path.display().to_string(), content))
    }

    /// Append freshly produced log text, indexing only the new tail.
    ///
    /// The cursor is left where it was; a scan that raced the append simply
    /// sees the stream state from before it.
    pub fn append(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let old_len = self.content.len();
        if old_len > 0 && self.content.ends_with('\n') {
            // The terminated final line is now followed by real content,
            // so the append opens a fresh line at the old end.
            self.line_starts.push(old_len as u64);
        }
        self.content.push_str(text);

        for nl in memchr_iter(b'\n', &self.content.as_bytes()[old_len..]) {
            let line_start = old_len + nl + 1;
            if line_start < self.content.len() {
                self.line_starts.push(line_start as u64);
            }
        }
    }

    /// Number of indexed lines
    pub fn line_count(&self) -> usize {
        if self.content.is_empty() {
            0
        } else {
            self.line_starts.len()
        }
    }

    /// Index into `line_starts` of the line containing `offset`
    fn line_index_of(&self, offset: u64) -> usize {
        let offset = offset.min(self.end_offset());
        self.line_starts.partition_point(|&start| start <= offset) - 1
    }

    fn line_bounds(&self, index: usize) -> (u64, u64) {
        let start = self.line_starts[index];
        let end = match self.line_starts.get(index + 1) {
            // Preceding entry ends right before the newline that opened the next line
            Some(&next_start) => next_start - 1,
            None => {
                let len = self.content.len() as u64;
                if self.content.ends_with('\n') {
                    len - 1
                } else {
                    len
                }
            }
        };
        (start, end)
    }
}

impl LogStream for InMemoryLogStream {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn is_live(&self) -> bool {
        true
    }

    fn end_offset(&self) -> u64 {
        self.content.len() as u64
    }

    fn cursor(&self) -> u64 {
        self.cursor
    }

    fn move_cursor(&mut self, offset: u64) {
        self.cursor = offset.min(self.end_offset());
    }

    fn line_start(&self, offset: u64) -> u64 {
        self.line_bounds(self.line_index_of(offset)).0
    }

    fn line_end(&self, offset: u64) -> u64 {
        self.line_bounds(self.line_index_of(offset)).1
    }

    fn next_line_start(&self, offset: u64) -> Option<u64> {
        self.line_starts.get(self.line_index_of(offset) + 1).copied()
    }

    fn prev_line_start(&self, offset: u64) -> Option<u64> {
        let index = self.line_index_of(offset);
        if index == 0 {
            None
        } else {
            Some(self.line_starts[index - 1])
        }
    }

    fn span(&self, start: u64, end: u64) -> Cow<'_, str> {
        let limit = self.content.len();
        let start = (start as usize).min(limit);
        let end = (end as usize).min(limit).max(start);
        // Offsets may fall inside a multi-byte character
        String::from_utf8_lossy(&self.content.as_bytes()[start..end])
    }
}
