//! Directional error-record scanning over a log stream.
//!
//! The navigator walks candidate lines in one direction, tolerating error
//! records that carry no parseable source reference: those are skipped
//! rather than surfaced as false positives. Both directions run through one
//! parameterized traversal; only the origin and the stepping differ.

use crate::error::{LocationError, NavError, Result};
use crate::location::{parse_location, SourceLocation};
use crate::pattern::{is_error_start, PatternRules};
use crate::stream::LogStream;
use log::debug;

/// Direction of a scan through the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    Forward,
    Backward,
}

impl ScanDirection {
    /// Which record the scan ran past when it hit the stream boundary
    pub(crate) fn boundary_label(self) -> &'static str {
        match self {
            ScanDirection::Forward => "last",
            ScanDirection::Backward => "first",
        }
    }
}

/// A successfully matched, navigable error record.
///
/// Candidates lacking a parseable location never surface here; the scan
/// continues past them instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    /// Offset of the start of the matched line
    pub offset: u64,
    /// The source reference embedded in the record
    pub location: SourceLocation,
}

/// Read-only scanner over a log stream.
///
/// Borrows the stream, the compiled rules and the package filter for the
/// duration of one operation; repositioning the stream cursor on success is
/// the session's job, which keeps a failed scan free of state changes.
pub struct Navigator<'a> {
    stream: &'a dyn LogStream,
    rules: &'a PatternRules,
    filter: &'a str,
}

impl<'a> Navigator<'a> {
    pub fn new(stream: &'a dyn LogStream, rules: &'a PatternRules, filter: &'a str) -> Self {
        Self {
            stream,
            rules,
            filter,
        }
    }

    /// Find the nearest navigable error record in `direction`.
    ///
    /// With `include_current`, the scan window opens at the start of the
    /// line under the cursor, so a reference embedded in the current line is
    /// preferred over advancing. Otherwise the current line's remainder is
    /// left behind: forward scans open at the line's end, backward scans at
    /// the start of the line above.
    pub fn find_error(&self, direction: ScanDirection, include_current: bool) -> Result<ErrorRecord> {
        let mut window_start = self
            .scan_origin(direction, include_current)
            .ok_or(NavError::BoundaryReached { direction })?;

        loop {
            if let Some(record) = self.match_record(window_start) {
                debug!(
                    "navigable record at offset {} -> {}",
                    record.offset, record.location
                );
                return Ok(record);
            }
            window_start = self
                .next_error_line(window_start, direction)
                .ok_or(NavError::BoundaryReached { direction })?;
        }
    }

    fn scan_origin(&self, direction: ScanDirection, include_current: bool) -> Option<u64> {
        let cursor = self.stream.cursor();
        match direction {
            ScanDirection::Forward if include_current => Some(self.stream.line_start(cursor)),
            ScanDirection::Forward => Some(self.stream.line_end(cursor)),
            ScanDirection::Backward => self.stream.prev_line_start(cursor),
        }
    }

    /// Try to match a navigable record in the remainder of one logical line.
    ///
    /// The window runs from `window_start` to the line's end and must contain
    /// the package filter followed by a parseable location. A window whose
    /// matched location fails to parse counts as "no match here" and the
    /// scan continues, per the tolerant skip policy.
    fn match_record(&self, window_start: u64) -> Option<ErrorRecord> {
        let window_end = self.stream.line_end(window_start);
        let window = self.stream.span(window_start, window_end);
        let window: &str = &window;

        let after_filter = window.find(self.filter)? + self.filter.len();
        match parse_location(self.rules, &window[after_filter..]) {
            Ok(location) => Some(ErrorRecord {
                offset: self.stream.line_start(window_start),
                location,
            }),
            Err(LocationError::NoMatch) => None,
            Err(err @ LocationError::InvalidLineNumber { .. }) => {
                debug!("skipping record at offset {window_start}: {err}");
                None
            }
        }
    }

    /// Start offset of the nearest line in `direction` that begins with the
    /// error-severity marker, or `None` at the stream boundary.
    fn next_error_line(&self, from: u64, direction: ScanDirection) -> Option<u64> {
        let mut pos = self.step(from, direction)?;
        loop {
            let line = self.stream.span(pos, self.stream.line_end(pos));
            if is_error_start(&line) {
                return Some(pos);
            }
            pos = self.step(pos, direction)?;
        }
    }

    fn step(&self, offset: u64, direction: ScanDirection) -> Option<u64> {
        match direction {
            ScanDirection::Forward => self.stream.next_line_start(offset),
            ScanDirection::Backward => self.stream.prev_line_start(offset),
        }
    }
}
