//! Source-location extraction from matched log text.
//!
//! A pure parsing layer with no side effects: given a candidate window of
//! text, it finds the first embedded reference via [`PatternRules`] and
//! converts it into a validated [`SourceLocation`].

use crate::error::LocationError;
use crate::pattern::PatternRules;
use std::fmt;

/// A parsed `path:line` reference extracted from a log record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Path text as it appeared in the record (always contains a dot)
    pub path: String,
    /// 1-based line number, always positive
    pub line: u32,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path, self.line)
    }
}

/// Extract the first source location from a candidate window of text.
///
/// Failure distinguishes "pattern did not match" ([`LocationError::NoMatch`])
/// from "matched but the line-number text is not a valid positive integer"
/// ([`LocationError::InvalidLineNumber`]). The digit class already excludes
/// signs and letters, so the second kind only fires for zero or for values
/// beyond `u32` range.
pub fn parse_location(rules: &PatternRules, text: &str) -> Result<SourceLocation, LocationError> {
    let (path, digits) = rules.find_location(text).ok_or(LocationError::NoMatch)?;

    let line: u32 = digits.parse().map_err(|_| LocationError::InvalidLineNumber {
        digits: digits.to_string(),
    })?;
    if line == 0 {
        return Err(LocationError::InvalidLineNumber {
            digits: digits.to_string(),
        });
    }

    Ok(SourceLocation {
        path: path.to_string(),
        line,
    })
}
