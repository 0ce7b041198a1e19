//! Line classification rules for device-log text.
//!
//! Two independent classifiers applied to single lines or short windows of
//! text: a severity tier parsed from the fixed two-character line prefix, and
//! a compiled pattern locating embedded `(<path>:<line>)` source references.

use regex::Regex;

/// Severity tiers recognized in device-log lines.
///
/// Tiers exist purely for presentation; the navigation algorithm depends
/// only on [`Severity::Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// `V/` prefix - chatter, routine output
    Verbose,
    /// `W/` prefix - recoverable problems
    Warning,
    /// `E/` prefix - error records, the navigable tier
    Error,
}

impl Severity {
    /// Classify a line by its two-character severity marker.
    ///
    /// Returns `None` for lines carrying no recognized marker, including
    /// empty lines and lines shorter than the marker itself.
    pub fn classify(line: &str) -> Option<Severity> {
        match line.as_bytes() {
            [b'V', b'/', ..] => Some(Severity::Verbose),
            [b'W', b'/', ..] => Some(Severity::Warning),
            [b'E', b'/', ..] => Some(Severity::Error),
            _ => None,
        }
    }

    /// Short label for status output
    pub fn label(self) -> &'static str {
        match self {
            Severity::Verbose => "verbose",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// True iff the line begins with the error-severity marker.
pub fn is_error_start(line: &str) -> bool {
    Severity::classify(line) == Some(Severity::Error)
}

/// Compiled matching rules for embedded source references.
///
/// The location pattern matches `(<path>:<line>)` where `<path>` is a run of
/// characters containing at least one literal dot (excluding bare
/// identifiers) and `<line>` is one or more digits. Matching is
/// non-overlapping, leftmost-first.
#[derive(Debug, Clone)]
pub struct PatternRules {
    location: Regex,
}

/// Delimiters excluded from the path run: the wrapping parens, the
/// path/line separator, and whitespace.
const LOCATION_PATTERN: &str = r"\(([^():\s]*\.[^():\s]*):([0-9]+)\)";

impl PatternRules {
    pub fn new() -> Self {
        Self {
            location: Regex::new(LOCATION_PATTERN).expect("location pattern compiles"),
        }
    }

    /// Find the leftmost source-reference span in `text`.
    ///
    /// Returns the captured `(path, digits)` pair, both borrowed from `text`.
    /// The digits capture is unvalidated here; converting it to a line number
    /// is the location parser's contract.
    pub fn find_location<'t>(&self, text: &'t str) -> Option<(&'t str, &'t str)> {
        let caps = self.location.captures(text)?;
        match (caps.get(1), caps.get(2)) {
            (Some(path), Some(digits)) => Some((path.as_str(), digits.as_str())),
            _ => None,
        }
    }
}

impl Default for PatternRules {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_classify_markers() {
        assert_eq!(Severity::classify("V/chatter"), Some(Severity::Verbose));
        assert_eq!(Severity::classify("W/careful"), Some(Severity::Warning));
        assert_eq!(Severity::classify("E/broken"), Some(Severity::Error));
        assert_eq!(Severity::classify("I/info tier is not tracked"), None);
        assert_eq!(Severity::classify("plain text"), None);
    }

    #[test]
    fn test_error_start_edge_cases() {
        assert!(is_error_start("E/"));
        assert!(is_error_start("E/ com.my.pkg crash (Main.java:10)"));
        assert!(!is_error_start(""));
        assert!(!is_error_start("E"));
        assert!(!is_error_start(" E/ leading space"));
        assert!(!is_error_start("e/ lowercase marker"));
    }

    #[test]
    fn test_find_location_basic() {
        let rules = PatternRules::new();
        let found = rules.find_location("... (Foo.java:42) ...");
        assert_eq!(found, Some(("Foo.java", "42")));
    }

    #[test]
    fn test_find_location_requires_dot_in_path() {
        let rules = PatternRules::new();
        assert_eq!(rules.find_location("(NoDotPath:5)"), None);
    }

    #[test]
    fn test_find_location_rejects_non_numeric_line() {
        let rules = PatternRules::new();
        assert_eq!(rules.find_location("(Foo.java:x)"), None);
    }

    #[test]
    fn test_find_location_leftmost_first() {
        let rules = PatternRules::new();
        let text = "at a.b.C.d(First.kt:7) caused by (Second.java:99)";
        assert_eq!(rules.find_location(text), Some(("First.kt", "7")));
    }

    #[test]
    fn test_find_location_digits_not_validated_here() {
        let rules = PatternRules::new();
        assert_eq!(rules.find_location("(Foo.java:0)"), Some(("Foo.java", "0")));
    }

    proptest! {
        // Any line that does not begin with the error marker must classify
        // as non-error, whatever else it contains.
        #[test]
        fn prop_non_marker_lines_are_not_error_starts(line in "\\PC*") {
            prop_assume!(!line.starts_with("E/"));
            prop_assert!(!is_error_start(&line));
        }

        #[test]
        fn prop_error_marker_lines_are_error_starts(rest in "\\PC*") {
            let line = format!("E/{rest}");
            prop_assert!(is_error_start(&line));
        }
    }
}
