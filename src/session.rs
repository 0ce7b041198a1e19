//! Navigation session: configuration, guard checks, and the command surface.
//!
//! A session is an explicit object instead of process-wide mutable state, so
//! independent sessions can coexist and tests need no globals. It owns the
//! attached log stream, the document registry, the package filter, and the
//! compiled pattern rules, and exposes the five operator commands.

use crate::docs::DocumentRegistry;
use crate::error::{ConfigError, NavError, Result};
use crate::navigator::{ErrorRecord, Navigator, ScanDirection};
use crate::pattern::PatternRules;
use crate::stream::LogStream;
use log::debug;

/// One operator session over a single log source.
pub struct Session<R: DocumentRegistry> {
    log: Option<Box<dyn LogStream>>,
    docs: R,
    package_filter: Option<String>,
    rules: PatternRules,
}

impl<R: DocumentRegistry> Session<R> {
    pub fn new(docs: R) -> Self {
        Self {
            log: None,
            docs,
            package_filter: None,
            rules: PatternRules::new(),
        }
    }

    /// Attach the log source this session navigates.
    pub fn attach_log(&mut self, stream: Box<dyn LogStream>) {
        debug!("attaching log source {:?}", stream.source_name());
        self.log = Some(stream);
    }

    /// Detach the log source, returning it to the host.
    pub fn detach_log(&mut self) -> Option<Box<dyn LogStream>> {
        self.log.take()
    }

    /// Configure the package filter restricting matches to operator code.
    ///
    /// An empty string is not a usable filter and leaves the session
    /// unconfigured.
    pub fn set_package_filter(&mut self, filter: impl Into<String>) {
        self.package_filter = Some(filter.into());
    }

    pub fn clear_package_filter(&mut self) {
        self.package_filter = None;
    }

    pub fn package_filter(&self) -> Option<&str> {
        self.package_filter.as_deref()
    }

    /// Read access to the attached stream (cursor position, identity)
    pub fn log(&self) -> Option<&dyn LogStream> {
        self.log.as_deref()
    }

    /// Mutable access for the host to reposition the view cursor.
    pub fn log_mut(&mut self) -> Option<&mut (dyn LogStream + 'static)> {
        self.log.as_deref_mut()
    }

    pub fn docs(&self) -> &R {
        &self.docs
    }

    pub fn docs_mut(&mut self) -> &mut R {
        &mut self.docs
    }

    /// Validate that navigation preconditions are satisfied.
    ///
    /// Runs at the start of every navigation operation, not only at session
    /// start: configuration can be cleared between calls. Source liveness is
    /// checked before the filter.
    pub fn assert_ready(&self) -> std::result::Result<(), ConfigError> {
        self.live_log().ok_or(ConfigError::MissingLogSource)?;
        self.active_filter().ok_or(ConfigError::MissingPackageFilter)?;
        Ok(())
    }

    /// Stop at the next navigable error record, without switching documents.
    pub fn find_next_error(&mut self) -> Result<ErrorRecord> {
        self.navigate(ScanDirection::Forward, false, false)
    }

    /// Stop at the previous navigable error record, without switching documents.
    pub fn find_previous_error(&mut self) -> Result<ErrorRecord> {
        self.navigate(ScanDirection::Backward, false, false)
    }

    /// Find the next navigable record and jump to its source location.
    pub fn visit_next_error(&mut self) -> Result<ErrorRecord> {
        self.navigate(ScanDirection::Forward, false, true)
    }

    /// Find the previous navigable record and jump to its source location.
    pub fn visit_previous_error(&mut self) -> Result<ErrorRecord> {
        self.navigate(ScanDirection::Backward, false, true)
    }

    /// Jump to the source location of the record under the cursor.
    ///
    /// Scanning opens at the beginning of the current line, so a location
    /// embedded there wins over advancing to a later record.
    pub fn visit_this_error(&mut self) -> Result<ErrorRecord> {
        self.navigate(ScanDirection::Forward, true, true)
    }

    fn live_log(&self) -> Option<&dyn LogStream> {
        self.log.as_deref().filter(|stream| stream.is_live())
    }

    fn active_filter(&self) -> Option<&str> {
        self.package_filter.as_deref().filter(|f| !f.is_empty())
    }

    /// Shared traversal behind the five commands.
    ///
    /// The stream cursor moves only after the scan succeeds; a guard or
    /// boundary failure leaves all session state untouched. A failed visit
    /// leaves the cursor on the found record (the search step succeeded).
    fn navigate(
        &mut self,
        direction: ScanDirection,
        include_current: bool,
        visit: bool,
    ) -> Result<ErrorRecord> {
        let record = {
            let stream = self.live_log().ok_or(ConfigError::MissingLogSource)?;
            let filter = self
                .active_filter()
                .ok_or(ConfigError::MissingPackageFilter)?;
            debug!(
                "scanning {direction:?} from cursor {} (include_current: {include_current})",
                stream.cursor()
            );
            Navigator::new(stream, &self.rules, filter).find_error(direction, include_current)?
        };

        if let Some(log) = self.log.as_deref_mut() {
            log.move_cursor(record.offset);
        }

        if visit {
            let handle = self
                .docs
                .resolve(&record.location.path)
                .ok_or_else(|| NavError::unknown_document(record.location.path.clone()))?;
            self.docs.move_to(handle, record.location.line);
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::OpenDocuments;
    use crate::stream::InMemoryLogStream;
    use std::borrow::Cow;

    const LOG: &str = "V/info line\nE/ com.my.pkg crash (Main.java:10)\nE/ other.pkg crash (Other.java:99)\n";

    fn session_with(content: &str) -> Session<OpenDocuments> {
        let mut session = Session::new(OpenDocuments::new());
        session.attach_log(Box::new(InMemoryLogStream::new("logcat", content)));
        session.set_package_filter("com.my.pkg");
        session
    }

    /// Stream double whose backing source has gone away.
    struct DeadStream;

    impl LogStream for DeadStream {
        fn source_name(&self) -> &str {
            "dead"
        }
        fn is_live(&self) -> bool {
            false
        }
        fn end_offset(&self) -> u64 {
            0
        }
        fn cursor(&self) -> u64 {
            0
        }
        fn move_cursor(&mut self, _offset: u64) {}
        fn line_start(&self, _offset: u64) -> u64 {
            0
        }
        fn line_end(&self, _offset: u64) -> u64 {
            0
        }
        fn next_line_start(&self, _offset: u64) -> Option<u64> {
            None
        }
        fn prev_line_start(&self, _offset: u64) -> Option<u64> {
            None
        }
        fn span(&self, _start: u64, _end: u64) -> Cow<'_, str> {
            Cow::Borrowed("")
        }
    }

    #[test]
    fn test_guard_requires_log_source() {
        let mut session = Session::new(OpenDocuments::new());
        session.set_package_filter("com.my.pkg");

        assert_eq!(session.assert_ready(), Err(ConfigError::MissingLogSource));
        assert!(matches!(
            session.find_next_error(),
            Err(NavError::NotConfigured(ConfigError::MissingLogSource))
        ));
    }

    #[test]
    fn test_guard_rejects_dead_source() {
        let mut session = Session::new(OpenDocuments::new());
        session.attach_log(Box::new(DeadStream));
        session.set_package_filter("com.my.pkg");

        assert_eq!(session.assert_ready(), Err(ConfigError::MissingLogSource));
    }

    #[test]
    fn test_guard_requires_package_filter() {
        let mut session = Session::new(OpenDocuments::new());
        session.attach_log(Box::new(InMemoryLogStream::new("logcat", LOG)));

        assert_eq!(
            session.assert_ready(),
            Err(ConfigError::MissingPackageFilter)
        );

        session.set_package_filter("");
        assert_eq!(
            session.assert_ready(),
            Err(ConfigError::MissingPackageFilter)
        );
    }

    #[test]
    fn test_guard_checks_source_before_filter() {
        let session: Session<OpenDocuments> = Session::new(OpenDocuments::new());
        assert_eq!(session.assert_ready(), Err(ConfigError::MissingLogSource));
    }

    #[test]
    fn test_guard_reruns_on_every_operation() {
        let mut session = session_with(LOG);
        assert!(session.find_next_error().is_ok());

        session.clear_package_filter();
        assert!(matches!(
            session.find_next_error(),
            Err(NavError::NotConfigured(ConfigError::MissingPackageFilter))
        ));
    }

    #[test]
    fn test_find_next_moves_cursor_to_record_start() {
        let mut session = session_with(LOG);
        let record = session.find_next_error().unwrap();

        assert_eq!(record.offset, 12);
        assert_eq!(session.log().map(|log| log.cursor()), Some(12));
        // No document switch in find mode
        assert!(session.docs().active_view().is_none());
    }

    #[test]
    fn test_find_next_is_repeatable_from_unchanged_position() {
        let mut session = session_with(LOG);

        let first = session.find_next_error().unwrap();
        if let Some(log) = session.log_mut() {
            log.move_cursor(0);
        }
        let second = session.find_next_error().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_boundary_preserves_cursor() {
        let mut session = session_with(LOG);
        session.find_next_error().unwrap();

        let err = session.find_next_error().unwrap_err();
        assert!(matches!(err, NavError::BoundaryReached { .. }));
        assert_eq!(session.log().map(|log| log.cursor()), Some(12));
    }

    #[test]
    fn test_visit_jumps_to_open_document() {
        let mut session = session_with(LOG);
        session.docs_mut().open("Main.java");

        let record = session.visit_next_error().unwrap();
        assert_eq!(record.location.to_string(), "Main.java:10");

        let (path, line) = session.docs().active_view().expect("view activated");
        assert_eq!(path, "Main.java");
        assert_eq!(line, 10);
    }

    #[test]
    fn test_visit_unknown_document_keeps_found_cursor() {
        let mut session = session_with(LOG);

        let err = session.visit_next_error().unwrap_err();
        assert!(matches!(err, NavError::UnknownDocument { ref path } if path == "Main.java"));
        // The search step succeeded; the cursor reflects the found record
        assert_eq!(session.log().map(|log| log.cursor()), Some(12));
        assert!(session.docs().active_view().is_none());
    }

    #[test]
    fn test_visit_this_prefers_current_line() {
        let mut session = session_with(LOG);
        session.docs_mut().open("Main.java");

        // Park the cursor on the matching record, then visit in place
        session.find_next_error().unwrap();
        let record = session.visit_this_error().unwrap();
        assert_eq!(record.offset, 12);
        assert_eq!(record.location.line, 10);
    }

    #[test]
    fn test_find_previous_from_later_record() {
        let mut session = session_with(LOG);
        if let Some(log) = session.log_mut() {
            log.move_cursor(47);
        }

        let record = session.find_previous_error().unwrap();
        assert_eq!(record.offset, 12);
    }
}
