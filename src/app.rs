//! Application orchestration layer
//!
//! A line-oriented command loop that drives a navigation session from
//! operator input. It avoids duplicating state that already lives in the
//! session; the loop only parses commands, dispatches them, and reports
//! outcomes.

use crate::docs::OpenDocuments;
use crate::error::Result;
use crate::lookup;
use crate::navigator::ErrorRecord;
use crate::pattern::Severity;
use crate::session::Session;
use std::io::{self, BufRead, Write};

/// Operator commands accepted at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FindNext,
    FindPrevious,
    VisitNext,
    VisitPrevious,
    VisitThis,
    /// Register a path as an open document
    Open(String),
    /// Print a documentation-search URL for a word
    Doc(String),
    /// Show the current cursor line
    Where,
    Help,
    Quit,
}

/// Parse one line of operator input.
///
/// Returns `None` for blank input and unknown commands.
pub fn parse_command(input: &str) -> Option<Command> {
    let mut tokens = input.split_whitespace();
    let head = tokens.next()?;
    let rest = tokens.next();

    let command = match (head, rest) {
        ("n" | "next", None) => Command::FindNext,
        ("p" | "prev", None) => Command::FindPrevious,
        ("vn" | "visit-next", None) => Command::VisitNext,
        ("vp" | "visit-prev", None) => Command::VisitPrevious,
        ("v" | "visit", None) => Command::VisitThis,
        ("open", Some(path)) => Command::Open(path.to_string()),
        ("doc", Some(word)) => Command::Doc(word.to_string()),
        ("w" | "where", None) => Command::Where,
        ("h" | "help", None) => Command::Help,
        ("q" | "quit", None) => Command::Quit,
        _ => return None,
    };

    // Trailing tokens make the command ambiguous; reject rather than guess
    if tokens.next().is_some() {
        return None;
    }
    Some(command)
}

/// Interactive host around a navigation session.
pub struct Application {
    session: Session<OpenDocuments>,
}

impl Application {
    pub fn new(session: Session<OpenDocuments>) -> Self {
        Self { session }
    }

    /// Run the command loop until quit or end of input.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut out = io::stdout();

        writeln!(out, "logjump ready; 'help' lists commands")?;
        loop {
            write!(out, "> ")?;
            out.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match parse_command(&line) {
                Some(Command::Quit) => break,
                Some(command) => self.execute_command(command, &mut out)?,
                None => writeln!(out, "unrecognized command; 'help' lists commands")?,
            }
        }
        Ok(())
    }

    fn execute_command(&mut self, command: Command, out: &mut impl Write) -> Result<()> {
        match command {
            Command::FindNext => {
                let outcome = self.session.find_next_error();
                self.report(out, "stopped at", outcome)?;
            }
            Command::FindPrevious => {
                let outcome = self.session.find_previous_error();
                self.report(out, "stopped at", outcome)?;
            }
            Command::VisitNext => {
                let outcome = self.session.visit_next_error();
                self.report(out, "visiting", outcome)?;
            }
            Command::VisitPrevious => {
                let outcome = self.session.visit_previous_error();
                self.report(out, "visiting", outcome)?;
            }
            Command::VisitThis => {
                let outcome = self.session.visit_this_error();
                self.report(out, "visiting", outcome)?;
            }
            Command::Open(path) => {
                self.session.docs_mut().open(&path);
                writeln!(out, "open: {path}")?;
            }
            Command::Doc(word) => {
                writeln!(out, "{}", lookup::doc_search_url(&word))?;
            }
            Command::Where => match self.cursor_line() {
                Some((offset, severity, text)) => {
                    let tier = severity.map(Severity::label).unwrap_or("-");
                    writeln!(out, "@{offset} [{tier}] {text}")?;
                }
                None => writeln!(out, "no log source attached")?,
            },
            Command::Help => {
                writeln!(
                    out,
                    "commands: n(ext), p(rev), vn, vp, v(isit), open <path>, doc <word>, w(here), q(uit)"
                )?;
            }
            Command::Quit => {}
        }
        Ok(())
    }

    fn report(
        &self,
        out: &mut impl Write,
        verb: &str,
        outcome: Result<ErrorRecord>,
    ) -> Result<()> {
        match outcome {
            Ok(record) => {
                writeln!(out, "{verb} {} (offset {})", record.location, record.offset)?;
                if let Some((path, line)) = self.session.docs().active_view() {
                    log::debug!("active view now {path}:{line}");
                }
            }
            Err(err) => writeln!(out, "logjump: {err}")?,
        }
        Ok(())
    }

    fn cursor_line(&self) -> Option<(u64, Option<Severity>, String)> {
        let log = self.session.log()?;
        let start = log.line_start(log.cursor());
        let text = log.span(start, log.line_end(start)).into_owned();
        Some((start, Severity::classify(&text), text))
    }
}
