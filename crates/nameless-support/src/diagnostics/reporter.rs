use std::fmt::Display;
use std::io::{self, Write};

use elegance::{Io, Printer};

use crate::diagnostics::Severity;
use crate::loc::Location;

const INDENT: isize = 2;
const COLUMNS: usize = 80;

/// Messages with a severity level above this threshold are discarded
/// unless the reporter is reconfigured.
pub const DEFAULT_VERBOSITY: usize = 2;

/// Formats tagged diagnostic messages onto a sink, filtered by verbosity.
///
/// A message is emitted when its severity level is at most the reporter's
/// verbosity. Suppressed calls still take and format-check their arguments
/// and have no other effect.
pub struct Reporter<W: Write> {
    sink: W,
    verbosity: usize,
}

impl<W: Write> Reporter<W> {
    pub fn new(sink: W) -> Reporter<W> {
        Reporter {
            sink,
            verbosity: DEFAULT_VERBOSITY,
        }
    }

    pub fn with_verbosity(mut self, verbosity: usize) -> Reporter<W> {
        self.verbosity = verbosity;
        self
    }

    pub fn verbosity(&self) -> usize {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: usize) {
        self.verbosity = verbosity;
    }

    pub fn into_sink(self) -> W {
        self.sink
    }

    /// Report an error, tagged with the caller's own kind of error.
    pub fn error(
        &mut self,
        location: &Location,
        kind: &str,
        message: impl Display,
    ) -> io::Result<()> {
        self.emit(location, kind, Severity::Error, &message)
    }

    pub fn warning(&mut self, message: impl Display) -> io::Result<()> {
        self.emit(
            &Location::Unknown,
            Severity::Warning.str(),
            Severity::Warning,
            &message,
        )
    }

    pub fn debug(&mut self, message: impl Display) -> io::Result<()> {
        self.emit(
            &Location::Unknown,
            Severity::Debug.str(),
            Severity::Debug,
            &message,
        )
    }

    fn emit(
        &mut self,
        location: &Location,
        tag: &str,
        severity: Severity,
        message: &dyn Display,
    ) -> io::Result<()> {
        if severity.level() > self.verbosity {
            return Ok(());
        }
        let mut p = Printer::new(Io(&mut self.sink), COLUMNS);
        p.cgroup(INDENT, |p| {
            p.text_owned(format!("{} at {}:", tag, location))?;
            p.hard_break()?;
            p.text_owned(message.to_string())
        })?;
        p.hard_break()?;
        p.finish()?;
        self.sink.flush()
    }
}
