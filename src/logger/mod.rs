//! The logging context: an explicit object owned by the process entry point
//! and passed to anything that logs. No ambient global singleton; tests get
//! isolation through [`Logger::teardown`].

mod router;
mod sink;

pub use router::{ConsoleOptions, default_bells, install};
pub use sink::{ConsoleSink, Sink, SeverityBand, StreamTarget};

use crate::error::Error;
use crate::record::Record;
use crate::severity::Severity;

/// Filters by minimum severity, then fans each record out to every accepting
/// sink. A disabled context (`min_severity == None`) drops everything.
#[derive(Default)]
pub struct Logger {
    min_severity: Option<Severity>,
    sinks: Vec<Box<dyn Sink>>,
}

impl Logger {
    /// An enabled context with no sinks yet; the router attaches them.
    #[must_use]
    pub const fn new(min_severity: Severity) -> Self {
        Self {
            min_severity: Some(min_severity),
            sinks: Vec::new(),
        }
    }

    /// An inert context: every record is dropped before rendering.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            min_severity: None,
            sinks: Vec::new(),
        }
    }

    pub fn push_sink(&mut self, sink: impl Sink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.min_severity.is_some()
    }

    #[must_use]
    pub const fn min_severity(&self) -> Option<Severity> {
        self.min_severity
    }

    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Core dispatch. Sink I/O failures are swallowed: logging must never
    /// take the program down.
    pub fn log(&self, severity: Severity, function: &str, line: u32, message: impl Into<String>) {
        self.dispatch(Record::new(severity, function, line, message));
    }

    /// Same as [`Self::log`] with an exception payload attached; whether a
    /// traceback block renders is each sink formatter's policy.
    pub fn log_with_exception(
        &self,
        severity: Severity,
        function: &str,
        line: u32,
        message: impl Into<String>,
        error: Box<dyn std::error::Error + Send + Sync>,
    ) {
        self.dispatch(Record::new(severity, function, line, message).with_exception(error));
    }

    pub fn debug(&self, function: &str, line: u32, message: impl Into<String>) {
        self.log(Severity::Debug, function, line, message);
    }

    pub fn info(&self, function: &str, line: u32, message: impl Into<String>) {
        self.log(Severity::Info, function, line, message);
    }

    pub fn warning(&self, function: &str, line: u32, message: impl Into<String>) {
        self.log(Severity::Warning, function, line, message);
    }

    pub fn error(&self, function: &str, line: u32, message: impl Into<String>) {
        self.log(Severity::Error, function, line, message);
    }

    pub fn critical(&self, function: &str, line: u32, message: impl Into<String>) {
        self.log(Severity::Critical, function, line, message);
    }

    fn dispatch(&self, record: Record) {
        let Some(min) = self.min_severity else {
            return;
        };
        if record.severity < min {
            return;
        }
        for sink in &self.sinks {
            if sink.accepts(record.severity) {
                let _ = sink.emit(&record);
            }
        }
    }

    /// # Errors
    /// Returns the first I/O error encountered across all sinks.
    pub fn flush(&self) -> Result<(), Error> {
        for sink in &self.sinks {
            sink.flush()?;
        }
        Ok(())
    }

    /// Drops all sinks and disables the context. Test isolation hook; a torn
    /// down context behaves exactly like [`Logger::disabled`].
    pub fn teardown(&mut self) {
        self.sinks.clear();
        self.min_severity = None;
    }
}
