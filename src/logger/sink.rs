//! Output sinks: each destination pairs a severity band with its own
//! formatter. The trait seam lets tests substitute recording sinks for the
//! real console streams.

use std::io::{self, Write};

use crate::error::Error;
use crate::fmt::Formatter;
use crate::record::Record;
use crate::severity::Severity;

/// `Send + Sync` so a logger can be shared with the signal watcher thread.
pub trait Sink: Send + Sync {
    /// Whether this sink wants records of the given severity at all.
    fn accepts(&self, severity: Severity) -> bool;

    /// Renders and writes one record.
    ///
    /// # Errors
    /// I/O errors from the underlying stream.
    fn emit(&self, record: &Record) -> Result<(), Error>;

    /// # Errors
    /// I/O errors from the underlying stream.
    fn flush(&self) -> Result<(), Error>;
}

/// Inclusive severity acceptance range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityBand {
    pub min: Severity,
    pub max: Severity,
}

impl SeverityBand {
    #[must_use]
    pub const fn new(min: Severity, max: Severity) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn accepts(self, severity: Severity) -> bool {
        self.min <= severity && severity <= self.max
    }
}

/// Which console stream a sink writes to. Resolved per write so captured
/// streams in tests observe the right channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamTarget {
    Stdout,
    Stderr,
}

/// A console stream with its own band and formatter.
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    target: StreamTarget,
    band: SeverityBand,
    formatter: Formatter,
}

impl ConsoleSink {
    #[must_use]
    pub const fn new(target: StreamTarget, band: SeverityBand, formatter: Formatter) -> Self {
        Self {
            target,
            band,
            formatter,
        }
    }

    #[must_use]
    pub const fn target(&self) -> StreamTarget {
        self.target
    }

    #[must_use]
    pub const fn band(&self) -> SeverityBand {
        self.band
    }

    #[must_use]
    pub const fn formatter(&self) -> &Formatter {
        &self.formatter
    }
}

impl Sink for ConsoleSink {
    fn accepts(&self, severity: Severity) -> bool {
        self.band.accepts(severity)
    }

    fn emit(&self, record: &Record) -> Result<(), Error> {
        let line = self.formatter.render(record);
        match self.target {
            StreamTarget::Stdout => writeln!(io::stdout(), "{line}")?,
            StreamTarget::Stderr => writeln!(io::stderr(), "{line}")?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        match self.target {
            StreamTarget::Stdout => io::stdout().flush()?,
            StreamTarget::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }
}
