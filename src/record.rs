//! Carries all data a sink needs to render one log line.

use crate::severity::Severity;
use chrono::{DateTime, Local};

/// One record per log call; stamped on creation, rendered by each accepting
/// sink, then dropped. Never persisted.
#[derive(Debug)]
pub struct Record {
    pub severity: Severity,
    pub message: String,
    /// The emitting function or module path, printed by the wide template.
    pub function: String,
    pub line: u32,
    pub timestamp: DateTime<Local>,
    /// Present only for exception-carrying records; rendered as a trailing
    /// traceback block when the formatter's traceback policy allows it.
    pub exception: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Record {
    /// Stamps the current local time; tests freeze it with [`Self::with_timestamp`].
    #[must_use]
    pub fn new(
        severity: Severity,
        function: impl Into<String>,
        line: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            function: function.into(),
            line,
            timestamp: Local::now(),
            exception: None,
        }
    }

    /// Rendering must be reproducible under test, so the clock is overridable.
    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Attaches an exception payload; the formatter decides whether a
    /// traceback block is emitted for it. Accepts bare error values and
    /// already-boxed payloads alike.
    #[must_use]
    pub fn with_exception(
        mut self,
        error: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        self.exception = Some(error.into());
        self
    }
}
