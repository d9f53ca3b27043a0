//! Derives the effective logging behavior from a signed verbosity level.

use crate::severity::Severity;

/// Computed once from the verbosity integer; never stored mutably.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerbosityPolicy {
    /// `None` disables logging entirely: no sinks are installed.
    pub min_severity: Option<Severity>,
    /// Filters process-wide advisory warnings, not WARNING log records.
    pub suppress_warnings: bool,
    /// Whether exception-carrying records render their traceback block.
    pub attach_tracebacks: bool,
}

impl VerbosityPolicy {
    /// Pure mapping:
    ///
    /// | verbosity | minimum  | suppress warnings | tracebacks |
    /// |-----------|----------|-------------------|------------|
    /// | < 0       | disabled | yes               | no         |
    /// | 0         | INFO     | yes               | no         |
    /// | 1         | DEBUG    | yes               | no         |
    /// | 2         | DEBUG    | no                | no         |
    /// | >= 3      | DEBUG    | no                | yes        |
    #[must_use]
    pub const fn from_verbosity(verbosity: i32) -> Self {
        if verbosity < 0 {
            return Self {
                min_severity: None,
                suppress_warnings: true,
                attach_tracebacks: false,
            };
        }
        Self {
            min_severity: Some(if verbosity == 0 {
                Severity::Info
            } else {
                Severity::Debug
            }),
            suppress_warnings: verbosity < 2,
            attach_tracebacks: verbosity >= 3,
        }
    }
}
