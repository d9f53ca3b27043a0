//! `groundwork` - command-line program boilerplate.
//!
//! Argument parsing, signal handling for graceful shutdown, and a
//! configurable console logging subsystem:
//! - Severity classification with per-level colors and short codes
//! - Width-adaptive line layouts (wide, narrow, level-only, message-only)
//! - Dual-channel routing: DEBUG..INFO to stdout, WARNING and above to stderr
//! - Verbosity-derived policy for thresholds, warnings, and tracebacks
//!
//! # Example
//!
//! ```
//! use groundwork::{ConsoleOptions, VerbosityPolicy, info, install};
//!
//! let policy = VerbosityPolicy::from_verbosity(1);
//! let logger = install(&policy, &ConsoleOptions::new());
//!
//! info!(logger, "starting up");
//! groundwork::debug!(logger, "verbosity: {}", 1);
//! ```
//!
//! The logging context is an explicit value owned by the entry point; there
//! is no global logger. The only deliberate process-wide state is the
//! advisory warning toggle in [`warnings`].

pub mod cli;
pub mod config;
pub mod error;
pub mod fmt;
pub mod logger;
pub mod macros;
pub mod record;
pub mod severity;
pub mod signal;
pub mod verbosity;
pub mod warnings;

// Re-exports for convenience
pub use cli::{Cli, When};
pub use config::{FileConfig, Settings};
pub use error::Error;
pub use fmt::{Formatter, FormatterConfig, Template, TracebackRenderer};
pub use logger::{
    ConsoleOptions, ConsoleSink, Logger, Sink, SeverityBand, StreamTarget, default_bells, install,
};
pub use record::Record;
pub use severity::Severity;
pub use verbosity::VerbosityPolicy;
