//! Builds the two console channels: normal output up to INFO on stdout,
//! WARNING and above on stderr, each behind its own formatter.

use std::collections::HashMap;

use crate::fmt::{Formatter, FormatterConfig, Template, TracebackRenderer, detect_width};
use crate::logger::Logger;
use crate::logger::sink::{ConsoleSink, SeverityBand, StreamTarget};
use crate::severity::Severity;
use crate::verbosity::VerbosityPolicy;
use crate::warnings;

/// Presentation options the caller resolved from CLI flags and config.
#[derive(Debug, Clone, Default)]
pub struct ConsoleOptions {
    pub colors: bool,
    pub bells: HashMap<Severity, String>,
    /// Timestamps and caller data; off means the message-only default layouts.
    pub extended: bool,
    pub force_wide: bool,
    pub colorizer: Option<TracebackRenderer>,
}

impl ConsoleOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn bells(mut self, bells: HashMap<Severity, String>) -> Self {
        self.bells = bells;
        self
    }

    #[must_use]
    pub const fn extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }

    #[must_use]
    pub const fn force_wide(mut self, force_wide: bool) -> Self {
        self.force_wide = force_wide;
        self
    }

    #[must_use]
    pub const fn colorizer(mut self, renderer: TracebackRenderer) -> Self {
        self.colorizer = Some(renderer);
        self
    }
}

/// The stock bell wiring: two bells for warnings, three for errors, four for
/// criticals. Callers supply their own map to deviate.
#[must_use]
pub fn default_bells() -> HashMap<Severity, String> {
    let mut bells = HashMap::new();
    bells.insert(Severity::Warning, "\u{7}\u{7}".to_string());
    bells.insert(Severity::Error, "\u{7}\u{7}\u{7}".to_string());
    bells.insert(Severity::Critical, "\u{7}\u{7}\u{7}\u{7}".to_string());
    bells
}

/// Builds the logging context for a verbosity policy.
///
/// A disabled policy yields an inert context with no sinks. Otherwise two
/// sinks are attached, sharing a single terminal-width probe: stdout accepts
/// DEBUG..=INFO, stderr accepts WARNING..=CRITICAL. In extended mode both
/// channels share the same formatter configuration; in the default mode
/// stdout renders message-only lines and stderr prefixes the level name.
///
/// Side effect: applies the policy's warning suppression to the process-wide
/// advisory toggle.
#[must_use]
pub fn install(policy: &VerbosityPolicy, options: &ConsoleOptions) -> Logger {
    warnings::set_suppressed(policy.suppress_warnings);

    let Some(min_severity) = policy.min_severity else {
        return Logger::disabled();
    };

    let base = FormatterConfig::new()
        .force_wide(options.force_wide)
        .colors(options.colors)
        .traceback(policy.attach_tracebacks)
        .bells(options.bells.clone());
    let base = match options.colorizer {
        Some(renderer) => base.colorizer(renderer),
        None => base,
    };

    let (stdout_config, stderr_config) = if options.extended {
        (base.clone(), base)
    } else {
        (
            base.clone().template_override(Template::Simple),
            base.template_override(Template::Level),
        )
    };

    // One probe for both channels: the two formatters must agree on layout.
    let width = detect_width();

    let mut logger = Logger::new(min_severity);
    logger.push_sink(ConsoleSink::new(
        StreamTarget::Stdout,
        SeverityBand::new(Severity::Debug, Severity::Info),
        Formatter::with_width(stdout_config, width),
    ));
    logger.push_sink(ConsoleSink::new(
        StreamTarget::Stderr,
        SeverityBand::new(Severity::Warning, Severity::Critical),
        Formatter::with_width(stderr_config, width),
    ));
    logger
}
