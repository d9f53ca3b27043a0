//! Tests for channel routing and the logging context.

use std::sync::{Arc, Mutex};

use groundwork::fmt::{Formatter, FormatterConfig, Template};
use groundwork::{
    ConsoleOptions, Error, Logger, Record, Severity, SeverityBand, Sink, VerbosityPolicy,
    default_bells, install,
};

/// Stand-in for a console stream: same band filtering, lines captured.
struct Capture {
    band: SeverityBand,
    formatter: Formatter,
    lines: Arc<Mutex<Vec<String>>>,
}

impl Sink for Capture {
    fn accepts(&self, severity: Severity) -> bool {
        self.band.accepts(severity)
    }

    fn emit(&self, record: &Record) -> Result<(), Error> {
        self.lines.lock().unwrap().push(self.formatter.render(record));
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }
}

/// A logger wired like the router's two channels, but capturing.
fn capturing_logger(min: Severity) -> (Logger, Arc<Mutex<Vec<String>>>, Arc<Mutex<Vec<String>>>) {
    let stdout_lines = Arc::new(Mutex::new(Vec::new()));
    let stderr_lines = Arc::new(Mutex::new(Vec::new()));
    let mut logger = Logger::new(min);
    logger.push_sink(Capture {
        band: SeverityBand::new(Severity::Debug, Severity::Info),
        formatter: Formatter::with_width(FormatterConfig::new(), 80),
        lines: Arc::clone(&stdout_lines),
    });
    logger.push_sink(Capture {
        band: SeverityBand::new(Severity::Warning, Severity::Critical),
        formatter: Formatter::with_width(FormatterConfig::new(), 80),
        lines: Arc::clone(&stderr_lines),
    });
    (logger, stdout_lines, stderr_lines)
}

#[test]
fn disabled_policy_installs_no_sinks() {
    let policy = VerbosityPolicy::from_verbosity(-1);
    let logger = install(&policy, &ConsoleOptions::new());
    assert!(!logger.is_enabled());
    assert_eq!(logger.sink_count(), 0);

    // Emitting against a disabled context is a no-op, not a panic.
    logger.info("router", 1, "dropped");
    logger.critical("router", 1, "also dropped");
}

#[test]
fn enabled_policy_installs_both_channels() {
    let policy = VerbosityPolicy::from_verbosity(0);
    let logger = install(&policy, &ConsoleOptions::new());
    assert!(logger.is_enabled());
    assert_eq!(logger.min_severity(), Some(Severity::Info));
    assert_eq!(logger.sink_count(), 2);
}

#[test]
fn verbose_policy_lowers_the_threshold() {
    let policy = VerbosityPolicy::from_verbosity(1);
    let logger = install(&policy, &ConsoleOptions::new());
    assert_eq!(logger.min_severity(), Some(Severity::Debug));
}

#[test]
fn info_threshold_drops_debug_and_splits_channels() {
    let (logger, stdout_lines, stderr_lines) = capturing_logger(Severity::Info);

    logger.debug("router", 1, "dropped");
    logger.info("router", 1, "to stdout");
    logger.warning("router", 1, "to stderr");
    logger.error("router", 1, "also stderr");

    let stdout = stdout_lines.lock().unwrap();
    let stderr = stderr_lines.lock().unwrap();
    assert_eq!(stdout.len(), 1);
    assert!(stdout[0].ends_with("INFO: to stdout"));
    assert_eq!(stderr.len(), 2);
    assert!(stderr[0].ends_with("WARN: to stderr"));
    assert!(stderr[1].ends_with("ERRO: also stderr"));
}

#[test]
fn debug_threshold_keeps_debug_on_stdout_only() {
    let (logger, stdout_lines, stderr_lines) = capturing_logger(Severity::Debug);

    logger.debug("router", 1, "visible");

    assert_eq!(stdout_lines.lock().unwrap().len(), 1);
    assert!(stderr_lines.lock().unwrap().is_empty());
}

#[test]
fn disabled_context_emits_nothing_anywhere() {
    let stdout_lines = Arc::new(Mutex::new(Vec::new()));
    let mut logger = Logger::disabled();
    logger.push_sink(Capture {
        band: SeverityBand::new(Severity::Debug, Severity::Critical),
        formatter: Formatter::with_width(
            FormatterConfig::new().template_override(Template::Simple),
            80,
        ),
        lines: Arc::clone(&stdout_lines),
    });

    for severity in Severity::all() {
        logger.log(severity, "router", 1, "dropped");
    }
    assert!(stdout_lines.lock().unwrap().is_empty());
}

#[test]
fn default_bells_match_stock_wiring() {
    let bells = default_bells();
    assert_eq!(bells.get(&Severity::Warning).unwrap(), "\u{7}\u{7}");
    assert_eq!(bells.get(&Severity::Error).unwrap(), "\u{7}\u{7}\u{7}");
    assert_eq!(bells.get(&Severity::Critical).unwrap(), "\u{7}\u{7}\u{7}\u{7}");
    assert!(!bells.contains_key(&Severity::Info));
}
