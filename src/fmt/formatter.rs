//! Renders one record into a text line. Template choice and the flattened
//! color table are resolved at construction; `render` is a pure function of
//! the record afterwards.

use std::collections::HashMap;

use crate::fmt::classify::{classify, secondary};
use crate::fmt::template::{SelectionContext, Template, detect_width, select};
use crate::fmt::traceback::{TracebackRenderer, render_plain};
use crate::record::Record;
use crate::severity::Severity;

const WIDE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";
const NARROW_TIME_FORMAT: &str = "%dT%H:%M:%S%.3f";

/// Presentation knobs for one formatter. Constructed once, immutable after.
#[derive(Debug, Clone, Default)]
pub struct FormatterConfig {
    /// Skips width-based selection entirely when set.
    pub template_override: Option<Template>,
    /// Treat the terminal as wide regardless of measured width.
    pub force_wide: bool,
    pub colors: bool,
    /// When false, exception-carrying records render without their traceback
    /// block; the message line itself is unaffected.
    pub traceback: bool,
    /// Literal suffix appended per severity; absent entries add nothing.
    pub bells: HashMap<Severity, String>,
    /// Optional colorized traceback capability; plain rendering is the fallback.
    pub colorizer: Option<TracebackRenderer>,
}

impl FormatterConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin a specific layout instead of selecting by width.
    #[must_use]
    pub const fn template_override(mut self, template: Template) -> Self {
        self.template_override = Some(template);
        self
    }

    #[must_use]
    pub const fn force_wide(mut self, force_wide: bool) -> Self {
        self.force_wide = force_wide;
        self
    }

    /// Piped output and CI environments can't render ANSI escape codes.
    #[must_use]
    pub const fn colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub const fn traceback(mut self, traceback: bool) -> Self {
        self.traceback = traceback;
        self
    }

    #[must_use]
    pub fn bells(mut self, bells: HashMap<Severity, String>) -> Self {
        self.bells = bells;
        self
    }

    #[must_use]
    pub fn bell(mut self, severity: Severity, suffix: impl Into<String>) -> Self {
        self.bells.insert(severity, suffix.into());
        self
    }

    #[must_use]
    pub const fn colorizer(mut self, renderer: TracebackRenderer) -> Self {
        self.colorizer = Some(renderer);
        self
    }
}

/// One formatter per sink. The severity color table is flattened up front so
/// the render hot path is lookup plus string assembly.
#[derive(Debug, Clone)]
pub struct Formatter {
    config: FormatterConfig,
    template: Template,
    /// Indexed by `Severity as usize`: `(start, end, short_code)`.
    styles: [(String, String, &'static str); 5],
    secondary: (String, String),
}

impl Formatter {
    /// Probes the terminal once; see [`Self::with_width`] for the deterministic form.
    #[must_use]
    pub fn new(config: FormatterConfig) -> Self {
        let width = detect_width();
        Self::with_width(config, width)
    }

    /// Resolves template and colors from an explicit width, so tests and the
    /// router (which shares one probe across both channels) stay deterministic.
    #[must_use]
    pub fn with_width(config: FormatterConfig, width: u16) -> Self {
        let template = config.template_override.unwrap_or_else(|| {
            select(&SelectionContext {
                force_wide: config.force_wide,
                width,
            })
        });
        let styles = Severity::all().map(|severity| classify(severity, config.colors));
        let secondary = secondary(config.colors);
        Self {
            config,
            template,
            styles,
            secondary,
        }
    }

    /// The layout this formatter settled on at construction.
    #[must_use]
    pub const fn template(&self) -> Template {
        self.template
    }

    /// Renders the message line plus, for exception-carrying records, the
    /// traceback block. Total: never fails for any record.
    #[must_use]
    pub fn render(&self, record: &Record) -> String {
        let (start, end, code) = &self.styles[record.severity as usize];
        let mut line = match self.template {
            Template::Wide => {
                let (meta_start, meta_end) = &self.secondary;
                format!(
                    "{} [{start}{:<8}{end}] {meta_start}{}:{}:{meta_end} {}",
                    record.timestamp.format(WIDE_TIME_FORMAT),
                    record.severity.as_str(),
                    record.function,
                    record.line,
                    record.message,
                )
            }
            Template::Narrow => format!(
                "{} {start}{code}{end}: {}",
                record.timestamp.format(NARROW_TIME_FORMAT),
                record.message,
            ),
            Template::Level => {
                format!("{start}{}{end}: {}", record.severity.as_str(), record.message)
            }
            Template::Simple => record.message.clone(),
        };
        if let Some(suffix) = self.config.bells.get(&record.severity) {
            line.push_str(suffix);
        }
        if let Some(error) = &record.exception {
            let block = self.render_traceback(error.as_ref());
            if !block.is_empty() {
                line.push('\n');
                line.push_str(&block);
            }
        }
        line
    }

    fn render_traceback(&self, error: &(dyn std::error::Error + 'static)) -> String {
        if !self.config.traceback {
            return String::new();
        }
        if self.config.colors {
            if let Some(colorize) = self.config.colorizer {
                return colorize(error);
            }
        }
        render_plain(error)
    }
}
