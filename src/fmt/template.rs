//! Layout selection: wide vs. narrow is decided once per formatter from the
//! terminal width, not re-evaluated per render. A resize after construction
//! does not retarget an already-built formatter.

use std::env;
use terminal_size::{Width, terminal_size};

/// Above this column count the wide layout fits without wrapping.
pub const WIDE_BREAKPOINT: u16 = 110;

/// Assumed width when neither `COLUMNS` nor the terminal answers.
pub const DEFAULT_WIDTH: u16 = 80;

/// The four line layouts a formatter can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Full timestamp, padded level name, function:line metadata, message.
    Wide,
    /// Day-of-month timestamp, four-char severity code, message.
    Narrow,
    /// Level name and message, no timestamp.
    Level,
    /// Message only.
    Simple,
}

/// Inputs to layout selection, captured once at formatter construction.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext {
    pub force_wide: bool,
    pub width: u16,
}

type Predicate = fn(&SelectionContext) -> bool;

/// Ordered `(predicate, template)` rules; the first match wins and anything
/// below the table falls back to the narrow layout.
const SELECTION_RULES: &[(Predicate, Template)] = &[
    (|ctx: &SelectionContext| ctx.force_wide, Template::Wide),
    (
        |ctx: &SelectionContext| ctx.width > WIDE_BREAKPOINT,
        Template::Wide,
    ),
];

/// Walks the selection rules for the given context.
#[must_use]
pub fn select(ctx: &SelectionContext) -> Template {
    SELECTION_RULES
        .iter()
        .find(|(predicate, _)| predicate(ctx))
        .map_or(Template::Narrow, |(_, template)| *template)
}

/// Probes the terminal width: `COLUMNS` wins over the tty query, and a
/// redirected stream falls back to [`DEFAULT_WIDTH`].
#[must_use]
pub fn detect_width() -> u16 {
    if let Ok(columns) = env::var("COLUMNS") {
        if let Ok(width) = columns.parse() {
            return width;
        }
    }
    terminal_size().map_or(DEFAULT_WIDTH, |(Width(width), _)| width)
}
