//! Maps a severity to its display code and ANSI color pair.
//!
//! The table is fixed process-wide constant data. Lookups are total: a
//! severity missing from the table yields no color and the `????` code.

use crate::severity::Severity;

/// `(severity, SGR start code, short display code)` rows. The end code is
/// always a full reset.
const SEVERITY_STYLES: [(Severity, u8, &str); 5] = [
    (Severity::Critical, 91, "CRIT"),
    (Severity::Error, 91, "ERRO"),
    (Severity::Warning, 33, "WARN"),
    (Severity::Info, 36, "INFO"),
    (Severity::Debug, 95, "DBUG"),
];

const END_CODE: u8 = 0;

/// Metadata fields (function name, line number) use dim / reset-dim rather
/// than a per-severity color.
const SECONDARY_CODES: (u8, u8) = (2, 22);

fn escape(code: u8) -> String {
    format!("\x1b[{code}m")
}

/// Pure lookup: `(start_color, end_color, short_code)` for a severity.
///
/// With colors disabled both escape strings are empty regardless of severity;
/// the short code is returned either way.
#[must_use]
pub fn classify(severity: Severity, colors: bool) -> (String, String, &'static str) {
    SEVERITY_STYLES
        .iter()
        .find(|(entry, _, _)| *entry == severity)
        .map_or_else(
            || (String::new(), String::new(), "????"),
            |(_, start, code)| {
                if colors {
                    (escape(*start), escape(END_CODE), *code)
                } else {
                    (String::new(), String::new(), *code)
                }
            },
        )
}

/// The secondary color pair for metadata, independent of severity.
#[must_use]
pub fn secondary(colors: bool) -> (String, String) {
    if colors {
        (escape(SECONDARY_CODES.0), escape(SECONDARY_CODES.1))
    } else {
        (String::new(), String::new())
    }
}
