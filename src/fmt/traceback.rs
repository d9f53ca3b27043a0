//! Traceback rendering for exception-carrying records.
//!
//! Colorized rendering is an optional capability resolved once at
//! configuration time; when no colorizer is configured the plain renderer
//! below is used.

/// Resolved at configuration time, never re-probed per call.
pub type TracebackRenderer = fn(&(dyn std::error::Error + 'static)) -> String;

/// Walks the `source()` chain: the error itself first, one `caused by:` line
/// per underlying cause.
#[must_use]
pub fn render_plain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut out = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        out.push_str("\ncaused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
