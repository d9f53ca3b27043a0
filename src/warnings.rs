//! Process-wide advisory warning toggle.
//!
//! Deliberately global, unlike the logging context: suppression applies to
//! the whole process, not to one logger handle. The router sets it from the
//! verbosity policy.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

static SUPPRESSED: AtomicBool = AtomicBool::new(false);

pub fn set_suppressed(suppressed: bool) {
    SUPPRESSED.store(suppressed, Ordering::SeqCst);
}

#[must_use]
pub fn is_suppressed() -> bool {
    SUPPRESSED.load(Ordering::SeqCst)
}

/// Writes `warning: <message>` to stderr unless suppression is active.
/// Advisory warnings bypass the logging context so they work before setup.
pub fn warn(message: &str) {
    if !is_suppressed() {
        let _ = writeln!(io::stderr(), "warning: {message}");
    }
}
