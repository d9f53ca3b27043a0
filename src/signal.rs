//! Graceful exit on SIGINT and SIGTERM.
//!
//! A watcher thread owns the signal iterator; on delivery it logs the exit,
//! flushes, and terminates the process with `128 + signum` (130 for SIGINT,
//! 143 for SIGTERM). Normal completion never reaches this path.

use std::process;
use std::sync::Arc;
use std::thread;

use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::iterator::Signals;

use crate::error::Error;
use crate::logger::Logger;

/// Registers the watcher. Call once at startup, after logging is set up so
/// the shutdown message goes through the configured channels.
///
/// # Errors
/// I/O errors from registering the signal iterator or spawning the thread.
pub fn install(logger: Arc<Logger>) -> Result<(), Error> {
    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    // The watcher lives for the rest of the process; its handle is never joined.
    let _watcher = thread::Builder::new()
        .name("signal-watcher".to_string())
        .spawn(move || {
            if let Some(signum) = signals.forever().next() {
                let exit_code = 128 + signum;
                logger.info(module_path!(), line!(), format!("QUITTING {exit_code}"));
                let _ = logger.flush();
                process::exit(exit_code);
            }
        })?;
    Ok(())
}
