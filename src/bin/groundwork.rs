//! CLI entry point: parse flags, configure logging, handle signals, run.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use groundwork::verbosity::VerbosityPolicy;
use groundwork::{Cli, FileConfig, Settings, debug, install, signal};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // File config provides presentation defaults; CLI flags override.
    let file = match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };
    let settings = Settings::merge(&cli, &file);

    let policy = VerbosityPolicy::from_verbosity(settings.verbosity);
    let logger = Arc::new(install(&policy, &settings.console_options()));

    // After logging setup so the shutdown message uses the configured channels.
    if let Err(e) = signal::install(Arc::clone(&logger)) {
        eprintln!("error installing signal handlers: {e}");
        return ExitCode::FAILURE;
    }

    debug!(logger, "verbosity {}", settings.verbosity);
    debug!(
        logger,
        "extended {} force_wide {}", settings.extended, settings.force_wide
    );

    // Run.
    println!("Hello World");

    let _ = logger.flush();
    ExitCode::SUCCESS
}
