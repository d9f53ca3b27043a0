//! Command-line interface using Clap.

use std::io::IsTerminal;

use clap::{ArgAction, Parser};
use serde::Deserialize;

/// Tri-state for tty-dependent presentation features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum When {
    Never,
    Always,
    Auto,
}

impl When {
    /// `auto` resolves against whether the output is a terminal.
    #[must_use]
    pub const fn resolve(self, tty: bool) -> bool {
        match self {
            Self::Never => false,
            Self::Always => true,
            Self::Auto => tty,
        }
    }

    /// Both color and bell auto-detection key off stdout being a tty.
    #[must_use]
    pub fn resolve_stdout(self) -> bool {
        self.resolve(std::io::stdout().is_terminal())
    }
}

/// Example program. Description goes here.
#[derive(Debug, Parser)]
#[command(name = "groundwork", version)]
pub struct Cli {
    /// Audible alerts on warnings and errors if tty (default: auto)
    #[arg(short = 'b', long, value_name = "WHEN", value_enum)]
    pub bell: Option<When>,

    /// Print colors in log statements and output (default: auto)
    #[arg(short = 'c', long, value_name = "WHEN", value_enum)]
    pub color: Option<When>,

    /// Timestamps and more, a second -e forces wide formatting
    #[arg(short = 'e', long = "extended-output", action = ArgAction::Count)]
    pub extended: u8,

    /// Use the wide layout regardless of terminal width
    #[arg(long)]
    pub force_wide: bool,

    /// Quiet output, disable logging entirely
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode, multiple -v increase the verbosity
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Quiet collapses to -1; otherwise the count of `-v` occurrences.
    #[must_use]
    pub const fn verbosity(&self) -> i32 {
        if self.quiet { -1 } else { self.verbose as i32 }
    }
}
