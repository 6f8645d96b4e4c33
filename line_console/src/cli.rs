//! Command-line options

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use line_core::EngineConfig;
use log::LevelFilter;
use services_line_editor::SessionConfig;

#[derive(Parser, Debug)]
#[command(name = "line_console", about = "Menu-driven line editor", version)]
pub struct Cli {
    /// File to load at start; prompted for when omitted
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Keep at most this many undo snapshots
    #[arg(long = "history-limit", value_name = "N")]
    pub history_limit: Option<NonZeroUsize>,

    /// Do not mark modified lines when displaying
    #[arg(long = "no-highlight")]
    pub no_highlight: bool,

    /// Increase logging verbosity (repeat for more detail)
    #[arg(short = 'v', action = ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            engine: EngineConfig {
                history_limit: self.history_limit,
            },
            highlight: !self.no_highlight,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
