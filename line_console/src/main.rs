//! # Line Console
//!
//! Terminal front end for the line editor. Wires stdin/stdout to a
//! `Console` and the filesystem to a `Session`; logs go to stderr.

mod cli;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use services_line_editor::{Console, FsEditorIo, Session};

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_env("RUST_LOG")
        .target(env_logger::Target::Stderr)
        .init();

    let mut session = Session::new(FsEditorIo, cli.session_config());
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());

    console
        .open_initial(&mut session, cli.file.as_deref())
        .context("failed to read the starting file name")?;

    let reason = console
        .run(&mut session)
        .context("terminal I/O failed")?;
    log::info!("session ended: {:?}", reason);

    Ok(())
}
