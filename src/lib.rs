//! Genid library crate
//!
//! This crate provides the core functionality for the `genid` CLI: `token`
//! (random id generation) and `clipboard` (handing the id to `wl-copy`). The
//! binary `src/main.rs` calls `genid_lib::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//! - `run_with()` — the same flow with the generator, clipboard and output
//!   supplied by the caller.

pub mod clipboard;
pub mod token;

use std::io::{self, Write};

use clap::{ArgAction, Parser};
use rand::Rng;
use tracing_subscriber::{EnvFilter, fmt};

use crate::clipboard::{Clipboard, WlCopy, publish};
use crate::token::TokenGenerator;

/// Line printed to stdout when the clipboard helper fails.
pub const CLIPBOARD_WARNING: &str = "Warning: needs wl-copy to copy to clipboard";

/// Command line options. Running with none prints one id and copies it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of ids to print; the first is copied
    #[arg(short = 'n', long = "count", default_value_t = 1u64,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub count: u64,

    /// Print only, do not touch the clipboard
    #[arg(long = "no-copy", action = ArgAction::SetTrue)]
    pub no_copy: bool,
}

/// Run the Genid CLI.
///
/// Parses the process arguments, sets up stderr logging and prints ids to
/// stdout, copying the first one with `wl-copy`. A clipboard failure only
/// prints [`CLIPBOARD_WARNING`]; the returned error is reserved for failures
/// writing to stdout.
///
/// ```no_run
/// genid_lib::run().unwrap(); // called from src/main.rs
/// ```
pub fn run() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let mut generator = TokenGenerator::new();
    let mut clipboard = WlCopy::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(&cli, &mut generator, &mut clipboard, &mut out)
}

/// Core of [`run`] with every collaborator injected.
pub fn run_with<R, C, W>(
    cli: &Cli,
    generator: &mut TokenGenerator<R>,
    clipboard: &mut C,
    out: &mut W,
) -> io::Result<()>
where
    R: Rng,
    C: Clipboard + ?Sized,
    W: Write,
{
    let first = generator.generate();
    writeln!(out, "{}", first)?;
    for _ in 1..cli.count {
        writeln!(out, "{}", generator.generate())?;
    }
    out.flush()?;

    if !cli.no_copy && publish(clipboard, &first).is_err() {
        writeln!(out, "{}", CLIPBOARD_WARNING)?;
    }
    Ok(())
}

fn init_logging() {
    // stdout carries the ids; diagnostics stay on stderr.
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();
}
