//! The `mangrove-macrogen` command line.
//!
//! Parses arguments, generates the whole document in memory, then either
//! writes it out in one piece or compares it with what is already on disk.

use crate::depth::Depth;
use crate::document::{Document, GeneratorConfig};
use crate::error::{MacrogenError, Result};
use crate::sink::{FileSink, OutputSink, StdoutSink};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod args;
pub mod output;

pub use args::MacrogenArgs;

/// Installs the stderr log subscriber. `RUST_LOG` wins over the flags.
pub fn init_logging(args: &MacrogenArgs) {
    let level = match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runs one generation with the parsed arguments.
pub fn run(args: &MacrogenArgs) -> Result<()> {
    if args.check && args.writes_to_stdout() {
        return Err(MacrogenError::CheckStdout);
    }
    let max_depth = Depth::try_from(args.max_depth)?;
    let document = Document::generate(&GeneratorConfig::new(max_depth))?;
    let text = document.render();

    if args.check {
        return check(&args.outfile, &text, args.quiet);
    }

    if args.writes_to_stdout() {
        return StdoutSink.write_document(&text);
    }

    FileSink::new(&args.outfile).write_document(&text)?;
    if !args.quiet {
        output::print_written(&args.outfile, &document);
    }
    Ok(())
}

fn check(path: &Path, generated: &str, quiet: bool) -> Result<()> {
    let existing = match fs::read_to_string(path) {
        Ok(existing) => existing,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "no existing file to check against");
            String::new()
        }
        Err(e) => return Err(MacrogenError::io(path, e)),
    };

    if existing == generated {
        if !quiet {
            output::print_up_to_date(path);
        }
        return Ok(());
    }

    if !quiet {
        output::print_diff(path, &existing, generated);
    }
    Err(MacrogenError::OutOfDate {
        path: path.to_path_buf(),
    })
}
