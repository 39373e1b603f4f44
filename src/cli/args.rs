//! Command-line arguments for `mangrove-macrogen`.

use crate::depth::MAX_BSON_DEPTH;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Generates the MANGROVE_CHILD* nested-field macros.
#[derive(Debug, Parser)]
#[command(
    name = "mangrove-macrogen",
    version,
    about = "Generates `max_depth` levels of the MANGROVE_CHILD* macro and writes them \
             to `outfile`."
)]
pub struct MacrogenArgs {
    /// File to write the generated header to, or `-` for stdout.
    #[arg(required = true)]
    pub outfile: PathBuf,

    /// Deepest MANGROVE_CHILD variant to generate. Defaults to BSON's nesting limit.
    #[arg(allow_negative_numbers = true, default_value_t = MAX_BSON_DEPTH as i64)]
    pub max_depth: i64,

    /// Compare against the existing `outfile` instead of writing it.
    #[arg(long)]
    pub check: bool,

    /// Log more (repeat for debug output).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl MacrogenArgs {
    pub fn writes_to_stdout(&self) -> bool {
        self.outfile.as_os_str() == "-"
    }
}
