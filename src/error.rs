//! Error type shared by the generator library and the CLI.
//!
//! Every variant is fatal to a generation run. Variants carry a miette
//! diagnostic code so the CLI can render them with help text.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum MacrogenError {
    #[error("invalid depth {depth}: macro depth must be at least 1")]
    #[diagnostic(
        code(macrogen::invalid_depth),
        help("pass a positive integer as the maximum depth")
    )]
    InvalidDepth { depth: i64 },

    #[error("generated MANGROVE_CHILD3 does not match the reference definition")]
    #[diagnostic(
        code(macrogen::self_test),
        help("expected:\n{expected}\nactual:\n{actual}")
    )]
    SelfTestFailure { expected: String, actual: String },

    #[error("i/o error on {}", .path.display())]
    #[diagnostic(code(macrogen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("--check needs a file to compare against, not stdout")]
    #[diagnostic(
        code(macrogen::check_stdout),
        help("pass the path of the generated header instead of `-`")
    )]
    CheckStdout,

    #[error("{} is out of date", .path.display())]
    #[diagnostic(
        code(macrogen::out_of_date),
        help("rerun without --check to regenerate it")
    )]
    OutOfDate { path: PathBuf },
}

impl MacrogenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = MacrogenError> = std::result::Result<T, E>;
