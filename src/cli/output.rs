//! User-facing status lines and diffs, written to stderr so that `-` output
//! on stdout stays clean.

use crate::document::Document;
use difference::{Changeset, Difference};
use std::io::Write;
use std::path::Path;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Reports a successful write.
pub fn print_written(path: &Path, document: &Document) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
    let _ = write!(stderr, "generated");
    let _ = stderr.reset();
    let _ = writeln!(
        stderr,
        " MANGROVE_CHILD1..MANGROVE_CHILD{} -> {}",
        document.max_depth(),
        path.display()
    );
}

/// Reports that `--check` found nothing to change.
pub fn print_up_to_date(path: &Path) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
    let _ = writeln!(stderr, "{} is up to date", path.display());
    let _ = stderr.reset();
}

/// Prints a line diff from the file on disk to the freshly generated text.
pub fn print_diff(path: &Path, existing: &str, generated: &str) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true));
    let _ = writeln!(stderr, "--- {} (on disk)", path.display());
    let _ = writeln!(stderr, "+++ {} (generated)", path.display());
    let _ = stderr.reset();

    let changeset = Changeset::new(existing, generated, "\n");
    write_diff(&mut stderr, &changeset.diffs);
    let _ = stderr.reset();
}

fn write_diff(out: &mut impl WriteColor, diffs: &[Difference]) {
    for diff in diffs {
        match diff {
            Difference::Same(ref x) => {
                let _ = out.set_color(ColorSpec::new().set_dimmed(true));
                let _ = writeln!(out, "@@ {} unchanged line(s) @@", x.lines().count());
            }
            Difference::Add(ref x) => {
                let _ = out.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
                for line in x.lines() {
                    let _ = writeln!(out, "+{}", line);
                }
            }
            Difference::Rem(ref x) => {
                let _ = out.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
                for line in x.lines() {
                    let _ = writeln!(out, "-{}", line);
                }
            }
        }
    }
}
