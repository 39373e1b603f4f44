use clap::Parser;
use mangrove_macrogen::cli::{self, MacrogenArgs};

fn main() -> miette::Result<()> {
    let args = MacrogenArgs::parse();
    cli::init_logging(&args);
    cli::run(&args)?;
    Ok(())
}
