// src/bin/cli.rs
use coin_snapshot::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()?;
    Ok(())
}
