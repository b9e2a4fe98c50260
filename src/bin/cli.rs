// src/bin/cli.rs
use clap::Parser;
use douban_top250::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();
    cli::run(cli::Cli::parse())?;
    Ok(())
}
