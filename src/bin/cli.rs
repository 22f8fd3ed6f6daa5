// src/bin/cli.rs
use clap::Parser;
use cricdex::cli::{ self, Cli };

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cricdex::log::init("warn");
    cli::run(Cli::parse())
}
