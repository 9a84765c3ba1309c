/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Main executable for zeff-rs

use clap::Parser;
use zeff_rs::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    print!("{}", run(&cli)?);

    Ok(())
}
