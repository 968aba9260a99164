mod cli;
mod commands;
mod config;
mod logging;
mod output;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;
use crate::commands::Settings;
use crate::config::TaqvimConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = TaqvimConfig::load(cli.config.as_deref())?;
    let settings = Settings::resolve(&config, cli.locale, cli.format);
    commands::run(cli.command, &settings)
}
