//! Patchsheet - DMX fixture patch sheet generator

use anyhow::Result;
use clap::Parser;
use patchsheet::{logging_setup, run, AppConfig, Prompter};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "patchsheet", version, about = "Patch DMX fixtures and export a fixture sheet")]
struct Cli {
    /// Config file (default: <config dir>/patchsheet/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory the spreadsheet is saved in
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.output_dir {
        config.output_dir = Some(dir);
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    let _log_guard = logging_setup::init(&config.logging)?;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    run(&mut prompter, &config.resolved_output_dir(), &config.style)?;

    Ok(())
}
