use std::process::ExitCode;

use anyhow::{Result, anyhow};
use calculator::cli::commands::{calc, init};
use calculator::cli::{Cli, Commands};
use calculator::{Settings, debug_event, logging};
use clap::Parser;

fn load_settings(cli: &Cli) -> Result<Settings> {
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    settings.map_err(|e| anyhow!("Configuration error: {e}"))
}

fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(&cli)?;
    logging::init_with_config(&settings.logging);
    debug_event!("cli", "command", "{:?}", cli.command);

    let name = cli.name.as_deref().unwrap_or(&settings.calculator.name);

    match cli.command {
        Commands::Sum(operands) => {
            let mut calculator = calc::build(name)?;
            calc::run_sum(&mut calculator, operands, cli.verbose)?;
        }
        Commands::Divide(operands) => {
            let mut calculator = calc::build(name)?;
            calc::run_divide(&mut calculator, operands, cli.verbose)?;
        }
        Commands::Init { force } => {
            let root = std::env::current_dir()?;
            init::run_init(&root, force)?;
        }
        Commands::Config => init::run_config(&settings)?,
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
