//! `invest` - CLI for the investment tracker
//!
//! Starts the interactive shell by default; the other subcommands print one
//! screen or export and exit.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::debug;

use investment_tracker::app::{screens, Shell};
use investment_tracker::cli::{Cli, Command, ConfigCommand, ExportFormat};
use investment_tracker::{init_logging, Config};
use investment_tracker_core::InvestmentTracker;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("Failed to load configuration")?;
    debug!(?config, "configuration loaded");

    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => run_shell(&config),
        Command::Dashboard(cmd) => handle_dashboard(&config.build_tracker(), cmd.json),
        Command::List(cmd) => handle_list(&config.build_tracker(), cmd.json),
        Command::Export(cmd) => handle_export(&config.build_tracker(), cmd.format),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn run_shell(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(
        config.build_tracker(),
        config.shell.clone(),
        stdin.lock(),
        stdout.lock(),
    );
    shell.run().context("Shell terminated")?;
    Ok(())
}

fn handle_dashboard(tracker: &InvestmentTracker, json: bool) -> Result<()> {
    if json {
        let dashboard = json!({
            "summary": tracker.dashboard_summary(),
            "type_distribution": tracker.type_distribution(),
            "bank_distribution": tracker.bank_distribution(),
            "monthly_evolution": tracker.monthly_evolution(),
        });
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        println!("{}", screens::render_dashboard(tracker));
    }
    Ok(())
}

fn handle_list(tracker: &InvestmentTracker, json: bool) -> Result<()> {
    if json {
        println!("{}", tracker.export_to_json()?);
    } else {
        println!("{}", screens::render_list(tracker));
    }
    Ok(())
}

fn handle_export(tracker: &InvestmentTracker, format: ExportFormat) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match format {
        ExportFormat::Json => writeln!(stdout, "{}", tracker.export_to_json()?)?,
        ExportFormat::Csv => write!(stdout, "{}", tracker.export_to_csv())?,
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Store]");
                println!("  Seed demo data:     {}", config.store.seed_demo_data);
                println!();
                println!("[Shell]");
                println!("  Prompt:             {:?}", config.shell.prompt);
                println!("  Confirm deletes:    {}", config.shell.confirm_deletes);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
    }
    Ok(())
}
