//! `payroll` - interactive payroll record manager
//!
//! With no subcommand this runs the menu session on the terminal.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;

use clap::Parser;
use tracing::error;

use payroll::cli::{Cli, Command, ConfigCommand};
use payroll::{init_logging, Config, Console, Roster, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let mut config = Config::load_from(cli.config.clone())?;
    cli.apply_overrides(&mut config);

    match cli.command {
        None => run_session(&config),
        Some(Command::Config(config_cmd)) => handle_config(&config, config_cmd),
    }
}

fn run_session(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let roster = Roster::from_config(&config.roster)?;
    let console = Console::new(io::stdin().lock(), io::stdout().lock(), config.console_options());
    let mut session = Session::new(roster, console);

    if let Err(e) = session.run() {
        error!("Session aborted: {e}");
        return Err(e.into());
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Roster]");
                println!("  Seed enabled:       {}", config.roster.seed_enabled);
                println!("  Seed registration:  {}", config.roster.seed_registration);
                println!("  Seed salary:        {}", config.roster.seed_salary);
                println!();
                println!("[Display]");
                println!("  Color:              {}", config.display.color);
                println!("  Clear screen:       {}", config.display.clear_screen);
                println!();
                println!("[Input]");
                println!("  Max attempts:       {}", config.input.max_attempts);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_file(&path) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
