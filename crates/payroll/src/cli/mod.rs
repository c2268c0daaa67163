//! Command-line interface for payroll.
//!
//! Running `payroll` with no subcommand starts the interactive session.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::ConfigCommand;

use crate::config::Config;
use crate::logging::Verbosity;

/// payroll - Interactive payroll record manager
///
/// Keeps an in-memory list of employees (registration number and salary)
/// and manages it through a text menu.
#[derive(Debug, Parser)]
#[command(name = "payroll")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable ANSI colours
    #[arg(long)]
    pub no_color: bool,

    /// Do not clear the screen between menus
    #[arg(long)]
    pub no_clear: bool,

    /// Optional command; the interactive menu runs when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }

    /// Apply display flags on top of loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if self.no_color {
            config.display.color = false;
        }
        if self.no_clear {
            config.display.clear_screen = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "payroll");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_runs_interactive() {
        let cli = parse(&["payroll"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbosity(), Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_flags() {
        assert_eq!(parse(&["payroll", "-q"]).verbosity(), Verbosity::Quiet);
        assert_eq!(parse(&["payroll", "-v"]).verbosity(), Verbosity::Verbose);
        assert_eq!(parse(&["payroll", "-vv"]).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_with_config() {
        let cli = parse(&["payroll", "-c", "/custom/config.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_display_overrides() {
        let cli = parse(&["payroll", "--no-color", "--no-clear"]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert!(!config.display.color);
        assert!(!config.display.clear_screen);
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let cli = parse(&["payroll"]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_config_show() {
        let cli = parse(&["payroll", "config", "show", "--json"]);
        assert!(matches!(
            cli.command,
            Some(Command::Config(ConfigCommand::Show { json: true }))
        ));
    }

    #[test]
    fn test_parse_config_path_with_global_flag() {
        let cli = parse(&["payroll", "config", "path", "-q"]);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Some(Command::Config(ConfigCommand::Path))
        ));
    }

    #[test]
    fn test_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["payroll", "launch"]).is_err());
    }
}
