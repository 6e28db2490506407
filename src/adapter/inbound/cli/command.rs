//! Command-line interface definitions.
//!
//! With no subcommand, `galpao` behaves like `galpao run`: delete the
//! configured row, commit, and print the read-back row.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Inventory row maintenance for the galpao stock database
#[derive(Parser, Debug)]
#[command(name = "galpao")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file [default: ~/.galpao/config.toml if present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the galpao CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Delete the configured row, commit, and print the verify row (default)
    Run(RunArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `galpao check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration and summarise the effective settings.
    Config,
    /// Connect to the database and count inventory rows.
    Connection(ConnectionArgs),
}

/// Subcommands for `galpao config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Override the `idestoques` of the row to delete.
    #[arg(long)]
    pub delete_id: Option<i32>,

    /// Override the `idestoques` of the row to read back.
    #[arg(long)]
    pub verify_id: Option<i32>,

    /// Connection URL (mysql://... or a SQLite path); overrides DATABASE_URL.
    #[arg(long)]
    pub database_url: Option<String>,

    /// Count the rows that would be deleted without deleting them.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `check connection` subcommand.
#[derive(Args, Debug, Default, Clone)]
pub struct ConnectionArgs {
    /// Connection URL (mysql://... or a SQLite path); overrides DATABASE_URL.
    #[arg(long)]
    pub database_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_is_accepted() {
        let cli = Cli::try_parse_from(["galpao"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn parse_run_overrides() {
        let cli = Cli::try_parse_from([
            "galpao",
            "run",
            "--delete-id",
            "7",
            "--verify-id",
            "2",
            "--database-url",
            "sqlite://x.db",
            "--dry-run",
        ])
        .unwrap();
        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(args.delete_id, Some(7));
        assert_eq!(args.verify_id, Some(2));
        assert_eq!(args.database_url.as_deref(), Some("sqlite://x.db"));
        assert!(args.dry_run);
    }

    #[test]
    fn run_args_defaults() {
        let cli = Cli::try_parse_from(["galpao", "run"]).unwrap();
        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected run command");
        };
        assert!(args.delete_id.is_none());
        assert!(args.verify_id.is_none());
        assert!(!args.dry_run);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["galpao", "check", "config", "--config", "c.toml", "-vv"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Some(Commands::Check(CheckCommand::Config))
        ));
    }

    #[test]
    fn parse_color_never() {
        let cli = Cli::try_parse_from(["galpao", "--color", "never"]).unwrap();
        assert!(matches!(cli.color, ColorChoice::Never));
    }

    #[test]
    fn rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["galpao", "run", "--delete-id", "abc"]).is_err());
    }

    #[test]
    fn parse_config_show_and_connection() {
        let cli = Cli::try_parse_from(["galpao", "config", "show"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Config(ConfigCommand::Show))));

        let cli = Cli::try_parse_from(["galpao", "check", "connection", "--database-url", "a.db"])
            .unwrap();
        let Some(Commands::Check(CheckCommand::Connection(args))) = cli.command else {
            panic!("expected check connection");
        };
        assert_eq!(args.database_url.as_deref(), Some("a.db"));
    }
}
