//! CLI Commands

pub mod command;
pub mod config;
pub mod observer;
pub mod singleton;
pub mod strategy;

use clap::{Parser, Subcommand};

/// Design pattern demos: Command, Observer, Singleton, Strategy
#[derive(Parser, Debug)]
#[command(name = "patterns")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an order command by name (no name prints usage)
    Command(command::CommandArgs),

    /// Run the KPI dashboard observer demo
    Observer,

    /// Run the four singleton logger variants
    Singleton(singleton::SingletonArgs),

    /// Calculate shipping costs with interchangeable strategies
    Strategy(strategy::StrategyArgs),

    /// Show configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_command_with_args() {
        let cli =
            Cli::try_parse_from(["patterns", "command", "UpdateQuantity", "10", "-x"]).unwrap();
        match cli.command {
            Commands::Command(args) => {
                assert_eq!(args.name.as_deref(), Some("UpdateQuantity"));
                assert_eq!(args.args, vec!["10", "-x"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_bare_command() {
        let cli = Cli::try_parse_from(["patterns", "command"]).unwrap();
        assert!(matches!(cli.command, Commands::Command(ref args) if args.name.is_none()));
    }

    #[test]
    fn test_parse_strategy_shipper() {
        let cli = Cli::try_parse_from(["patterns", "strategy", "--shipper", "ups"]).unwrap();
        match cli.command {
            Commands::Strategy(args) => assert_eq!(args.shipper, Some(strategy::ShipperArg::Ups)),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
