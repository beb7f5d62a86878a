//! CLI Application - chạy từng pattern demo như một chương trình độc lập

mod commands;

use clap::Parser;
use commands::{Cli, Commands};
use patterns_utils::AppConfig;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    // Initialize logger
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str())
    ).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Command(args) => commands::command::handle(args)?,
        Commands::Observer => commands::observer::handle()?,
        Commands::Singleton(args) => commands::singleton::handle(args, &config)?,
        Commands::Strategy(args) => commands::strategy::handle(args)?,
        Commands::Config => commands::config::handle(&config)?,
    }

    Ok(())
}
