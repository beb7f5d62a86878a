//! Command demo

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use patterns_core::command::CommandRegistry;

#[derive(Args, Debug)]
pub struct CommandArgs {
    /// Command name (CreateOrder, UpdateQuantity, ShipOrder)
    pub name: Option<String>,

    /// Arguments passed to the command, e.g. the new quantity
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 1..)]
    pub args: Vec<String>,
}

pub fn handle(args: CommandArgs) -> Result<()> {
    let registry = CommandRegistry::with_defaults();
    let mut stdout = io::stdout().lock();
    run(&registry, args, &mut stdout)
}

fn run(registry: &CommandRegistry, args: CommandArgs, out: &mut dyn Write) -> Result<()> {
    let Some(name) = args.name else {
        registry.write_usage(out)?;
        return Ok(());
    };

    let mut argv = vec![name];
    argv.extend(args.args);

    let command = registry.parse(&argv);
    log::debug!("Resolved '{}' to {}", argv[0], command.name());
    command.execute(out)?;
    Ok(())
}
