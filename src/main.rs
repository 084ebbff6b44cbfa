mod commands;
mod domain;
mod services;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::simulate_cmd::simulate_command;
use clap::{CommandFactory, Parser};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    match args.command {
        command @ Commands::Simulate { .. } => simulate_command(command).await,
        Commands::Completions { shell } => {
            let mut cmd = CliArgs::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        }
    }
}
