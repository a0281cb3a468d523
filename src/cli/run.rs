//! Dispatch a parsed command line to its command handler.

use std::path::Path;

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, extract::extract, init::init},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Init) => init(Path::new(".")),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            bail!("Serve command should be handled before run()")
        }
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
