//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Extract message descriptors and write the catalog
//! - `init`: Initialize intlx configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::ConfigOverrides;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root: where the config file is searched from and sources are
    /// scanned (defaults to the current directory)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn root_dir(&self) -> PathBuf {
        self.source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[derive(Debug, Parser)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Catalog output directory (overrides config file)
    #[arg(long, env = "INTLX_MESSAGES_DIR")]
    pub messages_dir: Option<String>,

    /// Catalog file name without extension (overrides config file)
    #[arg(long)]
    pub file_name: Option<String>,

    /// Only ids under this namespace go into the catalog
    #[arg(long)]
    pub namespace: Option<String>,

    /// Require a description on every descriptor
    #[arg(long)]
    pub enforce_descriptions: bool,

    /// Module the components and functions are imported from
    #[arg(long)]
    pub module_source_name: Option<String>,

    /// Write rewritten sources here, mirroring their relative paths
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Print extracted descriptors as JSON to stdout
    #[arg(long)]
    pub json: bool,
}

impl ExtractArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            messages_dir: self.messages_dir.clone(),
            file_name: self.file_name.clone(),
            namespace: self.namespace.clone(),
            enforce_descriptions: self.enforce_descriptions,
            module_source_name: self.module_source_name.clone(),
        }
    }
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub args: ExtractArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract message descriptors from sources and write the catalog
    Extract(ExtractCommand),
    /// Initialize a new .intlxrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
