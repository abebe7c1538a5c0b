//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, OutputFlags, PolicyFlags};
use crate::commands;
use crate::domain::topology::DEFAULT_TOPOLOGY_FILE;
use crate::domain::{AddressPolicy, HostsEncoding};

/// Resolve this host in the Clarify cluster topology and run the service installer
#[derive(Parser)]
#[command(
    name = "clarify-launch",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Nodes configuration to read
    #[arg(
        short,
        long,
        visible_alias = "cfg",
        global = true,
        env = "CLARIFY_NODES",
        default_value = DEFAULT_TOPOLOGY_FILE
    )]
    pub config: PathBuf,

    /// How peers without an explicit address are passed (overrides the file)
    #[arg(long, global = true, value_enum)]
    pub address_policy: Option<AddressPolicy>,

    /// How peers are passed after -hosts (overrides the file)
    #[arg(long, global = true, value_enum)]
    pub hosts_encoding: Option<HostsEncoding>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve this node, build the installer command and run it
    Launch,

    /// Show the installer command without running it
    Plan,

    /// Verify this host's identity and interface binding
    Check,

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            config,
            address_policy,
            hosts_encoding,
            json,
            quiet,
            no_color,
            command,
        } = self;
        let app = AppContext::new(AppFlags {
            config,
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            policies: PolicyFlags {
                address_policy,
                hosts_encoding,
            },
        });
        match command {
            Command::Launch => commands::launch::run(&app).await,
            Command::Plan => commands::plan::run(&app),
            Command::Check => commands::check::run(&app),
            Command::Version => {
                commands::version::run(&app);
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
