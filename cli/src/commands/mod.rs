//! CLI command definitions and dispatch.

mod status;
mod up;
mod version;

use clap::{Parser, Subcommand};

/// Stacklab — local dev VM bring-up for a multi-node cloud simulation.
#[derive(Parser)]
#[command(name = "stacklab", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Command {
    /// Reconcile host networking and bring up the simulation VM
    Up(up::UpArgs),
    /// Show host-only adapter state
    Status(status::StatusArgs),
    /// Show version information
    Version(version::VersionArgs),
}

/// Dispatch a parsed CLI to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Up(args) => up::execute(args).await,
        Command::Status(args) => status::execute(args).await,
        Command::Version(args) => version::execute(args).await,
    }
}
