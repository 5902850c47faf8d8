//! Stacklab CLI entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use stacklab_cli::commands::{dispatch, Cli};
use stacklab_core::StackError;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = dispatch(cli).await {
        eprintln!("Error: {e}");
        let status = match e.downcast_ref::<StackError>() {
            Some(err) => {
                if let Some(hint) = err.hint() {
                    eprintln!("{hint}");
                }
                err.exit_status()
            }
            None => 1,
        };
        std::process::exit(status);
    }
}
