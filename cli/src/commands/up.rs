//! `stacklab up` command — Bring up the simulation VM.

use std::path::PathBuf;

use clap::Args;

use stacklab_core::config::EnvConfig;
use stacklab_core::provider::Provider;
use stacklab_runtime::network::reconcile::ReconcileOutcome;
use stacklab_runtime::provision::{CommandProvisioner, Provisioner};
use stacklab_runtime::{bring_up, check_provider_tooling, VboxManage};

#[derive(Args)]
pub struct UpArgs {
    /// Virtualization provider (overrides STACKLAB_PROVIDER)
    #[arg(long)]
    pub provider: Option<String>,

    /// Path to the environment configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Reconcile host networking only, skip the provisioning handoff
    #[arg(long)]
    pub no_provision: bool,
}

pub async fn execute(args: UpArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = EnvConfig::load_or_default(args.config.as_deref())?;
    let provider = Provider::resolve_from_env(args.provider.as_deref());

    println!("Bringing up {} ({provider} provider)...", config.hostname);

    if let Some(support) = check_provider_tooling(&provider)? {
        tracing::debug!(tool = %support.tool, version = %support.version, "provider tooling found");
    }

    let ctl = VboxManage::new();
    let provisioner = CommandProvisioner;
    let provisioner: Option<&dyn Provisioner> = if args.no_provision {
        None
    } else {
        Some(&provisioner)
    };

    let report = bring_up(&config, &provider, &ctl, provisioner).await?;

    if let Some(ReconcileOutcome::Reconfigured { ref adapter }) = report.reconcile {
        println!(
            "Host-only adapter {adapter} reconfigured to {}",
            config.hostonly.address
        );
    }

    if report.provisioned {
        println!("{}", config.hostname);
    } else {
        println!("Provisioning skipped");
    }

    Ok(())
}
