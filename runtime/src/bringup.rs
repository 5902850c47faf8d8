//! Bring-up orchestration.
//!
//! One bring-up is strictly sequential: resolve the provider, reconcile the
//! host-only network when that provider manages one, then hand control to
//! the provisioning stage. A fatal reconciliation error aborts before the
//! provisioner is ever invoked; every other terminal state passes through.

use stacklab_core::config::EnvConfig;
use stacklab_core::error::Result;
use stacklab_core::provider::Provider;

use crate::network::reconcile::{reconcile, ReconcileOutcome};
use crate::network::vbox::HostOnlyCtl;
use crate::provision::Provisioner;

/// What one bring-up actually did.
#[derive(Debug)]
pub struct BringupReport {
    /// Reconciliation outcome, `None` when the provider needed none.
    pub reconcile: Option<ReconcileOutcome>,

    /// Whether the provisioning stage was handed control.
    pub provisioned: bool,
}

/// Run one bring-up: reconcile host networking, then hand off.
///
/// Pass `provisioner: None` to stop after reconciliation (the `--no-provision`
/// path). The host-only control surface is only consulted when the provider
/// manages host-only adapters.
pub async fn bring_up(
    config: &EnvConfig,
    provider: &Provider,
    ctl: &dyn HostOnlyCtl,
    provisioner: Option<&dyn Provisioner>,
) -> Result<BringupReport> {
    let outcome = if provider.manages_hostonly() {
        Some(reconcile(ctl, &config.hostonly)?)
    } else {
        tracing::debug!(
            provider = %provider,
            "provider does not manage host-only adapters, skipping reconciliation"
        );
        None
    };

    let provisioned = match provisioner {
        Some(provisioner) => {
            provisioner.provision(config).await?;
            true
        }
        None => {
            tracing::info!("provisioning stage skipped");
            false
        }
    };

    Ok(BringupReport {
        reconcile: outcome,
        provisioned,
    })
}
