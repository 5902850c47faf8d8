//! Provisioning handoff boundary.
//!
//! Once the host network is reconciled (or the provider needs no
//! reconciliation), control passes to the virtualization platform, which
//! owns VM creation, OS boot, and the guest provisioning scripts. That stage
//! is external; this module only defines the seam and the implementation
//! that spawns the configured platform command.

use async_trait::async_trait;

use stacklab_core::config::EnvConfig;
use stacklab_core::error::{Result, StackError};

/// Downstream provisioning stage.
#[async_trait]
pub trait Provisioner: Send + Sync {
    /// Run the platform bring-up for the configured environment.
    async fn provision(&self, config: &EnvConfig) -> Result<()>;
}

/// Spawns the configured platform command with inherited stdio.
pub struct CommandProvisioner;

#[async_trait]
impl Provisioner for CommandProvisioner {
    async fn provision(&self, config: &EnvConfig) -> Result<()> {
        let handoff = &config.provision;
        tracing::info!(
            command = %handoff.command,
            args = ?handoff.args,
            "handing off to provisioning stage"
        );

        let status = tokio::process::Command::new(&handoff.command)
            .args(&handoff.args)
            .status()
            .await
            .map_err(|e| StackError::ToolInvocation {
                command: handoff.command.clone(),
                message: e.to_string(),
                hint: None,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(StackError::Handoff {
                command: handoff.command.clone(),
                status: status.code().unwrap_or(1),
            })
        }
    }
}
