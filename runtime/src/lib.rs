//! Stacklab Runtime - Bring-up engine.
//!
//! This module implements the pre-flight host network reconciliation and the
//! handoff to the virtualization platform's provisioning stage.

pub mod bringup;
pub mod host_check;
pub mod network;
pub mod provision;

// Re-export common types
pub use bringup::{bring_up, BringupReport};
pub use host_check::{check_provider_tooling, ProviderSupport};
pub use network::{parse_adapters, select_adapter, AdapterRecord, TargetState};
pub use network::reconcile::{reconcile, ReconcileOutcome};
pub use network::vbox::{HostOnlyCtl, VboxManage};
pub use provision::{CommandProvisioner, Provisioner};

/// Stacklab Runtime version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
