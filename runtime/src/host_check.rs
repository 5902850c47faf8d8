//! Host provider tooling detection.
//!
//! Verifies the resolved provider's command-line tooling is invocable before
//! the bring-up touches host network state, so a missing installation fails
//! early with a useful hint instead of midway through reconciliation.

use stacklab_core::error::Result;
use stacklab_core::provider::Provider;

use crate::network::vbox::VboxManage;

/// Information about the provider tooling found on the host.
#[derive(Debug, Clone)]
pub struct ProviderSupport {
    /// Tool that was probed.
    pub tool: String,
    /// Version string reported by the tool.
    pub version: String,
}

/// Check that the provider's host-side tooling is available.
///
/// Returns `Ok(Some(..))` with version details for providers that have
/// host-side tooling to probe, `Ok(None)` for providers that do not, and an
/// error when the tooling exists but cannot be invoked.
pub fn check_provider_tooling(provider: &Provider) -> Result<Option<ProviderSupport>> {
    match provider {
        Provider::VirtualBox => {
            let version = VboxManage::new().version()?;
            tracing::debug!(%version, "VBoxManage available");
            Ok(Some(ProviderSupport {
                tool: "VBoxManage".to_string(),
                version,
            }))
        }
        Provider::Other(_) => Ok(None),
    }
}
