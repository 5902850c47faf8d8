//! VBoxManage command boundary for host-only adapters.
//!
//! Wraps the two external invocations the reconciliation needs: listing the
//! host-only adapters and re-addressing one of them. Both are plain,
//! sequential process invocations with captured output; a hang in the tool
//! blocks the bring-up, which is acceptable for an operator-driven workflow.

use std::process::Command;

use stacklab_core::error::{Result, StackError};

use super::{parse_adapters, AdapterRecord};

/// Control surface over the host's host-only adapters.
///
/// The production implementation shells out to VBoxManage; tests substitute
/// an in-memory fake.
pub trait HostOnlyCtl {
    /// List the current host-only adapters, in the tool's output order.
    fn list_adapters(&self) -> Result<Vec<AdapterRecord>>;

    /// Assign `address`/`netmask` to the named adapter.
    fn set_address(&self, adapter: &str, address: &str, netmask: &str) -> Result<()>;
}

/// `VBoxManage`-backed implementation of [`HostOnlyCtl`].
#[derive(Debug, Clone)]
pub struct VboxManage {
    /// Binary to invoke, normally "VBoxManage" resolved from PATH.
    binary: String,
}

impl VboxManage {
    /// Create a wrapper using the `VBoxManage` binary from PATH.
    pub fn new() -> Self {
        Self::with_binary("VBoxManage")
    }

    /// Create a wrapper around a specific binary path.
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Query the tool version, verifying it is invocable at all.
    pub fn version(&self) -> Result<String> {
        let output = Command::new(&self.binary)
            .arg("--version")
            .output()
            .map_err(|e| self.invocation_error("--version", e.to_string()))?;

        if !output.status.success() {
            return Err(self.invocation_error(
                "--version",
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn invocation_error(&self, args: &str, message: String) -> StackError {
        StackError::ToolInvocation {
            command: format!("{} {}", self.binary, args),
            message,
            hint: Some(
                "Is VirtualBox installed and VBoxManage on your PATH?".to_string(),
            ),
        }
    }
}

impl Default for VboxManage {
    fn default() -> Self {
        Self::new()
    }
}

impl HostOnlyCtl for VboxManage {
    fn list_adapters(&self) -> Result<Vec<AdapterRecord>> {
        let output = Command::new(&self.binary)
            .args(["list", "hostonlyifs"])
            .output()
            .map_err(|e| self.invocation_error("list hostonlyifs", e.to_string()))?;

        // Reconciling on partial data is worse than failing the bring-up
        if !output.status.success() {
            return Err(self.invocation_error(
                "list hostonlyifs",
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        Ok(parse_adapters(&String::from_utf8_lossy(&output.stdout)))
    }

    fn set_address(&self, adapter: &str, address: &str, netmask: &str) -> Result<()> {
        let output = Command::new(&self.binary)
            .args(["hostonlyif", "ipconfig", adapter])
            .arg("--ip")
            .arg(address)
            .arg("--netmask")
            .arg(netmask)
            .output()
            .map_err(|e| self.invocation_error("hostonlyif ipconfig", e.to_string()))?;

        if output.status.success() {
            tracing::info!(
                adapter,
                address,
                netmask,
                "host-only adapter reconfigured"
            );
            return Ok(());
        }

        let mut diagnostic = String::from_utf8_lossy(&output.stdout).into_owned();
        diagnostic.push_str(&String::from_utf8_lossy(&output.stderr));

        Err(StackError::Reconfigure {
            adapter: adapter.to_string(),
            status: output.status.code().unwrap_or(1),
            output: diagnostic,
        })
    }
}
