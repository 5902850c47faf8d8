//! Environment configuration for the simulation VM.
//!
//! Everything the bring-up passes through to the virtualization platform is
//! collected in an explicit [`EnvConfig`] value rather than read from ambient
//! globals, so the reconciliation path stays pure and testable.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, StackError};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "stacklab.yaml";

/// Environment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Base box image identifier
    #[serde(default = "default_box_image")]
    pub box_image: String,

    /// Guest hostname
    #[serde(default = "default_hostname")]
    pub hostname: String,

    /// Resource limits
    #[serde(default)]
    pub resources: ResourceConfig,

    /// Host-only network parameters for the simulated public network
    #[serde(default)]
    pub hostonly: HostOnlyConfig,

    /// Provisioning handoff
    #[serde(default)]
    pub provision: ProvisionConfig,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            box_image: default_box_image(),
            hostname: default_hostname(),
            resources: ResourceConfig::default(),
            hostonly: HostOnlyConfig::default(),
            provision: ProvisionConfig::default(),
        }
    }
}

fn default_box_image() -> String {
    "generic/ubuntu2204".to_string()
}

fn default_hostname() -> String {
    "stacklab".to_string()
}

impl EnvConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| {
            StackError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = serde_yaml::from_str(&data)?;
        Ok(config)
    }

    /// Load configuration from the given path, or fall back to the default
    /// search order: `./stacklab.yaml`, then `~/.stacklab/stacklab.yaml`,
    /// then built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let cwd_config = PathBuf::from(CONFIG_FILE);
        if cwd_config.exists() {
            return Self::load(&cwd_config);
        }

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".stacklab").join(CONFIG_FILE);
            if home_config.exists() {
                return Self::load(&home_config);
            }
        }

        Ok(Self::default())
    }
}

/// Resource configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Number of virtual CPUs
    pub vcpus: u32,

    /// Memory in MB
    pub memory_mb: u32,

    /// Disk space in GB
    pub disk_gb: u32,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            vcpus: 4,
            memory_mb: 8192,
            disk_gb: 40,
        }
    }
}

/// Host-only network parameters.
///
/// The guest's simulated "public" network routes through a host-only adapter
/// whose address must sit in the declared subnet. The reconciliation routine
/// converges any adapter already in that subnet toward `address`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostOnlyConfig {
    /// Leading octets identifying the target subnet (e.g. "172.24.4.")
    pub subnet_prefix: String,

    /// Canonical adapter address
    pub address: String,

    /// Network mask applied alongside the canonical address
    pub netmask: String,
}

impl Default for HostOnlyConfig {
    fn default() -> Self {
        Self {
            subnet_prefix: "172.24.4.".to_string(),
            address: "172.24.4.225".to_string(),
            netmask: "255.255.255.0".to_string(),
        }
    }
}

/// Provisioning handoff configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionConfig {
    /// Command that drives the virtualization platform bring-up
    pub command: String,

    /// Arguments passed to the command
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            command: "vagrant".to_string(),
            args: vec!["up".to_string()],
        }
    }
}
