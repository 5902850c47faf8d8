//! Virtualization provider resolution.
//!
//! The provider decides whether the host-only network reconciliation runs at
//! all: only VirtualBox manages host-only adapters on the host side. The
//! identifier comes from an explicit flag, the `STACKLAB_PROVIDER`
//! environment variable, or the built-in fallback, in that order.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Environment variable consulted when no explicit provider flag is given.
pub const PROVIDER_ENV: &str = "STACKLAB_PROVIDER";

/// Fallback provider when neither flag nor environment is set.
pub const DEFAULT_PROVIDER: &str = "virtualbox";

/// Virtualization provider in effect for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provider {
    /// VirtualBox — the only backend with host-only adapters to reconcile.
    VirtualBox,
    /// Any other backend identifier; passes through with no host-side work.
    Other(String),
}

impl Provider {
    /// Whether this provider manages host-only network adapters.
    pub fn manages_hostonly(&self) -> bool {
        matches!(self, Provider::VirtualBox)
    }

    /// Resolve a provider from the explicit flag and environment value.
    ///
    /// Priority: flag, then environment, then [`DEFAULT_PROVIDER`]. Never
    /// fails; unrecognized identifiers become [`Provider::Other`].
    pub fn resolve(flag: Option<&str>, env: Option<&str>) -> Self {
        Provider::from(flag.or(env).unwrap_or(DEFAULT_PROVIDER))
    }

    /// Resolve a provider using the process environment.
    pub fn resolve_from_env(flag: Option<&str>) -> Self {
        let env = std::env::var(PROVIDER_ENV).ok();
        let provider = Self::resolve(flag, env.as_deref());
        tracing::debug!(provider = %provider, "resolved virtualization provider");
        provider
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::VirtualBox => write!(f, "virtualbox"),
            Provider::Other(id) => write!(f, "{}", id),
        }
    }
}

impl From<&str> for Provider {
    fn from(s: &str) -> Self {
        match s {
            "virtualbox" => Provider::VirtualBox,
            other => Provider::Other(other.to_string()),
        }
    }
}

impl FromStr for Provider {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Provider::from(s))
    }
}
