use thiserror::Error;

/// Stacklab error types
#[derive(Error, Debug)]
pub enum StackError {
    /// An external tool could not be invoked, or its output was unusable
    #[error("Failed to run {command}: {message}")]
    ToolInvocation {
        command: String,
        message: String,
        hint: Option<String>,
    },

    /// Host-only adapter reconfiguration exited non-zero
    #[error("Reconfiguration of host-only adapter {adapter} failed with status {status}")]
    Reconfigure {
        adapter: String,
        status: i32,
        output: String,
    },

    /// The provisioning handoff command exited non-zero
    #[error("Provisioning stage `{command}` exited with status {status}")]
    Handoff { command: String, status: i32 },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl StackError {
    /// Exit status the process should terminate with for this error.
    ///
    /// Reconfiguration and handoff failures propagate the external tool's
    /// own status so calling tooling can distinguish the failure class;
    /// everything else exits 1.
    pub fn exit_status(&self) -> i32 {
        match self {
            StackError::Reconfigure { status, .. } => *status,
            StackError::Handoff { status, .. } => *status,
            _ => 1,
        }
    }

    /// Remediation hint to print after the error message, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            StackError::ToolInvocation { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for StackError {
    fn from(err: serde_yaml::Error) -> Self {
        StackError::Config(err.to_string())
    }
}

/// Result type alias for stacklab operations
pub type Result<T> = std::result::Result<T, StackError>;
