//! Error types for gitcfg-git

/// Result type for gitcfg-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving configuration or topology
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A concrete path was required but the caller supplied a blank one
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The `git` executable is not on PATH
    #[error("git executable not found on PATH")]
    GitNotInstalled,

    /// A git invocation ran but exited non-zero
    #[error("git {} failed: {stderr}", args.join(" "))]
    ExternalTool { args: Vec<String>, stderr: String },

    /// A plumbing query succeeded but returned an unusable answer
    #[error("Malformed topology: {message}")]
    MalformedTopology { message: String },

    /// The caller's deadline fired during an external invocation
    #[error("Resolution cancelled before completion")]
    Cancelled,

    /// I/O failure talking to the git subprocess
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn malformed_topology(message: impl Into<String>) -> Self {
        Self::MalformedTopology {
            message: message.into(),
        }
    }
}
