//! Error types for gitcfg-core

/// Result type for gitcfg-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the orchestration layer
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A scan root was blank
    #[error("Root path cannot be empty")]
    EmptyRoot,

    /// A repository id does not match any scanned repository
    #[error("Repository not found: {0}")]
    RepositoryNotFound(String),

    /// Engine error from gitcfg-git
    #[error(transparent)]
    Git(#[from] gitcfg_git::Error),
}
