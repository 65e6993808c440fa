use thiserror::Error;

/// Unified error type for git-semver operations
#[derive(Error, Debug)]
pub enum GitSemverError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Environment error: {0}")]
    Environment(String),

    #[error("{0} is not a git repository")]
    NotARepository(String),

    #[error("no source branch found")]
    NoSourceBranch,

    #[error("Branch resolution error: {0}")]
    Branch(String),

    #[error("Version parsing error: {0}")]
    Parse(String),

    #[error("Version overflow: {0}")]
    Overflow(String),

    #[error("Git command failed: {0}")]
    Git(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-semver
pub type Result<T> = std::result::Result<T, GitSemverError>;

impl GitSemverError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitSemverError::Config(msg.into())
    }

    /// Create an environment error with context
    pub fn environment(msg: impl Into<String>) -> Self {
        GitSemverError::Environment(msg.into())
    }

    /// Create a branch resolution error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        GitSemverError::Branch(msg.into())
    }

    /// Create a version parsing error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        GitSemverError::Parse(msg.into())
    }

    /// Create an overflow error naming the overflowed component
    pub fn overflow(msg: impl Into<String>) -> Self {
        GitSemverError::Overflow(msg.into())
    }

    /// Create an error from a failed git invocation
    pub fn git(msg: impl Into<String>) -> Self {
        GitSemverError::Git(msg.into())
    }
}
