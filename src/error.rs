//! Faults raised by the dispatcher and the built-in subcommands.
//!
//! Anything that reaches the top-level boundary is an `anyhow::Error`. Errors
//! that carry a [`Fault`] somewhere in their chain are expected failures and are
//! reported as `fatal: ...`; everything else is treated as a defect.

use thiserror::Error;

/// Stable discriminant for [`Fault`] used by the reporting boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// Explicitly raised, expected failure.
    Domain,
    /// Failure talking to a remote; wraps the transport error.
    Transport,
    /// Failure inside the repository layer.
    Repository,
}

#[derive(Debug, Error)]
pub enum Fault {
    /// Expected failure with a user-facing message.
    #[error("{0}")]
    Die(String),

    /// Communication failure. The source is the underlying transport error.
    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: git2::Error,
    },

    /// Error reported by libgit2 while reading or opening a repository.
    #[error("{}", .0.message())]
    Repository(git2::Error),
}

impl Fault {
    pub fn die(message: impl Into<String>) -> Self {
        Self::Die(message.into())
    }

    pub fn transport(message: impl Into<String>, source: git2::Error) -> Self {
        Self::Transport {
            message: message.into(),
            source,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> FaultKind {
        match self {
            Self::Die(_) => FaultKind::Domain,
            Self::Transport { .. } => FaultKind::Transport,
            Self::Repository(_) => FaultKind::Repository,
        }
    }

    /// Message of the innermost cause, if this fault wraps one.
    #[must_use]
    pub fn cause_message(&self) -> Option<&str> {
        match self {
            Self::Transport { source, .. } => Some(source.message()),
            Self::Die(_) | Self::Repository(_) => None,
        }
    }
}

impl From<git2::Error> for Fault {
    fn from(err: git2::Error) -> Self {
        Self::Repository(err)
    }
}
