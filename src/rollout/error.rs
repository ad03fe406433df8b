// ABOUTME: Rollout error types with SNAFU pattern.
// ABOUTME: Every variant aborts the invocation; kind() names the failure category.

use snafu::Snafu;
use std::fmt;

use crate::controller::ControllerError;
use crate::git::GitError;
use crate::prompt::PromptError;
use crate::registry::RegistryError;
use crate::types::CommitSha;

/// Unified error for the deploy and patch workflows.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RolloutError {
    #[snafu(display("could not resolve ref '{reference}': {source}"))]
    Resolve { reference: String, source: GitError },

    #[snafu(display("ref '{reference}' not found in {repo}"))]
    Unresolved { reference: String, repo: String },

    #[snafu(display("{source}"))]
    Registry { source: RegistryError },

    #[snafu(display("image missing for ref '{reference}' (sha: {commit})"))]
    ImageMismatch { reference: String, commit: CommitSha },

    #[snafu(display("{source}"))]
    Prompt { source: PromptError },

    #[snafu(display("{source}"))]
    Controller { source: ControllerError },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RolloutErrorKind {
    /// The ref does not exist on the remote, or resolved to garbage.
    ResolutionFailure,
    /// The registry could not be reached or its answer could not be read.
    RegistryReadError,
    /// No sha-tagged image exists for the commit.
    ImageMissing,
    /// The image found carries a different commit.
    ImageMismatch,
    /// A secret value could not be read.
    PromptFailed,
    /// An external command failed to start or exited non-zero.
    ExternalCallFailure,
}

impl RolloutError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> RolloutErrorKind {
        match self {
            RolloutError::Resolve { source, .. } => match source {
                GitError::Exec(_) => RolloutErrorKind::ExternalCallFailure,
                GitError::InvalidCommit { .. } => RolloutErrorKind::ResolutionFailure,
            },
            RolloutError::Unresolved { .. } => RolloutErrorKind::ResolutionFailure,
            RolloutError::Registry { source } => match source {
                RegistryError::Exec(_) | RegistryError::Unreadable(_) => {
                    RolloutErrorKind::RegistryReadError
                }
                RegistryError::NoShaTag { .. } => RolloutErrorKind::ImageMissing,
            },
            RolloutError::ImageMismatch { .. } => RolloutErrorKind::ImageMismatch,
            RolloutError::Prompt { .. } => RolloutErrorKind::PromptFailed,
            RolloutError::Controller { .. } => RolloutErrorKind::ExternalCallFailure,
        }
    }

    /// Whether the run stopped before any controller call was made.
    pub fn aborted_before_rollout(&self) -> bool {
        !matches!(self, RolloutError::Controller { .. })
    }
}

impl fmt::Display for RolloutErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RolloutErrorKind::ResolutionFailure => "resolution failure",
            RolloutErrorKind::RegistryReadError => "registry read error",
            RolloutErrorKind::ImageMissing => "image missing",
            RolloutErrorKind::ImageMismatch => "image mismatch",
            RolloutErrorKind::PromptFailed => "prompt failed",
            RolloutErrorKind::ExternalCallFailure => "external call failure",
        };
        f.write_str(label)
    }
}

impl From<ControllerError> for RolloutError {
    fn from(source: ControllerError) -> Self {
        RolloutError::Controller { source }
    }
}

impl From<PromptError> for RolloutError {
    fn from(source: PromptError) -> Self {
        RolloutError::Prompt { source }
    }
}

impl From<RegistryError> for RolloutError {
    fn from(source: RegistryError) -> Self {
        RolloutError::Registry { source }
    }
}
