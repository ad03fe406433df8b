// ABOUTME: Resolves branch, tag, or commit refs against a remote repository.
// ABOUTME: Uses `git ls-remote` so no local clone is needed.

use crate::config::Tools;
use crate::exec::{CommandRunner, ExecError, Invocation};
use crate::types::{CommitSha, CommitShaError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("git ls-remote failed: {0}")]
    Exec(#[from] ExecError),

    #[error("remote returned an invalid commit id for '{reference}': {source}")]
    InvalidCommit {
        reference: String,
        #[source]
        source: CommitShaError,
    },
}

/// Looks up the commit a ref points at on the remote.
pub struct CommitResolver<'a, R: CommandRunner> {
    runner: &'a R,
    tools: &'a Tools,
}

impl<'a, R: CommandRunner> CommitResolver<'a, R> {
    pub fn new(runner: &'a R, tools: &'a Tools) -> Self {
        Self { runner, tools }
    }

    /// Resolve `reference` in `repo`.
    ///
    /// Returns `Ok(None)` when the remote has no matching ref. When several
    /// refs match (e.g. a tag and its peeled `^{}` entry) the last one wins.
    pub async fn resolve(&self, repo: &str, reference: &str) -> Result<Option<CommitSha>, GitError> {
        let invocation = Invocation::new(&self.tools.git)
            .arg("ls-remote")
            .arg(remote_url(repo, &self.tools.git_host))
            .arg(reference);

        let output = self.runner.run_checked(&invocation).await?;

        let commit = parse_ls_remote(&output.stdout)
            .map(|sha| {
                CommitSha::parse(sha).map_err(|source| GitError::InvalidCommit {
                    reference: reference.to_string(),
                    source,
                })
            })
            .transpose()?;

        match &commit {
            Some(sha) => tracing::debug!(reference, commit = %sha, "resolved ref"),
            None => tracing::warn!(reference, repo, "ref not found on remote"),
        }

        Ok(commit)
    }
}

/// Expand `owner/name` shorthand to an SSH remote on `git_host`.
///
/// URLs, scp-style addresses, and local paths are passed through untouched.
pub fn remote_url(repo: &str, git_host: &str) -> String {
    let repo = repo.trim();
    let is_explicit = repo.contains("://")
        || repo.contains('@')
        || repo.starts_with('/')
        || repo.starts_with('.');

    if is_explicit {
        repo.to_string()
    } else {
        format!("git@{git_host}:{repo}.git")
    }
}

/// Pick the commit field from the last non-empty `ls-remote` line.
fn parse_ls_remote(stdout: &str) -> Option<&str> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .last()
        .and_then(|line| line.split('\t').next())
        .map(str::trim)
        .filter(|sha| !sha.is_empty())
}
