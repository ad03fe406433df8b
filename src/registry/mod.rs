// ABOUTME: Confirms a commit-pinned image exists in the container registry.
// ABOUTME: Queries ECR for `sha-<commit>` and checks the tag it reports back.

use crate::config::Tools;
use crate::exec::{CommandRunner, ExecError, Invocation};
use crate::output::{Output, Status};
use crate::types::{CommitSha, ImageTag};
use thiserror::Error;

const IMAGE_NOT_FOUND: &str = "ImageNotFoundException";

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("error reading from registry: {0}")]
    Exec(#[from] ExecError),

    #[error("error reading from registry: {0}")]
    Unreadable(String),

    #[error("no sha tag found for image {tag} in {repository}")]
    NoShaTag { repository: String, tag: String },
}

/// Checks that the image built for a commit has been pushed.
pub struct ImageAvailabilityChecker<'a, R: CommandRunner> {
    runner: &'a R,
    tools: &'a Tools,
    output: &'a Output,
}

impl<'a, R: CommandRunner> ImageAvailabilityChecker<'a, R> {
    pub fn new(runner: &'a R, tools: &'a Tools, output: &'a Output) -> Self {
        Self {
            runner,
            tools,
            output,
        }
    }

    /// Returns true iff the registry holds an image tagged for `expected`
    /// whose embedded commit matches it exactly.
    ///
    /// Read failures and a missing sha tag are errors; a mismatched commit
    /// is `Ok(false)` so the caller can report it against the ref.
    pub async fn verify(
        &self,
        image_repo: &str,
        expected: &CommitSha,
    ) -> Result<bool, RegistryError> {
        let tag = ImageTag::for_commit(expected);
        let tags = self.fetch_image_sha_tags(image_repo, &tag).await?;

        let sha_tag = tags
            .iter()
            .find(|t| t.starts_with("sha"))
            .ok_or_else(|| RegistryError::NoShaTag {
                repository: image_repo.to_string(),
                tag: tag.to_string(),
            })?;

        let matches = ImageTag::embedded_commit(sha_tag)
            .is_some_and(|commit| !expected.as_str().is_empty() && commit == expected.as_str());

        if !matches {
            tracing::warn!(
                expected = %expected,
                found = sha_tag.as_str(),
                "registry tag does not match resolved commit"
            );
        }

        Ok(matches)
    }

    /// List the tags on the image carrying `tag`.
    pub async fn fetch_image_sha_tags(
        &self,
        image_repo: &str,
        tag: &ImageTag,
    ) -> Result<Vec<String>, RegistryError> {
        self.output.status(
            Status::Help,
            "if this next command exits the run, run it manually to check stderr",
        );

        let invocation = Invocation::new(&self.tools.aws)
            .args(["ecr", "describe-images", "--repository-name"])
            .arg(image_repo)
            .arg("--image-ids")
            .arg(format!("imageTag={tag}"))
            .args(["--query", "imageDetails[0].imageTags", "--output", "json"]);

        self.output.status(Status::Run, &invocation.to_string());
        let output = self
            .runner
            .run_checked(&invocation)
            .await
            .map_err(|e| classify_failure(e, image_repo, tag))?;

        parse_tag_listing(&output.stdout)
    }
}

/// ECR reports an unpushed tag as a failed call; that is a missing image,
/// not an unreachable registry.
fn classify_failure(err: ExecError, image_repo: &str, tag: &ImageTag) -> RegistryError {
    match err {
        ExecError::Failed { stderr, .. } if stderr.contains(IMAGE_NOT_FOUND) => {
            RegistryError::NoShaTag {
                repository: image_repo.to_string(),
                tag: tag.to_string(),
            }
        }
        other => RegistryError::Exec(other),
    }
}

/// Parse the JSON tag list printed by `describe-images`.
///
/// An empty body or `null` (no image matched the query) is unreadable, not
/// an empty list: the registry gave no usable answer.
pub fn parse_tag_listing(stdout: &str) -> Result<Vec<String>, RegistryError> {
    let body = stdout.trim();
    if body.is_empty() {
        return Err(RegistryError::Unreadable("empty response".to_string()));
    }

    let tags: Option<Vec<String>> = serde_json::from_str(body)
        .map_err(|e| RegistryError::Unreadable(format!("invalid tag listing: {e}")))?;

    tags.ok_or_else(|| RegistryError::Unreadable("no image details returned".to_string()))
}
