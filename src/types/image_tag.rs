// ABOUTME: Image tags that embed the commit an image was built from.
// ABOUTME: Tags follow the `sha-<commit>` convention used by the build pipeline.

use super::commit::CommitSha;
use std::fmt;

/// Prefix every commit-pinned image tag carries.
pub const IMAGE_TAG_PREFIX: &str = "sha-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTag(String);

impl ImageTag {
    pub fn for_commit(commit: &CommitSha) -> Self {
        Self(format!("{IMAGE_TAG_PREFIX}{commit}"))
    }

    /// Extract the commit embedded in a registry tag.
    ///
    /// Matches the literal `sha-` prefix and trims what follows. Returns
    /// `None` for tags using any other naming scheme.
    pub fn embedded_commit(tag: &str) -> Option<&str> {
        tag.trim_start()
            .strip_prefix(IMAGE_TAG_PREFIX)
            .map(str::trim)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
