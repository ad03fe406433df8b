// ABOUTME: Program names for the external tools the rollout drives.
// ABOUTME: Overridable from mass.yml so wrappers or pinned binaries can be used.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Tools {
    /// Source-control client used for `ls-remote`.
    pub git: String,
    /// Registry CLI used for `ecr describe-images`.
    pub aws: String,
    /// Deployment controller client.
    pub mass: String,
    /// Host that `owner/name` repositories are cloned from.
    pub git_host: String,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            git: "git".to_string(),
            aws: "aws".to_string(),
            mass: "mass".to_string(),
            git_host: "github.com".to_string(),
        }
    }
}
