// ABOUTME: Triggers controller deploys for a single app.
// ABOUTME: Optionally pins the app's image tag to a commit before deploying.

use super::patcher::{ConfigPatcher, ConfigUpdate};
use super::{Controller, ControllerError};
use crate::exec::CommandRunner;
use crate::types::{AppName, CommitSha, ConfigKey, ImageTag, ResourceName, Target};

pub struct DeploymentDriver<'c, 'a, R: CommandRunner> {
    controller: &'c Controller<'a, R>,
}

impl<'c, 'a, R: CommandRunner> DeploymentDriver<'c, 'a, R> {
    pub fn new(controller: &'c Controller<'a, R>) -> Self {
        Self { controller }
    }

    /// Deploy `infra-<target>-<app>`.
    ///
    /// With a commit, the app's `image.tag` is first set to `sha-<commit>`.
    /// Without one the app redeploys whatever image it already runs.
    pub async fn deploy(
        &self,
        target: &Target,
        app: &AppName,
        commit: Option<&CommitSha>,
    ) -> Result<(), ControllerError> {
        if let Some(commit) = commit {
            let pin = ConfigUpdate::plain(ConfigKey::image_tag(), ImageTag::for_commit(commit).as_str());
            ConfigPatcher::new(self.controller)
                .patch(target, app, &[pin])
                .await?;
        }

        let resource = ResourceName::new(target, app);
        let invocation = self.controller.app_command("deploy", &resource);

        self.controller
            .execute(invocation)
            .await
            .map_err(|source| ControllerError::Deploy { resource, source })
    }
}
