// ABOUTME: Drives the deploy and patch workflows end to end.
// ABOUTME: Strictly sequential and fail-fast; nothing is retried or rolled back.

use snafu::ResultExt;

use super::error::{ImageMismatchSnafu, ResolveSnafu, RolloutError, UnresolvedSnafu};
use super::plan::rollout_order;
use super::request::{DeployRequest, PatchRequest};
use crate::config::Tools;
use crate::controller::{ConfigPatcher, ConfigUpdate, Controller, DeploymentDriver};
use crate::diagnostics::{Diagnostics, Warning};
use crate::exec::CommandRunner;
use crate::git::CommitResolver;
use crate::output::{Output, Status};
use crate::prompt::{SecretPrompt, collect_entries};
use crate::registry::ImageAvailabilityChecker;
use crate::types::{AppName, CommitSha};

/// What a successful deploy did.
#[derive(Debug, Clone)]
pub struct RolloutReport {
    pub commit: CommitSha,
    /// Apps in the order they were deployed.
    pub deployed: Vec<AppName>,
}

pub struct RolloutOrchestrator<'a, R: CommandRunner> {
    runner: &'a R,
    tools: &'a Tools,
    output: &'a Output,
}

impl<'a, R: CommandRunner> RolloutOrchestrator<'a, R> {
    pub fn new(runner: &'a R, tools: &'a Tools, output: &'a Output) -> Self {
        Self {
            runner,
            tools,
            output,
        }
    }

    fn controller(&self, noop: bool) -> Controller<'a, R> {
        Controller::new(self.runner, &self.tools.mass, self.output, noop)
    }

    /// Resolve the ref, confirm its image exists, then deploy every app.
    ///
    /// Nothing is deployed unless the gate passes. After that, the first
    /// failing app stops the rollout; apps already deployed stay deployed.
    pub async fn deploy(
        &self,
        request: &DeployRequest,
        diag: &mut Diagnostics,
    ) -> Result<RolloutReport, RolloutError> {
        // Resolve
        let commit = CommitResolver::new(self.runner, self.tools)
            .resolve(&request.repo, &request.reference)
            .await
            .context(ResolveSnafu {
                reference: request.reference.as_str(),
            })?;

        // Gate
        let Some(commit) = commit else {
            self.output.status(
                Status::Missing,
                &format!("image missing for ref '{}' (sha: )", request.reference),
            );
            return UnresolvedSnafu {
                reference: request.reference.as_str(),
                repo: request.repo.as_str(),
            }
            .fail();
        };

        self.output.progress(&format!(
            "Resolved '{}' to {}",
            request.reference,
            commit.short()
        ));

        let available = ImageAvailabilityChecker::new(self.runner, self.tools, self.output)
            .verify(&request.image_repo, &commit)
            .await?;

        if !available {
            let mismatch = ImageMismatchSnafu {
                reference: request.reference.as_str(),
                commit: commit.clone(),
            }
            .build();
            self.output.status(Status::Missing, &mismatch.to_string());
            return Err(mismatch);
        }

        // Order
        if let Some(migrate_app) = &request.migrate_app
            && request.apps.iter().any(|app| app == migrate_app)
        {
            diag.warn(Warning::duplicate_migration_app(migrate_app));
        }
        let order = rollout_order(&request.apps, request.migrate_app.as_ref());

        // Rollout
        let controller = self.controller(request.noop);
        let driver = DeploymentDriver::new(&controller);
        let mut deployed = Vec::with_capacity(order.len());

        for app in order.iter() {
            self.output.progress(&format!("  → Deploying {app}..."));
            driver.deploy(&request.target, app, Some(&commit)).await?;
            deployed.push(app.clone());
        }

        Ok(RolloutReport { commit, deployed })
    }

    /// Prompt for every config value, then patch (and optionally redeploy)
    /// each app in turn.
    pub async fn patch(
        &self,
        request: &PatchRequest,
        prompt: &dyn SecretPrompt,
        diag: &mut Diagnostics,
    ) -> Result<Vec<AppName>, RolloutError> {
        // Collect
        let keys: Vec<_> = request.config_keys.iter().cloned().collect();
        let updates: Vec<ConfigUpdate> = collect_entries(&keys, prompt)?
            .into_iter()
            .map(ConfigUpdate::from)
            .collect();

        if request.apps.is_empty() {
            diag.warn(Warning::nothing_to_patch());
            return Ok(Vec::new());
        }

        // Apply
        let controller = self.controller(request.noop);
        let patcher = ConfigPatcher::new(&controller);
        let driver = DeploymentDriver::new(&controller);
        let mut patched = Vec::with_capacity(request.apps.len());

        for app in &request.apps {
            self.output.progress(&format!("  → Patching {app}..."));
            patcher.patch(&request.target, app, &updates).await?;

            if request.redeploy {
                driver.deploy(&request.target, app, None).await?;
            }
            patched.push(app.clone());
        }

        Ok(patched)
    }
}
