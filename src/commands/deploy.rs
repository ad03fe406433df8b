// ABOUTME: Deploy command implementation.
// ABOUTME: Runs the gated rollout and reports the outcome.

use massdeploy::config::Config;
use massdeploy::diagnostics::Diagnostics;
use massdeploy::error::Result;
use massdeploy::exec::ProcessRunner;
use massdeploy::output::Output;
use massdeploy::rollout::{DeployRequest, RolloutOrchestrator};

/// Deploy the requested ref to every app in the request.
pub async fn deploy(config: &Config, request: DeployRequest, mut output: Output) -> Result<()> {
    output.start_timer();
    let mut diag = Diagnostics::default();

    output.progress(&format!(
        "Deploying '{}' from {} to {} ({} app(s){}{})",
        request.reference,
        request.repo,
        request.target,
        request.apps.len(),
        if request.migrate() { ", with migrations" } else { "" },
        if request.noop { ", noop" } else { "" },
    ));

    let runner = ProcessRunner;
    let orchestrator = RolloutOrchestrator::new(&runner, &config.tools, &output);

    let report = match orchestrator.deploy(&request, &mut diag).await {
        Ok(report) => report,
        Err(e) => {
            if e.aborted_before_rollout() {
                output.warning("Cancelling deployment! Nothing was deployed");
            }
            return Err(e.into());
        }
    };

    // Emit collected warnings
    for warning in diag.warnings() {
        output.warning(&warning.message);
    }

    output.success(&format!(
        "Deployed {} app(s) at {}{}",
        report.deployed.len(),
        report.commit.short(),
        if request.noop { " (noop)" } else { "" },
    ));
    Ok(())
}
