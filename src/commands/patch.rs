// ABOUTME: Patch command implementation.
// ABOUTME: Prompts for secret values, then patches and redeploys each app.

use massdeploy::config::Config;
use massdeploy::diagnostics::Diagnostics;
use massdeploy::error::Result;
use massdeploy::exec::ProcessRunner;
use massdeploy::output::Output;
use massdeploy::prompt::TerminalPrompt;
use massdeploy::rollout::{PatchRequest, RolloutOrchestrator};

/// Patch every app in the request with interactively entered values.
pub async fn patch(config: &Config, request: PatchRequest, output: Output) -> Result<()> {
    let mut diag = Diagnostics::default();
    let runner = ProcessRunner;
    let orchestrator = RolloutOrchestrator::new(&runner, &config.tools, &output);

    let patched = orchestrator
        .patch(&request, &TerminalPrompt::new(), &mut diag)
        .await?;

    // Emit collected warnings
    for warning in diag.warnings() {
        output.warning(&warning.message);
    }

    output.success(&format!(
        "Patched {} app(s){}{}",
        patched.len(),
        if request.redeploy { " and redeployed" } else { "" },
        if request.noop { " (noop)" } else { "" },
    ));
    Ok(())
}
