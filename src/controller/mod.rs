// ABOUTME: Client for the mass deployment controller.
// ABOUTME: Patches runtime config and triggers deploys, honoring noop mode.

mod driver;
mod patcher;

pub use driver::DeploymentDriver;
pub use patcher::{ConfigPatcher, ConfigUpdate, ConfigValue};

use crate::exec::{CommandRunner, ExecError, Invocation};
use crate::output::{Output, OutputMode, Status};
use crate::types::ResourceName;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("patch of {resource} failed: {source}")]
    Patch {
        resource: ResourceName,
        #[source]
        source: ExecError,
    },

    #[error("deploy of {resource} failed: {source}")]
    Deploy {
        resource: ResourceName,
        #[source]
        source: ExecError,
    },
}

/// Issues `mass app <verb>` commands, or only reports them under noop.
pub struct Controller<'a, R: CommandRunner> {
    runner: &'a R,
    program: &'a str,
    output: &'a Output,
    noop: bool,
}

impl<'a, R: CommandRunner> Controller<'a, R> {
    pub fn new(runner: &'a R, program: &'a str, output: &'a Output, noop: bool) -> Self {
        Self {
            runner,
            program,
            output,
            noop,
        }
    }

    /// Base invocation for an app-level controller command.
    fn app_command(&self, verb: &str, resource: &ResourceName) -> Invocation {
        Invocation::new(self.program)
            .args(["app", verb])
            .arg(resource.as_str())
    }

    /// Run a mutating command. Under noop the command is reported with the
    /// same redacted text a real run would show, and nothing is executed.
    async fn execute(&self, invocation: Invocation) -> Result<(), ExecError> {
        let shown = invocation.to_string();

        if self.noop {
            tracing::info!(command = %shown, "noop: skipping controller call");
            self.output.status(Status::Noop, &shown);
            return Ok(());
        }

        self.output.status(Status::Run, &shown);

        // JSON consumers read stdout line by line, so controller chatter is
        // captured and logged instead of passed through.
        if self.output.mode() == OutputMode::Json {
            let output = self.runner.run_checked(&invocation).await?;
            tracing::debug!(command = %shown, stdout = output.stdout.trim(), "controller output");
            return Ok(());
        }

        self.runner
            .run_checked(&invocation.inherit_output())
            .await
            .map(|_| ())
    }
}
