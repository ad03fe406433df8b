// ABOUTME: Test support utilities.
// ABOUTME: Provides a recording command runner that stands in for git, aws, and mass.

use async_trait::async_trait;
use massdeploy::exec::{CommandOutput, CommandRunner, ExecError, Invocation};
use massdeploy::prompt::{PromptError, SecretPrompt};
use massdeploy::types::{ConfigKey, SecretValue};
use parking_lot::Mutex;
use std::sync::Once;

pub const COMMIT: &str = "abc1230000000000000000000000000000000def";
pub const OTHER_COMMIT: &str = "0000000000000000000000000000000000000000";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env().add_directive("massdeploy=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Canned answers for each external tool.
#[derive(Clone)]
pub struct Responses {
    pub git_stdout: String,
    pub git_exit: i32,
    pub aws_stdout: String,
    pub aws_stderr: String,
    pub aws_exit: i32,
    /// Any mass call whose arguments contain this string exits non-zero.
    pub fail_mass_on: Option<String>,
}

impl Responses {
    /// git resolves to `commit` and the registry reports `sha-<registry_commit>`.
    pub fn resolving(commit: &str, registry_commit: &str) -> Self {
        Self {
            git_stdout: format!("{commit}\trefs/heads/main\n"),
            git_exit: 0,
            aws_stdout: format!("[\"latest\", \"sha-{registry_commit}\"]\n"),
            aws_stderr: String::new(),
            aws_exit: 0,
            fail_mass_on: None,
        }
    }
}

impl Default for Responses {
    fn default() -> Self {
        Self::resolving(COMMIT, COMMIT)
    }
}

/// Records every invocation and answers from `Responses`.
pub struct RecordingRunner {
    responses: Responses,
    calls: Mutex<Vec<Invocation>>,
}

#[allow(dead_code)]
impl RecordingRunner {
    pub fn new(responses: Responses) -> Self {
        Self {
            responses,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().clone()
    }

    /// Redacted command lines sent to a given program.
    pub fn calls_to(&self, program: &str) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter(|inv| inv.program() == program)
            .map(|inv| inv.to_string())
            .collect()
    }

    /// Controller calls as `(verb, resource)` pairs.
    pub fn controller_actions(&self) -> Vec<(String, String)> {
        self.calls
            .lock()
            .iter()
            .filter(|inv| inv.program() == "mass")
            .map(|inv| {
                let args = inv.actual_args();
                (args[1].clone(), args[2].clone())
            })
            .collect()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, invocation: &Invocation) -> Result<CommandOutput, ExecError> {
        self.calls.lock().push(invocation.clone());

        let output = match invocation.program() {
            "git" => CommandOutput {
                exit_code: Some(self.responses.git_exit),
                stdout: self.responses.git_stdout.clone(),
                stderr: if self.responses.git_exit == 0 {
                    String::new()
                } else {
                    "fatal: could not read from remote repository".to_string()
                },
            },
            "aws" => CommandOutput {
                exit_code: Some(self.responses.aws_exit),
                stdout: self.responses.aws_stdout.clone(),
                stderr: self.responses.aws_stderr.clone(),
            },
            "mass" => {
                let failing = self
                    .responses
                    .fail_mass_on
                    .as_deref()
                    .is_some_and(|needle| invocation.actual_args().iter().any(|a| a.contains(needle)));
                if failing {
                    CommandOutput {
                        exit_code: Some(1),
                        stdout: String::new(),
                        stderr: "controller rejected the request".to_string(),
                    }
                } else {
                    ok("")
                }
            }
            other => panic!("unexpected program {other}"),
        };

        Ok(output)
    }
}

fn ok(stdout: &str) -> CommandOutput {
    CommandOutput {
        exit_code: Some(0),
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

/// Answers prompts from a fixed value and records which keys were asked.
#[allow(dead_code)]
pub struct ScriptedPrompt {
    pub value: String,
    pub asked: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedPrompt {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().clone()
    }
}

impl SecretPrompt for ScriptedPrompt {
    fn ask(&self, key: &ConfigKey) -> Result<SecretValue, PromptError> {
        self.asked.lock().push(key.to_string());
        Ok(SecretValue::new(self.value.clone()))
    }
}
