// ABOUTME: External tool invocation for git, the registry CLI, and the controller.
// ABOUTME: Commands are argument lists, never shell strings.

mod error;
mod invocation;
mod runner;

pub use error::ExecError;
pub use invocation::Invocation;
pub use runner::{CommandOutput, CommandRunner, ProcessRunner};
