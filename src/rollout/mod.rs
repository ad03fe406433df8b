// ABOUTME: Commit-pinned rollouts and secret patch workflows.
// ABOUTME: Resolve, gate on image availability, then drive apps in order.

mod error;
mod orchestrator;
mod plan;
mod request;

pub use error::{RolloutError, RolloutErrorKind};
pub use orchestrator::{RolloutOrchestrator, RolloutReport};
pub use plan::rollout_order;
pub use request::{DeployRequest, PatchRequest};
