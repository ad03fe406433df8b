// ABOUTME: Command module aggregator for the massdeploy CLI.
// ABOUTME: Re-exports deploy and patch command handlers.

mod deploy;
mod patch;

pub use deploy::deploy;
pub use patch::patch;
