// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "massdeploy")]
#[command(about = "Commit-pinned rollouts and secret patching for mass-managed apps")]
#[command(version)]
pub struct Cli {
    /// Report controller calls instead of making them
    #[arg(long, global = true)]
    pub noop: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print noop previews, failures, and the final result
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Emit JSON lines instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct TargetArgs {
    /// Target environment to deploy to (staging/prod)
    #[arg(short, long)]
    pub target: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a mass.yml with default options
    Init {
        /// Source repository to record
        #[arg(long)]
        repo: Option<String>,

        /// Image repository to record
        #[arg(long)]
        image_repo: Option<String>,

        /// Overwrite an existing mass.yml
        #[arg(long)]
        force: bool,
    },

    /// Deploy a ref to the target environment
    ///
    /// Resolves the ref to a commit, checks that the sha-<commit> image has
    /// been pushed, then deploys each app pinned to that image.
    Deploy {
        #[command(flatten)]
        target: TargetArgs,

        /// Apps to deploy
        #[arg(short, long, num_args = 1.., value_delimiter = ',')]
        apps: Vec<String>,

        /// Ref to deploy (commit/tag/branch)
        #[arg(short, long = "ref")]
        reference: Option<String>,

        /// Source repository
        #[arg(long)]
        repo: Option<String>,

        /// Registry repository used to validate image availability
        #[arg(long)]
        image_repo: Option<String>,

        /// Run migrations (default)
        #[arg(short, long, overrides_with = "no_migrate")]
        migrate: bool,

        /// Skip the migration app
        #[arg(long, overrides_with = "migrate")]
        no_migrate: bool,

        /// App that runs migrations
        #[arg(long)]
        migrate_app: Option<String>,
    },

    /// Patch apps with config values, then redeploy them
    ///
    /// Values are always read from a hidden prompt so they never end up in
    /// shell history.
    Patch {
        #[command(flatten)]
        target: TargetArgs,

        /// Apps to patch (default: configured apps plus the migration app)
        #[arg(short, long, num_args = 1.., value_delimiter = ',')]
        apps: Vec<String>,

        /// Config key to set; repeat for several keys
        #[arg(short = 'k', long = "config-key", required = true)]
        config_keys: Vec<String>,

        /// Redeploy each app after patching (default)
        #[arg(long, overrides_with = "no_deploy")]
        deploy: bool,

        /// Patch without redeploying
        #[arg(long, overrides_with = "deploy")]
        no_deploy: bool,
    },
}
