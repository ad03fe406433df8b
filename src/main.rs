// ABOUTME: Entry point for the massdeploy CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use massdeploy::config::{self, Config, DeployOverrides, PatchOverrides};
use massdeploy::error::Result;
use massdeploy::output::{Output, OutputMode};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    if let Err(e) = run(cli, mode).await {
        let output = Output::new(mode);
        match e.category() {
            Some(category) => output.error(&format!("[{category}] {e}")),
            None => output.error(&e.to_string()),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli, mode: OutputMode) -> Result<()> {
    let output = Output::new(mode);
    let cwd = env::current_dir()?;

    match cli.command {
        Commands::Init {
            repo,
            image_repo,
            force,
        } => {
            config::init_config(&cwd, repo.as_deref(), image_repo.as_deref(), force)?;
            output.success(&format!("Wrote {}", config::CONFIG_FILENAME));
            Ok(())
        }
        Commands::Deploy {
            target,
            apps,
            reference,
            repo,
            image_repo,
            migrate: _,
            no_migrate,
            migrate_app,
        } => {
            let config = load_config(&cwd, &output)?;
            let request = config.deploy_request(
                &target.target,
                cli.noop,
                DeployOverrides {
                    apps,
                    reference,
                    repo,
                    image_repo,
                    migrate: !no_migrate,
                    migrate_app,
                },
            )?;
            commands::deploy(&config, request, output).await
        }
        Commands::Patch {
            target,
            apps,
            config_keys,
            deploy: _,
            no_deploy,
        } => {
            let config = load_config(&cwd, &output)?;
            let request = config.patch_request(
                &target.target,
                cli.noop,
                PatchOverrides {
                    apps,
                    config_keys,
                    redeploy: !no_deploy,
                },
            )?;
            commands::patch(&config, request, output).await
        }
    }
}

/// Read mass.yml (or its alternatives) from the working directory.
fn load_config(cwd: &std::path::Path, output: &Output) -> Result<Config> {
    let config = Config::discover(cwd)?;
    if let Some(path) = &config.source {
        output.progress(&format!("Using configuration file {}", path.display()));
    }
    Ok(config)
}
