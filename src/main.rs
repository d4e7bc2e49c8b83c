//! git-ct-dist - prebuilt binary distribution for git-ct
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use git_ct_dist::cache::CacheLayout;
use git_ct_dist::cli::commands::{self, run::process_exit_code};
use git_ct_dist::cli::{Cli, Commands};
use git_ct_dist::config::ConfigManager;
use git_ct_dist::error::{DistError, DistResult};
use git_ct_dist::lifecycle::BinaryManager;
use git_ct_dist::manifest::PackageMetadata;
use git_ct_dist::platform::HostPlatform;
use git_ct_dist::ui::{self, UiContext};
use std::ffi::OsString;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> DistResult<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug. Logs go to stderr
    // so `run` leaves stdout to the child.
    let filter = match cli.verbose {
        0 => EnvFilter::new("git_ct_dist=warn"),
        1 => EnvFilter::new("git_ct_dist=info"),
        _ => EnvFilter::new("git_ct_dist=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    ui::init_theme();
    let ctx = UiContext::detect().with_quiet(cli.quiet);

    let code = match &cli.command {
        Commands::Platforms => {
            commands::platforms();
            ExitCode::SUCCESS
        }
        Commands::Install => {
            commands::install(&build_manager(&cli, &ctx).await?, &ctx).await?;
            ExitCode::SUCCESS
        }
        Commands::Run(args) => {
            let manager = build_manager(&cli, &ctx).await?;
            let raw: Vec<OsString> = std::env::args_os().collect();
            let code = commands::run(&args.forwarded(&raw), &manager).await?;
            ExitCode::from(process_exit_code(code))
        }
        Commands::Uninstall => {
            commands::uninstall(&build_manager(&cli, &ctx).await?, &ctx).await?;
            ExitCode::SUCCESS
        }
        Commands::Info => {
            commands::info(&build_manager(&cli, &ctx).await?, &ctx)?;
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}

/// Load config and package metadata, then set up the lifecycle manager
async fn build_manager(cli: &Cli, ctx: &UiContext) -> DistResult<BinaryManager> {
    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let config = config_manager.load().await?;
    debug!("Config: {}", config_manager.path().display());

    let cwd = std::env::current_dir().map_err(|e| DistError::io("getting current directory", e))?;
    let manifest = cli.manifest.clone().or(config.package.manifest);
    let package = PackageMetadata::discover(manifest.as_deref(), &cwd).await?;

    let cache_root = match cli.cache_dir.clone().or(config.cache.dir) {
        Some(dir) => dir,
        None => ConfigManager::default_cache_root()?,
    };
    debug!("Cache root: {}", cache_root.display());

    let host = HostPlatform::detect().with_overrides(cli.os_type.clone(), cli.arch.clone());

    Ok(BinaryManager::new(
        host,
        package,
        config.release.artifact_version,
        CacheLayout::new(cache_root),
        ctx,
    ))
}
