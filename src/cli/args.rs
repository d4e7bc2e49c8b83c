//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// git-ct-dist - platform-aware installer and launcher for prebuilt git-ct binaries
///
/// Intended to be invoked from a package manager's install, uninstall and
/// bin hooks.
#[derive(Parser, Debug)]
#[command(name = "git-ct-dist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress status output
    #[arg(short, long)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "GIT_CT_DIST_CONFIG")]
    pub config: Option<PathBuf>,

    /// package.json describing the distributed package
    #[arg(long, env = "GIT_CT_DIST_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Root directory of the binary cache
    #[arg(long, env = "GIT_CT_DIST_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Override the detected OS type (e.g. Linux, Darwin, Windows_NT)
    #[arg(long, env = "GIT_CT_DIST_OS_TYPE", hide = true)]
    pub os_type: Option<String>,

    /// Override the detected architecture (e.g. x64)
    #[arg(long, env = "GIT_CT_DIST_ARCH", hide = true)]
    pub arch: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download and cache the executable for this platform
    Install,

    /// Run the cached executable, forwarding all arguments
    #[command(disable_help_flag = true, disable_version_flag = true)]
    Run(RunArgs),

    /// Remove the cached executable
    Uninstall,

    /// Show the resolved platform, download URL and cache state
    Info,

    /// List supported platforms
    Platforms,
}

/// Arguments for the run command
///
/// Help and version flags are disabled so that every argument, including
/// `--help`, reaches the executable.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Arguments passed through to the executable
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl RunArgs {
    /// Arguments exactly as they followed `run` on the command line
    ///
    /// clap drops a `--` written directly after `run` as its own separator.
    /// The parsed values are always a suffix of `raw`, so the token before
    /// them tells whether a separator was swallowed.
    pub fn forwarded(&self, raw: &[OsString]) -> Vec<String> {
        let mut args = self.args.clone();
        let Some(split) = raw.len().checked_sub(args.len()) else {
            return args;
        };
        let is_suffix = raw[split..]
            .iter()
            .zip(&args)
            .all(|(raw_arg, arg)| raw_arg == arg.as_str());

        if is_suffix && split >= 2 && raw[split - 1] == "--" && raw[split - 2] == "run" {
            args.insert(0, "--".to_string());
        }
        args
    }
}
