//! CLI for the License Remediator.
//!
//! Lists the repositories of a GitHub organization and opens a pull request
//! adding a license to every repository that lacks one.

use clap::error::ErrorKind;
use clap::Parser;
use license_remediator::{load_settings, RunSummary, Runner, RunnerConfig, RunnerError};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const USAGE: &str = "usage: license-remediator [--help] <organization> <authorization token>";

/// License Remediator - Propose a license for every unlicensed repository of an organization.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, disable_help_flag = true)]
struct Args {
    /// Print usage and exit.
    #[arg(long)]
    help: bool,

    /// GitHub organization to scan.
    organization: Option<String>,

    /// GitHub access token.
    token: Option<String>,

    /// Positional arguments past the token are ignored.
    #[arg(hide = true)]
    extra: Vec<String>,

    /// Path to a TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// What the process should do for a given command line.
#[derive(Debug, PartialEq, Eq)]
enum Invocation {
    /// Print usage and exit without touching the network.
    Usage,
    /// Remediate the organization.
    Run {
        organization: String,
        token: String,
        config: Option<PathBuf>,
    },
}

impl Args {
    fn into_invocation(self) -> Invocation {
        if self.help {
            return Invocation::Usage;
        }
        match (self.organization, self.token) {
            (Some(organization), Some(token)) => Invocation::Run {
                organization,
                token,
                config: self.config,
            },
            _ => Invocation::Usage,
        }
    }
}

/// Interprets a command line. Anything clap cannot make sense of prints the
/// usage string, except `--version`, which clap answers itself.
fn parse_invocation<I, T>(argv: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(argv) {
        Ok(args) => args.into_invocation(),
        Err(e) if e.kind() == ErrorKind::DisplayVersion => e.exit(),
        Err(_) => Invocation::Usage,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    // Both ring and aws-lc-rs end up in the tree; pick one explicitly.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let Invocation::Run {
        organization,
        token,
        config,
    } = parse_invocation(std::env::args_os())
    else {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    };

    match run(organization, token, config).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "There was an unhandled error");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Output goes to stdout in compact single-line form. Verbosity follows
/// `RUST_LOG`, defaulting to "info".
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(
    organization: String,
    token: String,
    config: Option<PathBuf>,
) -> Result<RunSummary, RunnerError> {
    let settings = load_settings(config.as_deref())?;
    let config = RunnerConfig::new(organization, token).with_settings(settings);
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Repositories listed: {}", summary.repositories_listed);
    println!("  Already licensed: {}", summary.already_licensed);
    println!("  Pipelines launched: {}", summary.pipelines_launched());
    println!("  Pull requests opened: {}", summary.pull_requests_opened);
    println!("  Skipped (no branch head): {}", summary.skipped);
    println!("  Failed: {}", summary.failed);
}
