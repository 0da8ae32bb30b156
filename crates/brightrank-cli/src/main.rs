mod app;
mod dashboard;
mod profile;
mod report;

use std::path::PathBuf;

use brightrank_core::{AppConfig, ConfigError, DateRange};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::profile::{CompetitorCommands, KeywordCommands};
use crate::report::ReportCommands;

#[derive(Debug, Parser)]
#[command(name = "brightrank")]
#[command(about = "Track how AI assistants talk about your brand")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a raw provider response file and print the analysis as JSON
    Extract {
        /// File holding `## Heading` formatted text
        file: PathBuf,
    },
    #[command(flatten)]
    App(AppCommands),
}

/// Commands that need configuration, a provider and the data directory.
#[derive(Debug, Subcommand)]
enum AppCommands {
    /// Save the brand profile and run a first analysis
    Onboard {
        /// Brand name to track
        #[arg(long, required_unless_present = "from")]
        brand: Option<String>,
        /// Comma-separated keywords
        #[arg(long, default_value = "")]
        keywords: String,
        /// Competitor as NAME=SCORE (repeatable)
        #[arg(long = "competitor", value_parser = parse_competitor)]
        competitors: Vec<(String, i64)>,
        /// Load the profile from a YAML file instead of flags
        #[arg(long, conflicts_with_all = ["brand", "competitors"])]
        from: Option<PathBuf>,
    },
    /// Show the saved brand profile
    Profile,
    /// Manage and analyze tracked keywords
    Keywords {
        #[command(subcommand)]
        command: KeywordCommands,
    },
    /// Manage tracked competitors
    Competitors {
        #[command(subcommand)]
        command: CompetitorCommands,
    },
    /// Run a dashboard analysis for the saved brand
    Analyze {
        /// Reporting window: "Last 7 Days", "Last 30 Days", "This Month",
        /// "Last 3 Months" (or 7d, 30d, month, 3m)
        #[arg(long, default_value = "7d")]
        date_range: DateRange,
    },
    /// Show stored analysis history for the saved brand
    History,
    /// Create, inspect and export reports
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
}

/// Parse `NAME=SCORE`; the score range is checked when the profile is edited.
fn parse_competitor(raw: &str) -> Result<(String, i64), String> {
    let (name, score) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=SCORE, got '{raw}'"))?;
    let score = score
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid score in '{raw}': {e}"))?;
    Ok((name.trim().to_string(), score))
}

const DEFAULT_LOG_LEVEL: &str = "info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run(Cli::parse(), brightrank_core::load_app_config).await
}

async fn run<F>(cli: Cli, load_config: F) -> anyhow::Result<()>
where
    F: FnOnce() -> Result<AppConfig, ConfigError>,
{
    match cli.command {
        None => {
            println!("brightrank ready; run `brightrank --help` for commands");
            Ok(())
        }
        // Extraction works on a file alone; config is never loaded.
        Some(Commands::Extract { file }) => {
            init_tracing(DEFAULT_LOG_LEVEL)?;
            dashboard::run_extract(&file)
        }
        Some(Commands::App(command)) => {
            let config = load_config()?;
            init_tracing(&config.log_level)?;
            run_command(&app::App::from_config(config)?, command).await
        }
    }
}

/// Install the stderr subscriber, preferring `RUST_LOG` over `fallback_level`.
/// A subscriber that is already installed is left in place.
fn init_tracing(fallback_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(fallback_level))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}

async fn run_command(app: &app::App, command: AppCommands) -> anyhow::Result<()> {
    match command {
        AppCommands::Onboard {
            brand,
            keywords,
            competitors,
            from,
        } => {
            let profile = match from {
                Some(path) => brightrank_core::load_profile_file(&path)?,
                None => profile::profile_from_flags(
                    brand.as_deref().unwrap_or_default(),
                    &keywords,
                    &competitors,
                )?,
            };
            dashboard::run_onboard(app, &profile).await
        }
        AppCommands::Profile => profile::run_show(app),
        AppCommands::Keywords { command } => profile::run_keywords(app, command).await,
        AppCommands::Competitors { command } => profile::run_competitors(app, command),
        AppCommands::Analyze { date_range } => dashboard::run_analyze(app, date_range).await,
        AppCommands::History => dashboard::run_history(app),
        AppCommands::Report { command } => report::run(app, command).await,
    }
}

#[cfg(test)]
mod tests;
