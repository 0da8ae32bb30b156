//! Report command handlers.

use std::path::PathBuf;

use anyhow::Context as _;
use brightrank_core::{DateRange, Report};
use brightrank_dashboard::{create_report, export_filename, load_profile, mentions_csv, ReportRequest};
use clap::Subcommand;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::app::App;
use crate::dashboard::print_analysis;

/// Sub-commands available under `report`.
#[derive(Debug, Subcommand)]
pub enum ReportCommands {
    /// Generate and save a new report
    Create {
        /// Report title
        #[arg(long)]
        title: String,
        /// Reporting window (e.g. 7d, 30d, month, 3m)
        #[arg(long, default_value = "30d")]
        date_range: DateRange,
    },
    /// List saved reports
    List,
    /// Show a saved report
    Show { id: String },
    /// Export a report's mentions as CSV
    Export {
        id: String,
        /// Output path (defaults to a file name derived from the title)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

pub(crate) async fn run(app: &App, command: ReportCommands) -> anyhow::Result<()> {
    match command {
        ReportCommands::Create { title, date_range } => {
            let profile = load_profile(&app.repo)?;
            let mut rng = StdRng::from_os_rng();
            let report = create_report(
                app.provider(),
                &app.repo,
                &profile,
                &ReportRequest::now(&title, date_range),
                &mut rng,
            )
            .await?;
            println!("created report {} '{}'", report.id, report.title);
            print_report(&report);
        }
        ReportCommands::List => {
            let reports = app.repo.load_reports()?;
            if reports.is_empty() {
                println!("no reports saved; run `brightrank report create --title <TITLE>`");
                return Ok(());
            }
            println!("{:<20}{:<14}{:<16}{:<8}TITLE", "ID", "GENERATED", "RANGE", "SCORE");
            for r in &reports {
                println!(
                    "{:<20}{:<14}{:<16}{:<8}{}",
                    r.id, r.date_generated, r.date_range, r.analysis.overall_score, r.title
                );
            }
        }
        ReportCommands::Show { id } => {
            let report = find(app, &id)?;
            print_report(&report);
        }
        ReportCommands::Export { id, output } => {
            let report = find(app, &id)?;
            let csv = mentions_csv(&report)?;
            let path = output.unwrap_or_else(|| PathBuf::from(export_filename(&report.title)));
            std::fs::write(&path, csv)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "exported {} mention(s) to {}",
                report.analysis.mentions.len(),
                path.display()
            );
        }
    }
    Ok(())
}

fn find(app: &App, id: &str) -> anyhow::Result<Report> {
    app.repo
        .find_report(id)?
        .ok_or_else(|| anyhow::anyhow!("report '{id}' not found"))
}

fn print_report(report: &Report) {
    println!();
    println!("# {}", report.title);
    println!();
    println!("**Generated**: {}", report.date_generated);
    println!("**Date range**: {}", report.date_range);
    println!();
    print_analysis(&report.analysis);

    println!();
    println!("{:<25}VISIBILITY", "COMPARISON");
    for c in &report.competitor_comparison {
        println!("{:<25}{}", c.name, c.visibility);
    }

    println!();
    println!("{:<10}SCORE", "WEEK");
    for p in &report.visibility_trend {
        println!("{:<10}{}", p.date, p.score);
    }

    if let Some(insights) = report.analysis.actionable_insights.as_deref() {
        if !insights.is_empty() {
            println!();
            println!("Actionable insights:");
            for i in insights {
                println!("- [{}] {} ({}): {}", i.priority, i.title, i.category, i.description);
            }
        }
    }
}
