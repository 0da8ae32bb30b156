//! Dashboard, onboarding, history and extraction command handlers.

use std::path::Path;

use anyhow::Context as _;
use brightrank_core::{AnalysisResult, BrandProfile, DateRange};
use brightrank_dashboard::{complete_onboarding, load_profile, run_dashboard_analysis, DashboardView};

use crate::app::App;

/// Parse a raw response file and print the extracted record as JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be read or has no usable
/// `Overall Score` section.
pub(crate) fn run_extract(file: &Path) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let analysis = brightrank_extract::extract_analysis(&raw)
        .with_context(|| format!("could not extract an analysis from {}", file.display()))?;
    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}

pub(crate) async fn run_onboard(app: &App, profile: &BrandProfile) -> anyhow::Result<()> {
    let view =
        complete_onboarding(app.provider(), &app.repo, profile, app.config.history_limit).await?;
    println!(
        "saved profile for '{}' ({} keywords, {} competitors)",
        profile.brand_name,
        profile.keyword_list().len(),
        profile.competitors.len()
    );
    match view {
        Some(view) => print_view(&profile.brand_name, DateRange::Last7Days, &view),
        None => println!("no keywords yet; add some with `brightrank keywords add <KEYWORD>`"),
    }
    Ok(())
}

pub(crate) async fn run_analyze(app: &App, date_range: DateRange) -> anyhow::Result<()> {
    let profile = load_profile(&app.repo)?;
    let view = run_dashboard_analysis(
        app.provider(),
        &app.repo,
        &profile,
        date_range,
        app.config.history_limit,
    )
    .await?;
    print_view(&profile.brand_name, date_range, &view);
    Ok(())
}

pub(crate) fn run_history(app: &App) -> anyhow::Result<()> {
    let profile = load_profile(&app.repo)?;
    let history = app.repo.load_history(&profile.brand_name)?;
    if history.is_empty() {
        println!(
            "no analysis history for '{}'; run `brightrank analyze` first",
            profile.brand_name
        );
        return Ok(());
    }

    println!("{:<18}{:<16}{:<8}{:<10}CHANGE", "RECORDED", "RANGE", "SCORE", "MENTIONS");
    for snap in &history {
        let recorded = chrono::DateTime::from_timestamp_millis(snap.timestamp).map_or_else(
            || snap.timestamp.to_string(),
            |at| at.format("%Y-%m-%d %H:%M").to_string(),
        );
        println!(
            "{:<18}{:<16}{:<8}{:<10}{:+.1}%",
            recorded,
            snap.date_range,
            snap.analysis.overall_score,
            snap.analysis.total_mentions,
            snap.analysis.visibility_change
        );
    }
    Ok(())
}

pub(crate) fn print_analysis(analysis: &AnalysisResult) {
    let b = &analysis.sentiment_breakdown;
    println!(
        "Visibility score: {} ({:+.1}%)",
        analysis.overall_score, analysis.visibility_change
    );
    println!("Total mentions:   {}", analysis.total_mentions);
    println!(
        "Sentiment:        {}% positive / {}% neutral / {}% negative",
        b.positive, b.neutral, b.negative
    );

    if !analysis.platform_breakdown.is_empty() {
        println!();
        println!("{:<20}MENTIONS", "PLATFORM");
        for p in &analysis.platform_breakdown {
            println!("{:<20}{}", p.platform, p.mentions);
        }
    }

    if !analysis.sentiment_trend.is_empty() {
        println!();
        println!("{:<14}{:<10}{:<10}NEGATIVE", "PERIOD", "POSITIVE", "NEUTRAL");
        for t in &analysis.sentiment_trend {
            println!("{:<14}{:<10}{:<10}{}", t.date, t.positive, t.neutral, t.negative);
        }
    }

    if !analysis.mentions.is_empty() {
        println!();
        println!("{:<10}{:<12}{:<10}{:<7}SNIPPET", "PLATFORM", "DATE", "TONE", "CONF");
        for m in &analysis.mentions {
            println!(
                "{:<10}{:<12}{:<10}{:<7.2}{}",
                m.platform, m.date, m.sentiment, m.confidence, m.snippet
            );
        }
    }
}

fn print_view(brand: &str, date_range: DateRange, view: &DashboardView) {
    println!();
    println!("# {brand}: {date_range}");
    println!();
    print_analysis(&view.analysis);

    if !view.insights.is_empty() {
        println!();
        println!("Actionable insights:");
        for insight in &view.insights {
            println!(
                "- [{}] {} ({}): {}",
                insight.priority, insight.title, insight.category, insight.description
            );
        }
    }
    println!();
    println!("{} snapshot(s) in history", view.history.len());
}
