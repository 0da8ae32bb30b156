//! Dashboard analysis: fetch, extract, record history, attach insights.

use brightrank_core::{
    ActionableInsight, AnalysisResult, BrandProfile, DateRange, HistoricalSnapshot,
};
use brightrank_extract::extract_analysis;
use brightrank_provider::ResponseProvider;
use brightrank_store::{AppRepository, KeyValueStore};

use crate::error::DashboardError;

/// Snapshots kept per brand unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Everything the dashboard shows after one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub analysis: AnalysisResult,
    /// The brand's snapshots, oldest first, including this run.
    pub history: Vec<HistoricalSnapshot>,
    /// Empty when the insight request failed.
    pub insights: Vec<ActionableInsight>,
}

/// Brand name and parsed keyword list, or the reason analysis cannot start.
pub(crate) fn brand_and_keywords(
    profile: &BrandProfile,
) -> Result<(&str, Vec<String>), DashboardError> {
    let brand = profile.brand_name.trim();
    if brand.is_empty() {
        return Err(DashboardError::MissingBrand);
    }
    let keywords = profile.keyword_list();
    if keywords.is_empty() {
        return Err(DashboardError::NoKeywords);
    }
    Ok((brand, keywords))
}

/// Ask the provider for dashboard text and parse it.
pub(crate) async fn fetch_analysis(
    provider: &dyn ResponseProvider,
    brand: &str,
    keywords: &[String],
    date_range: DateRange,
) -> Result<AnalysisResult, DashboardError> {
    let raw = provider
        .dashboard_analysis(brand, keywords, date_range.label())
        .await
        .inspect_err(|e| tracing::warn!(brand, error = %e, "dashboard analysis request failed"))?;
    let analysis = extract_analysis(&raw).inspect_err(|e| {
        tracing::warn!(brand, error = %e, "provider response could not be extracted");
    })?;
    Ok(analysis)
}

/// Append `snapshot` and keep only the newest `limit` entries.
pub(crate) fn push_capped(
    history: &mut Vec<HistoricalSnapshot>,
    snapshot: HistoricalSnapshot,
    limit: usize,
) {
    history.push(snapshot);
    let limit = limit.max(1);
    if history.len() > limit {
        let excess = history.len() - limit;
        history.drain(..excess);
    }
}

/// Run a full dashboard analysis for the saved profile.
///
/// 1. Check the profile has a brand name and at least one keyword.
/// 2. Fetch the analysis text and extract it.
/// 3. Append a snapshot to the brand's history, capped at `history_limit`,
///    and persist it. A failed write is logged; the run still succeeds.
/// 4. Fetch actionable insights. A failure is logged and leaves them empty.
///
/// # Errors
///
/// - [`DashboardError::MissingBrand`] / [`DashboardError::NoKeywords`] before
///   any provider call.
/// - [`DashboardError::Provider`] or [`DashboardError::Extraction`] when no
///   analysis could be produced.
/// - [`DashboardError::Store`] if existing history cannot be read.
pub async fn run_dashboard_analysis<S: KeyValueStore>(
    provider: &dyn ResponseProvider,
    repo: &AppRepository<S>,
    profile: &BrandProfile,
    date_range: DateRange,
    history_limit: usize,
) -> Result<DashboardView, DashboardError> {
    // Step 1: Validate inputs.
    let (brand, keywords) = brand_and_keywords(profile)?;

    // Step 2: Fetch and extract.
    let analysis = fetch_analysis(provider, brand, &keywords, date_range).await?;

    // Step 3: Record history.
    let mut history = repo.load_history(brand)?;
    push_capped(
        &mut history,
        HistoricalSnapshot {
            timestamp: chrono::Utc::now().timestamp_millis(),
            date_range: date_range.label().to_string(),
            analysis: analysis.clone(),
        },
        history_limit,
    );
    if let Err(e) = repo.save_history(brand, &history) {
        tracing::warn!(brand, error = %e, "failed to save analysis history");
    }

    // Step 4: Insights.
    let insights = match provider.actionable_insights(brand, &analysis).await {
        Ok(insights) => insights,
        Err(e) => {
            tracing::warn!(brand, error = %e, "failed to fetch actionable insights");
            Vec::new()
        }
    };

    tracing::info!(
        brand,
        date_range = %date_range,
        score = analysis.overall_score,
        mentions = analysis.total_mentions,
        history = history.len(),
        "dashboard analysis complete"
    );

    Ok(DashboardView {
        analysis,
        history,
        insights,
    })
}
