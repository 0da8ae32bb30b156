//! Report generation.

use brightrank_core::{BrandProfile, Competitor, DateRange, Report};
use brightrank_provider::ResponseProvider;
use brightrank_store::{AppRepository, KeyValueStore};
use chrono::{DateTime, Utc};
use rand::Rng;

use crate::analysis::{brand_and_keywords, fetch_analysis};
use crate::error::DashboardError;
use crate::trend::generate_visibility_trend;

/// Weekly points in a report's visibility trend, including `Current`.
pub const TREND_POINTS: usize = 7;

/// What the user asked for when creating a report.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub title: String,
    pub date_range: DateRange,
    pub generated_at: DateTime<Utc>,
}

impl ReportRequest {
    #[must_use]
    pub fn now(title: &str, date_range: DateRange) -> Self {
        Self {
            title: title.to_string(),
            date_range,
            generated_at: Utc::now(),
        }
    }
}

/// Generate a report for the saved profile and append it to the stored list.
///
/// 1. Check the title, brand name and keywords.
/// 2. Fetch and extract the analysis for the requested range.
/// 3. Fetch competitor scores and actionable insights concurrently. If the
///    scores fail, the competitors' stored visibility is used instead; if
///    insights fail, the report has none.
/// 4. Build the comparison (brand first) and a synthetic visibility trend.
/// 5. Persist the report.
///
/// # Errors
///
/// - [`DashboardError::BlankTitle`], [`DashboardError::MissingBrand`] or
///   [`DashboardError::NoKeywords`] before any provider call.
/// - [`DashboardError::Provider`] / [`DashboardError::Extraction`] when the
///   analysis cannot be produced.
/// - [`DashboardError::Store`] when the report cannot be saved.
pub async fn create_report<S, R>(
    provider: &dyn ResponseProvider,
    repo: &AppRepository<S>,
    profile: &BrandProfile,
    request: &ReportRequest,
    rng: &mut R,
) -> Result<Report, DashboardError>
where
    S: KeyValueStore,
    R: Rng + ?Sized,
{
    // Step 1: Validate inputs.
    let title = request.title.trim();
    if title.is_empty() {
        return Err(DashboardError::BlankTitle);
    }
    let (brand, keywords) = brand_and_keywords(profile)?;

    // Step 2: Analysis.
    let mut analysis = fetch_analysis(provider, brand, &keywords, request.date_range).await?;

    // Step 3: Competitor scores and insights in parallel.
    let competitor_names = profile.competitor_names();
    let (scores, insights) = tokio::join!(
        provider.competitor_scores(brand, &keywords, &competitor_names),
        provider.actionable_insights(brand, &analysis),
    );

    let competitors = scores.unwrap_or_else(|e| {
        tracing::warn!(
            brand,
            error = %e,
            "competitor scores unavailable; using stored visibility"
        );
        profile.competitors.clone()
    });
    match insights {
        Ok(insights) => analysis.actionable_insights = Some(insights),
        Err(e) => tracing::warn!(brand, error = %e, "failed to fetch actionable insights"),
    }

    // Step 4: Comparison and trend.
    let mut competitor_comparison = Vec::with_capacity(competitors.len() + 1);
    competitor_comparison.push(Competitor {
        name: brand.to_string(),
        visibility: analysis.overall_score,
    });
    competitor_comparison.extend(competitors);
    let visibility_trend = generate_visibility_trend(analysis.overall_score, TREND_POINTS, rng);

    let report = Report {
        id: Report::id_for(request.generated_at),
        title: title.to_string(),
        date_generated: request.generated_at.format("%Y-%m-%d").to_string(),
        date_range: request.date_range.label().to_string(),
        analysis,
        competitor_comparison,
        visibility_trend,
    };

    // Step 5: Persist.
    let count = repo.append_report(report.clone())?;
    tracing::info!(
        brand,
        report_id = %report.id,
        title = %report.title,
        reports = count,
        "report created"
    );
    Ok(report)
}
