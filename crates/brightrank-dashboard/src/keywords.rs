use brightrank_core::KeywordAnalysis;
use brightrank_provider::ResponseProvider;

use crate::error::DashboardError;

/// Summarize how `brand` shows up for `keywords`.
///
/// # Errors
///
/// Returns [`DashboardError::MissingBrand`] or [`DashboardError::NoKeywords`]
/// without calling the provider, and [`DashboardError::Provider`] when the
/// provider fails.
pub async fn run_keyword_analysis(
    provider: &dyn ResponseProvider,
    brand: &str,
    keywords: &[String],
) -> Result<KeywordAnalysis, DashboardError> {
    let brand = brand.trim();
    if brand.is_empty() {
        return Err(DashboardError::MissingBrand);
    }
    if keywords.iter().all(|k| k.trim().is_empty()) {
        return Err(DashboardError::NoKeywords);
    }

    let analysis = provider.keyword_analysis(brand, keywords).await?;
    tracing::info!(
        brand,
        keywords = keywords.len(),
        score = analysis.score,
        "keyword analysis complete"
    );
    Ok(analysis)
}
