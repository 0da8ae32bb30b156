use async_trait::async_trait;
use brightrank_core::{ActionableInsight, AnalysisResult, Competitor, KeywordAnalysis};

use crate::error::ProviderError;

/// Source of AI visibility data for a brand.
///
/// Implementations are free to call the network; callers treat any error as
/// "no data" and surface it to the user.
#[async_trait]
pub trait ResponseProvider: Send + Sync {
    /// Raw analysis text in the `## Heading` template for `brand` over
    /// `date_range` (a display label such as `Last 7 Days`).
    async fn dashboard_analysis(
        &self,
        brand: &str,
        keywords: &[String],
        date_range: &str,
    ) -> Result<String, ProviderError>;

    async fn keyword_analysis(
        &self,
        brand: &str,
        keywords: &[String],
    ) -> Result<KeywordAnalysis, ProviderError>;

    async fn actionable_insights(
        &self,
        brand: &str,
        analysis: &AnalysisResult,
    ) -> Result<Vec<ActionableInsight>, ProviderError>;

    /// Visibility scores for each competitor, in the order given.
    async fn competitor_scores(
        &self,
        brand: &str,
        keywords: &[String],
        competitors: &[String],
    ) -> Result<Vec<Competitor>, ProviderError>;
}
