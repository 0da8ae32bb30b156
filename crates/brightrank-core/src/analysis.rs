//! Analysis records produced from an AI provider response.
//!
//! The JSON shape (camelCase keys) is the one persisted in history snapshots
//! and reports, so renaming a field here is a storage format change.

use serde::{Deserialize, Serialize};

/// Tone of a single mention.
///
/// Providers are asked for `Positive`, `Negative` or `Neutral`; any other
/// label is kept verbatim in [`Sentiment::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    #[serde(untagged)]
    Other(String),
}

impl Sentiment {
    /// Map a payload label onto a sentiment. Matching is case-sensitive, so
    /// `positive` becomes `Other("positive")`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Positive" => Self::Positive,
            "Negative" => Self::Negative,
            "Neutral" => Self::Neutral,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
            Self::Other(label) => label,
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Aggregate positive/neutral/negative split.
///
/// Values are kept exactly as the provider reported them; they are not
/// normalized to sum to 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

/// A single brand appearance in an AI platform answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentionRecord {
    pub platform: String,
    pub query: String,
    pub snippet: String,
    pub sentiment: Sentiment,
    pub date: String,
    /// Provider confidence in `[0.0, 1.0]`.
    pub confidence: f64,
}

/// One point of the sentiment time series. Values are unclamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    pub positive: i32,
    pub neutral: i32,
    pub negative: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformCount {
    pub platform: String,
    pub mentions: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightCategory {
    #[serde(rename = "Content Strategy")]
    ContentStrategy,
    #[serde(rename = "Community Engagement")]
    CommunityEngagement,
    #[serde(rename = "Reputation Management")]
    ReputationManagement,
    #[serde(rename = "SEO Optimization")]
    SeoOptimization,
}

impl std::fmt::Display for InsightCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsightCategory::ContentStrategy => write!(f, "Content Strategy"),
            InsightCategory::CommunityEngagement => write!(f, "Community Engagement"),
            InsightCategory::ReputationManagement => write!(f, "Reputation Management"),
            InsightCategory::SeoOptimization => write!(f, "SEO Optimization"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightPriority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for InsightPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsightPriority::High => write!(f, "High"),
            InsightPriority::Medium => write!(f, "Medium"),
            InsightPriority::Low => write!(f, "Low"),
        }
    }
}

/// A recommended follow-up derived from an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionableInsight {
    pub category: InsightCategory,
    pub priority: InsightPriority,
    pub title: String,
    pub description: String,
}

/// Structured visibility analysis for one brand and date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Synthetic 0–100 visibility score, passed through unclamped.
    pub overall_score: u32,
    /// Signed percentage change against the previous period.
    pub visibility_change: f64,
    pub total_mentions: u32,
    pub sentiment_breakdown: SentimentBreakdown,
    pub mentions: Vec<MentionRecord>,
    pub sentiment_trend: Vec<TrendPoint>,
    pub platform_breakdown: Vec<PlatformCount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actionable_insights: Option<Vec<ActionableInsight>>,
}

impl AnalysisResult {
    /// A record with the given score and every other field zeroed or empty.
    #[must_use]
    pub fn with_score(overall_score: u32) -> Self {
        Self {
            overall_score,
            visibility_change: 0.0,
            total_mentions: 0,
            sentiment_breakdown: SentimentBreakdown::default(),
            mentions: Vec::new(),
            sentiment_trend: Vec::new(),
            platform_breakdown: Vec::new(),
            actionable_insights: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_labels_are_case_sensitive() {
        assert_eq!(Sentiment::from_label("Positive"), Sentiment::Positive);
        assert_eq!(
            Sentiment::from_label("positive"),
            Sentiment::Other("positive".to_string())
        );
        assert_eq!(Sentiment::from_label("Mixed").as_str(), "Mixed");
    }

    #[test]
    fn unrecognised_sentiment_round_trips_as_plain_string() {
        let json = serde_json::to_value(Sentiment::Other("Mixed".to_string())).unwrap();
        assert_eq!(json, "Mixed");
        let back: Sentiment = serde_json::from_value(json).unwrap();
        assert_eq!(back, Sentiment::Other("Mixed".to_string()));

        let known: Sentiment = serde_json::from_str(r#""Neutral""#).unwrap();
        assert_eq!(known, Sentiment::Neutral);
    }

    #[test]
    fn analysis_serializes_with_camel_case_keys() {
        let analysis = AnalysisResult::with_score(72);
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["overallScore"], 72);
        assert_eq!(json["visibilityChange"], 0.0);
        assert_eq!(json["sentimentBreakdown"]["positive"], 0);
        assert!(json["platformBreakdown"].as_array().unwrap().is_empty());
        assert!(
            json.get("actionableInsights").is_none(),
            "absent insights must not be serialized"
        );
    }

    #[test]
    fn insight_category_uses_display_labels_in_json() {
        let insight = ActionableInsight {
            category: InsightCategory::SeoOptimization,
            priority: InsightPriority::Low,
            title: "t".to_string(),
            description: "d".to_string(),
        };
        let json = serde_json::to_value(&insight).unwrap();
        assert_eq!(json["category"], "SEO Optimization");
        assert_eq!(json["priority"], "Low");
    }

    #[test]
    fn stored_analysis_without_insights_deserializes() {
        let raw = r#"{
            "overallScore": 61,
            "visibilityChange": -2.5,
            "totalMentions": 120,
            "sentimentBreakdown": {"positive": 50, "neutral": 30, "negative": 20},
            "mentions": [],
            "sentimentTrend": [],
            "platformBreakdown": [{"platform": "ChatGPT", "mentions": 60}]
        }"#;
        let analysis: AnalysisResult = serde_json::from_str(raw).unwrap();
        assert_eq!(analysis.overall_score, 61);
        assert!(analysis.actionable_insights.is_none());
        assert_eq!(analysis.platform_breakdown[0].mentions, 60);
    }
}
