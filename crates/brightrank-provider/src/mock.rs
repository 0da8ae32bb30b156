//! Locally generated provider data for demos and tests.
//!
//! Scores that should look stable for a brand (overall and keyword score)
//! derive from a hash of the brand name; everything else is drawn from the
//! provider's random source.

use std::ops::RangeInclusive;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use brightrank_core::{
    ActionableInsight, AnalysisResult, Competitor, DateRange, InsightCategory, InsightPriority,
    KeywordAnalysis, KeywordMention, KeywordSentiment, MentionRecord, PlatformCount, Sentiment,
    SentimentBreakdown, TrendPoint,
};
use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ProviderError;
use crate::provider::ResponseProvider;

const PLATFORMS: [&str; 3] = ["Gemini", "ChatGPT", "Claude"];
const SENTIMENTS: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];
const KEYWORD_SENTIMENTS: [KeywordSentiment; 4] = [
    KeywordSentiment::Positive,
    KeywordSentiment::Negative,
    KeywordSentiment::Neutral,
    KeywordSentiment::Unknown,
];
const SUMMARY_LABELS: [&str; 3] = ["Mixed", "Positive", "Neutral"];
const MENTION_COUNT: usize = 5;
const COMPETITOR_SCORE: RangeInclusive<u32> = 40..=89;
const BRAND_PLACEHOLDER: &str = "[BrandName]";

/// Provider that fabricates plausible analysis data without network access.
pub struct MockProvider {
    rng: Mutex<StdRng>,
    min_latency_ms: u64,
    max_latency_ms: u64,
}

impl MockProvider {
    /// Creates a provider seeded from the OS with a simulated response delay
    /// between `min_latency_ms` and `max_latency_ms`.
    #[must_use]
    pub fn new(min_latency_ms: u64, max_latency_ms: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
            min_latency_ms: min_latency_ms.min(max_latency_ms),
            max_latency_ms,
        }
    }

    /// Creates a deterministic provider with no simulated delay.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            min_latency_ms: 0,
            max_latency_ms: 0,
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }

    async fn simulate_latency(&self) {
        if self.max_latency_ms == 0 {
            return;
        }
        let delay_ms =
            self.with_rng(|rng| rng.random_range(self.min_latency_ms..=self.max_latency_ms));
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }

    /// Builds a dashboard analysis for `brand` whose mentions are dated
    /// within `date_range` ending on `today`.
    pub fn generate_dashboard(
        &self,
        brand: &str,
        keywords: &[String],
        date_range: DateRange,
        today: NaiveDate,
    ) -> AnalysisResult {
        self.with_rng(|rng| {
            let total_mentions: u32 = rng.random_range(50..=250);
            let positive: i32 = rng.random_range(30..=70);
            let neutral: i32 = rng.random_range(10..=30);
            let negative = 100 - positive - neutral;
            let visibility_change = round_to(rng.random::<f64>() * 20.0 - 10.0, 1);

            let window_days = u64::from(date_range.days_ending(today).max(1));
            let mentions = (0..MENTION_COUNT)
                .map(|_| {
                    let platform = PLATFORMS[rng.random_range(0..PLATFORMS.len())];
                    let query_topic = pick_keyword(rng, keywords).unwrap_or("products");
                    let snippet_topic = pick_keyword(rng, keywords).unwrap_or("its products");
                    let tone = &SENTIMENTS[rng.random_range(0..SENTIMENTS.len())];
                    let sentiment = SENTIMENTS[rng.random_range(0..SENTIMENTS.len())].clone();
                    let days_ago = rng.random_range(0..window_days);
                    let date = today.checked_sub_days(Days::new(days_ago)).unwrap_or(today);
                    MentionRecord {
                        platform: platform.to_string(),
                        query: format!("reviews for {brand} {query_topic}"),
                        snippet: format!(
                            "A user mentioned {brand} in a discussion about {snippet_topic}. \
                             The sentiment was generally {}.",
                            tone.as_str().to_lowercase()
                        ),
                        sentiment,
                        date: date.format("%Y-%m-%d").to_string(),
                        confidence: round_to(rng.random::<f64>() * 0.15 + 0.85, 2),
                    }
                })
                .collect();

            let sentiment_trend = vec![
                trend_point(
                    "Week 1",
                    positive - rng.random_range(10..=15),
                    neutral + rng.random_range(0..=5),
                ),
                trend_point(
                    "Week 2",
                    positive - rng.random_range(5..=10),
                    neutral + rng.random_range(0..=5),
                ),
                trend_point(
                    "Week 3",
                    positive - rng.random_range(0..=5),
                    neutral - rng.random_range(0..=5),
                ),
                trend_point("Week 4", positive, neutral),
            ];

            AnalysisResult {
                overall_score: hashed_score(brand, 50),
                visibility_change,
                total_mentions,
                sentiment_breakdown: SentimentBreakdown {
                    positive: positive.unsigned_abs(),
                    neutral: neutral.unsigned_abs(),
                    negative: negative.unsigned_abs(),
                },
                mentions,
                sentiment_trend,
                platform_breakdown: vec![
                    platform_share("ChatGPT", total_mentions, 50),
                    platform_share("Gemini", total_mentions, 35),
                    platform_share("Claude", total_mentions, 15),
                ],
                actionable_insights: None,
            }
        })
    }

    pub fn generate_keyword_analysis(&self, brand: &str, keywords: &[String]) -> KeywordAnalysis {
        self.with_rng(|rng| {
            let label = SUMMARY_LABELS[rng.random_range(0..SUMMARY_LABELS.len())];
            let lead = keywords.first().map_or("its products", String::as_str);
            let mentions = keywords
                .iter()
                .take(4)
                .map(|kw| {
                    let tone = KEYWORD_SENTIMENTS[rng.random_range(0..3)];
                    KeywordMention {
                        text: format!(
                            "Users associate {brand} with \"{kw}\" in a generally {} way.",
                            tone.to_string().to_lowercase()
                        ),
                        sentiment: KEYWORD_SENTIMENTS[rng.random_range(0..KEYWORD_SENTIMENTS.len())],
                    }
                })
                .collect();

            KeywordAnalysis {
                summary: format!(
                    "Analysis for \"{brand}\" shows a strong presence for keywords like \"{lead}\". \
                     Overall sentiment is {}, though some discussions mention price or customer \
                     support as areas for improvement.",
                    label.to_lowercase()
                ),
                sentiment: label.to_string(),
                score: hashed_score(brand, 55),
                mentions,
            }
        })
    }

    pub fn generate_competitor_scores(&self, competitors: &[String]) -> Vec<Competitor> {
        self.with_rng(|rng| {
            competitors
                .iter()
                .map(|name| Competitor {
                    name: name.clone(),
                    visibility: rng.random_range(COMPETITOR_SCORE),
                })
                .collect()
        })
    }
}

#[async_trait]
impl ResponseProvider for MockProvider {
    async fn dashboard_analysis(
        &self,
        brand: &str,
        keywords: &[String],
        date_range: &str,
    ) -> Result<String, ProviderError> {
        tracing::debug!(brand, date_range, "mock dashboard analysis");
        let range = date_range.parse::<DateRange>().unwrap_or_default();
        let today = chrono::Local::now().date_naive();
        let analysis = self.generate_dashboard(brand, keywords, range, today);
        self.simulate_latency().await;
        Ok(brightrank_extract::render_analysis(&analysis))
    }

    async fn keyword_analysis(
        &self,
        brand: &str,
        keywords: &[String],
    ) -> Result<KeywordAnalysis, ProviderError> {
        tracing::debug!(brand, keywords = keywords.len(), "mock keyword analysis");
        let analysis = self.generate_keyword_analysis(brand, keywords);
        self.simulate_latency().await;
        Ok(analysis)
    }

    async fn actionable_insights(
        &self,
        brand: &str,
        _analysis: &AnalysisResult,
    ) -> Result<Vec<ActionableInsight>, ProviderError> {
        self.simulate_latency().await;
        Ok(static_insights(brand))
    }

    async fn competitor_scores(
        &self,
        brand: &str,
        _keywords: &[String],
        competitors: &[String],
    ) -> Result<Vec<Competitor>, ProviderError> {
        tracing::debug!(brand, competitors = competitors.len(), "mock competitor scores");
        let scores = self.generate_competitor_scores(competitors);
        self.simulate_latency().await;
        Ok(scores)
    }
}

/// Java-style 31-multiplier hash over UTF-16 code units, with the
/// intermediate wrap-around of 32-bit shifts.
pub(crate) fn brand_hash(brand: &str) -> i64 {
    brand.encode_utf16().fold(0i64, |acc, unit| {
        #[allow(clippy::cast_possible_truncation)]
        let shifted = i64::from((acc as i32).wrapping_shl(5));
        i64::from(unit) + (shifted - acc)
    })
}

fn hashed_score(brand: &str, floor: u32) -> u32 {
    let bucket = brand_hash(brand).unsigned_abs() % 40;
    // bucket < 40
    #[allow(clippy::cast_possible_truncation)]
    let bucket = bucket as u32;
    bucket + floor
}

fn pick_keyword<'a>(rng: &mut StdRng, keywords: &'a [String]) -> Option<&'a str> {
    if keywords.is_empty() {
        return None;
    }
    Some(keywords[rng.random_range(0..keywords.len())].as_str())
}

fn trend_point(date: &str, positive: i32, neutral: i32) -> TrendPoint {
    let negative = 100 - positive - neutral;
    TrendPoint {
        date: date.to_string(),
        positive: positive.clamp(0, 100),
        neutral: neutral.clamp(0, 100),
        negative: negative.clamp(0, 100),
    }
}

fn platform_share(platform: &str, total: u32, percent: u32) -> PlatformCount {
    PlatformCount {
        platform: platform.to_string(),
        mentions: total * percent / 100,
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn static_insights(brand: &str) -> Vec<ActionableInsight> {
    let insight = |category, priority, title: &str, description: &str| ActionableInsight {
        category,
        priority,
        title: title.replace(BRAND_PLACEHOLDER, brand),
        description: description.replace(BRAND_PLACEHOLDER, brand),
    };
    vec![
        insight(
            InsightCategory::ReputationManagement,
            InsightPriority::High,
            "Address Negative Subscription Feedback",
            "Create a dedicated FAQ page and train support staff to handle complaints promptly \
             about delivery delays.",
        ),
        insight(
            InsightCategory::ContentStrategy,
            InsightPriority::Medium,
            "Leverage \"Eco-Friendly\" Keywords",
            "Create blog content and social media campaigns highlighting your brand's \
             eco-friendly practices and compostable pods.",
        ),
        insight(
            InsightCategory::SeoOptimization,
            InsightPriority::Low,
            "Create Comparison Content",
            "Develop a \"Why [BrandName] is the best choice\" page to control the narrative \
             against competitors mentioned in taste tests.",
        ),
    ]
}

#[cfg(test)]
#[path = "mock_test.rs"]
mod tests;
