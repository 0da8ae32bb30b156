//! Shared domain types and configuration for BrightRank.

pub mod analysis;
pub mod app_config;
pub mod config;
pub mod error;
pub mod keywords;
pub mod profile;
pub mod report;

pub use analysis::{
    ActionableInsight, AnalysisResult, InsightCategory, InsightPriority, MentionRecord,
    PlatformCount, Sentiment, SentimentBreakdown, TrendPoint,
};
pub use app_config::{AppConfig, Environment, ProviderKind};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, ProfileError};
pub use keywords::{KeywordAnalysis, KeywordMention, KeywordSentiment};
pub use profile::{load_profile_file, BrandProfile, Competitor};
pub use report::{DateRange, HistoricalSnapshot, Report, VisibilityPoint};
