//! Dashboard, keyword, and report workflows for BrightRank.
//!
//! Each workflow asks a [`ResponseProvider`](brightrank_provider::ResponseProvider)
//! for data, runs dashboard text through the extractor, and persists results
//! through an [`AppRepository`](brightrank_store::AppRepository).

pub mod analysis;
pub mod error;
pub mod export;
pub mod keywords;
pub mod onboarding;
pub mod report;
pub mod trend;

pub use analysis::{run_dashboard_analysis, DashboardView, DEFAULT_HISTORY_LIMIT};
pub use error::DashboardError;
pub use export::{export_filename, mentions_csv};
pub use keywords::run_keyword_analysis;
pub use onboarding::{complete_onboarding, edit_profile, load_profile};
pub use report::{create_report, ReportRequest, TREND_POINTS};
pub use trend::generate_visibility_trend;
