use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisResult;
use crate::profile::Competitor;

/// Reporting windows offered for analyses and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateRange {
    #[default]
    #[serde(rename = "Last 7 Days")]
    Last7Days,
    #[serde(rename = "Last 30 Days")]
    Last30Days,
    #[serde(rename = "This Month")]
    ThisMonth,
    #[serde(rename = "Last 3 Months")]
    Last3Months,
}

impl DateRange {
    pub const ALL: [DateRange; 4] = [
        DateRange::Last7Days,
        DateRange::Last30Days,
        DateRange::ThisMonth,
        DateRange::Last3Months,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DateRange::Last7Days => "Last 7 Days",
            DateRange::Last30Days => "Last 30 Days",
            DateRange::ThisMonth => "This Month",
            DateRange::Last3Months => "Last 3 Months",
        }
    }

    /// Number of calendar days the window covers when it ends on `today`,
    /// counting `today` itself.
    #[must_use]
    pub fn days_ending(self, today: chrono::NaiveDate) -> u32 {
        use chrono::Datelike as _;
        match self {
            DateRange::Last7Days => 7,
            DateRange::Last30Days => 30,
            DateRange::ThisMonth => today.day(),
            DateRange::Last3Months => 90,
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for DateRange {
    type Err = String;

    /// Accepts the display label (`Last 30 Days`) or a short form (`30d`,
    /// `7d`, `month`, `3m`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "last 7 days" | "7d" => Ok(DateRange::Last7Days),
            "last 30 days" | "30d" => Ok(DateRange::Last30Days),
            "this month" | "month" => Ok(DateRange::ThisMonth),
            "last 3 months" | "3m" => Ok(DateRange::Last3Months),
            _ => Err(format!(
                "unknown date range '{s}'; expected one of: {}",
                DateRange::ALL.map(DateRange::label).join(", ")
            )),
        }
    }
}

/// One stored analysis run in a brand's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalSnapshot {
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub date_range: String,
    pub analysis: AnalysisResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityPoint {
    pub date: String,
    pub score: u32,
}

/// A saved, exportable report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub title: String,
    pub date_generated: String,
    pub date_range: String,
    pub analysis: AnalysisResult,
    /// The brand itself first, then its competitors.
    pub competitor_comparison: Vec<Competitor>,
    pub visibility_trend: Vec<VisibilityPoint>,
}

impl Report {
    /// Report id derived from the generation time, e.g. `rep_1700000000000`.
    #[must_use]
    pub fn id_for(generated_at: chrono::DateTime<chrono::Utc>) -> String {
        format!("rep_{}", generated_at.timestamp_millis())
    }
}
