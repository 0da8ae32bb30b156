//! Field extraction for the seven analysis sections.

use std::str::FromStr;
use std::sync::LazyLock;

use brightrank_core::{
    AnalysisResult, MentionRecord, PlatformCount, Sentiment, SentimentBreakdown, TrendPoint,
};
use regex::{Captures, Regex};

use crate::error::ExtractionFailed;
use crate::section::{
    section, MENTIONS, OVERALL_SCORE, PLATFORM_BREAKDOWN, SENTIMENT_BREAKDOWN, SENTIMENT_TREND,
    TOTAL_MENTIONS, VISIBILITY_CHANGE,
};

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid digits regex"));

// `12`, `-3.5`, `4.` and `.5` all count as decimals.
static SIGNED_DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)").expect("valid decimal regex")
});

static POSITIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Positive:\s*([0-9]+)").expect("valid positive regex"));
static NEUTRAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Neutral:\s*([0-9]+)").expect("valid neutral regex"));
static NEGATIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Negative:\s*([0-9]+)").expect("valid negative regex"));

static MENTION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^-\s*Platform:\s*(?P<platform>.*?)\s*\|",
        r"\s*Query:\s*(?P<query>.*?)\s*\|",
        r"\s*Snippet:\s*(?P<snippet>.*?)\s*\|",
        r"\s*Sentiment:\s*(?P<sentiment>.*?)\s*\|",
        r"\s*Date:\s*(?P<date>.*?)\s*\|",
        r"\s*Confidence:\s*(?P<confidence>(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)$",
    ))
    .expect("valid mention line regex")
});

static TREND_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^-\s*Date:\s*(?P<date>.*?)\s*\|",
        r"\s*Positive:\s*(?P<positive>-?[0-9]+)\s*\|",
        r"\s*Neutral:\s*(?P<neutral>-?[0-9]+)\s*\|",
        r"\s*Negative:\s*(?P<negative>-?[0-9]+)$",
    ))
    .expect("valid trend line regex")
});

static PLATFORM_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-\s*Platform:\s*(?P<platform>.*?)\s*\|\s*Mentions:\s*(?P<mentions>[0-9]+)$")
        .expect("valid platform line regex")
});

/// Parse a provider response into an [`AnalysisResult`].
///
/// Each section is located independently by heading, so section order does
/// not matter. Missing or malformed optional sections default to zero or
/// empty, and list lines that do not fit their template are skipped.
///
/// # Errors
///
/// Returns [`ExtractionFailed`] when the `Overall Score` section is absent or
/// holds no integer that fits a `u32`. No other condition fails.
pub fn extract_analysis(raw: &str) -> Result<AnalysisResult, ExtractionFailed> {
    let overall_score = overall_score(raw)?;

    let visibility_change = section(raw, VISIBILITY_CHANGE)
        .and_then(|body| first_number::<f64>(&SIGNED_DECIMAL, body))
        .unwrap_or(0.0);

    let total_mentions = section(raw, TOTAL_MENTIONS)
        .and_then(|body| first_number::<u32>(&DIGITS, body))
        .unwrap_or(0);

    let sentiment_breakdown = section(raw, SENTIMENT_BREAKDOWN)
        .map(sentiment_breakdown)
        .unwrap_or_default();

    let mentions = section(raw, MENTIONS)
        .map(|body| scan_lines(body, MENTIONS, &MENTION_LINE, mention_from))
        .unwrap_or_default();

    let sentiment_trend = section(raw, SENTIMENT_TREND)
        .map(|body| scan_lines(body, SENTIMENT_TREND, &TREND_LINE, trend_point_from))
        .unwrap_or_default();

    let platform_breakdown = section(raw, PLATFORM_BREAKDOWN)
        .map(|body| scan_lines(body, PLATFORM_BREAKDOWN, &PLATFORM_LINE, platform_count_from))
        .unwrap_or_default();

    Ok(AnalysisResult {
        overall_score,
        visibility_change,
        total_mentions,
        sentiment_breakdown,
        mentions,
        sentiment_trend,
        platform_breakdown,
        actionable_insights: None,
    })
}

fn overall_score(raw: &str) -> Result<u32, ExtractionFailed> {
    let body = section(raw, OVERALL_SCORE).ok_or(ExtractionFailed::MissingOverallScore)?;
    first_number::<u32>(&DIGITS, body)
        .ok_or_else(|| ExtractionFailed::InvalidOverallScore(body.trim().to_string()))
}

/// Parse the first match of `pattern` in `body`.
///
/// A match that does not fit `T` (for example digits overflowing `u32`)
/// yields `None` rather than falling through to a later match.
fn first_number<T: FromStr>(pattern: &Regex, body: &str) -> Option<T> {
    let found = pattern.find(body)?;
    let parsed = found.as_str().parse::<T>().ok();
    if parsed.is_none() {
        tracing::debug!(value = found.as_str(), "numeric field out of range");
    }
    parsed
}

fn captured_number<T: FromStr>(pattern: &Regex, body: &str) -> T
where
    T: Default,
{
    pattern
        .captures(body)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<T>().ok())
        .unwrap_or_default()
}

fn sentiment_breakdown(body: &str) -> SentimentBreakdown {
    SentimentBreakdown {
        positive: captured_number(&POSITIVE, body),
        neutral: captured_number(&NEUTRAL, body),
        negative: captured_number(&NEGATIVE, body),
    }
}

/// Apply `pattern` to each line of a section body, keeping the lines that
/// match and convert, in order.
fn scan_lines<T>(
    body: &str,
    section_name: &str,
    pattern: &Regex,
    build: impl Fn(&Captures<'_>) -> Option<T>,
) -> Vec<T> {
    let mut out = Vec::new();
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match pattern.captures(line).and_then(|caps| build(&caps)) {
            Some(item) => out.push(item),
            None => {
                tracing::debug!(
                    section = section_name,
                    line,
                    "skipping line that does not fit the template"
                );
            }
        }
    }
    out
}

fn text(caps: &Captures<'_>, name: &str) -> String {
    caps.name(name)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

fn number<T: FromStr>(caps: &Captures<'_>, name: &str) -> Option<T> {
    caps.name(name)?.as_str().parse::<T>().ok()
}

fn mention_from(caps: &Captures<'_>) -> Option<MentionRecord> {
    Some(MentionRecord {
        platform: text(caps, "platform"),
        query: text(caps, "query"),
        snippet: text(caps, "snippet"),
        sentiment: Sentiment::from_label(&text(caps, "sentiment")),
        date: text(caps, "date"),
        confidence: number(caps, "confidence")?,
    })
}

fn trend_point_from(caps: &Captures<'_>) -> Option<TrendPoint> {
    Some(TrendPoint {
        date: text(caps, "date"),
        positive: number(caps, "positive")?,
        neutral: number(caps, "neutral")?,
        negative: number(caps, "negative")?,
    })
}

fn platform_count_from(caps: &Captures<'_>) -> Option<PlatformCount> {
    Some(PlatformCount {
        platform: text(caps, "platform"),
        mentions: number(caps, "mentions")?,
    })
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
