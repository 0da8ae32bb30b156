//! HTTP client for the Gemini `generateContent` API.
//!
//! Dashboard analyses come back as `## Heading` text for the extractor; the
//! other operations request JSON and deserialize it into core types. Every
//! request goes through [`retry_with_backoff`](crate::retry::retry_with_backoff).

use std::time::Duration;

use async_trait::async_trait;
use brightrank_core::{ActionableInsight, AnalysisResult, Competitor, KeywordAnalysis};
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use crate::error::ProviderError;
use crate::provider::ResponseProvider;
use crate::prompt;
use crate::retry::retry_with_backoff;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/";
const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_BACKOFF_BASE_MS: u64 = 1_000;

/// Client for the Gemini generative language API.
///
/// Use [`GeminiClient::new`] for production or [`GeminiClient::with_base_url`]
/// to point at a mock server in tests.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InsightsEnvelope {
    insights: Vec<ActionableInsight>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, if any are non-blank.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl GeminiClient {
    /// Creates a new client pointed at the production Gemini API.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, ProviderError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ProviderError::Config`] if `base_url` is
    /// not a valid URL or `api_key` is blank.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, ProviderError> {
        if api_key.trim().is_empty() {
            return Err(ProviderError::Config("Gemini API key is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("brightrank/0.1 (ai-visibility)")
            .build()?;

        // Exactly one trailing slash so `Url::join` appends rather than
        // replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| ProviderError::Config(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            base_url,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_base_ms: DEFAULT_BACKOFF_BASE_MS,
        })
    }

    /// Overrides the retry budget and base back-off delay.
    #[must_use]
    pub fn with_retry(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    fn build_url(&self) -> Result<Url, ProviderError> {
        let mut url = self
            .base_url
            .join(&format!("v1beta/models/{}:generateContent", self.model))
            .map_err(|e| ProviderError::Config(format!("invalid model '{}': {e}", self.model)))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }

    /// Sends `prompt` and returns the text of the first candidate.
    ///
    /// With `json_reply` set the request asks for an `application/json`
    /// response body.
    async fn generate(&self, prompt: &str, json_reply: bool) -> Result<String, ProviderError> {
        let mut body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }]
        });
        if json_reply {
            body["generationConfig"] = json!({ "responseMimeType": "application/json" });
        }
        let url = self.build_url()?;

        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            self.generate_once(&url, &body)
        })
        .await
    }

    async fn generate_once(
        &self,
        url: &Url,
        body: &serde_json::Value,
    ) -> Result<String, ProviderError> {
        let response = self.client.post(url.clone()).json(body).send().await?;
        let status = response.status();
        let retry_after_secs = retry_after_secs(response.headers());
        let text = response.text().await?;

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited {
                retry_after_secs,
                message: api_error_message(&text),
            });
        }
        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&text).map_err(|e| ProviderError::Deserialize {
                context: format!("generateContent(model={})", self.model),
                source: e,
            })?;
        parsed.into_text().ok_or(ProviderError::EmptyResponse)
    }
}

#[async_trait]
impl ResponseProvider for GeminiClient {
    async fn dashboard_analysis(
        &self,
        brand: &str,
        keywords: &[String],
        date_range: &str,
    ) -> Result<String, ProviderError> {
        tracing::debug!(brand, date_range, model = %self.model, "requesting dashboard analysis");
        self.generate(&prompt::dashboard(brand, keywords, date_range), false)
            .await
    }

    async fn keyword_analysis(
        &self,
        brand: &str,
        keywords: &[String],
    ) -> Result<KeywordAnalysis, ProviderError> {
        let text = self
            .generate(&prompt::keyword_analysis(brand, keywords), true)
            .await?;
        parse_json(&text, "keyword analysis")
    }

    async fn actionable_insights(
        &self,
        brand: &str,
        analysis: &AnalysisResult,
    ) -> Result<Vec<ActionableInsight>, ProviderError> {
        let text = self
            .generate(&prompt::actionable_insights(brand, analysis), true)
            .await?;
        let envelope: InsightsEnvelope = parse_json(&text, "actionable insights")?;
        Ok(envelope.insights)
    }

    async fn competitor_scores(
        &self,
        brand: &str,
        keywords: &[String],
        competitors: &[String],
    ) -> Result<Vec<Competitor>, ProviderError> {
        if competitors.is_empty() {
            return Ok(Vec::new());
        }
        let text = self
            .generate(&prompt::competitor_scores(brand, keywords, competitors), true)
            .await?;
        parse_json(&text, "competitor scores")
    }
}

/// Deserialize a model reply, tolerating a surrounding Markdown code fence.
fn parse_json<T: DeserializeOwned>(text: &str, context: &str) -> Result<T, ProviderError> {
    serde_json::from_str(strip_code_fence(text)).map_err(|e| ProviderError::Deserialize {
        context: context.to_string(),
        source: e,
    })
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

/// `Retry-After` in its delay-seconds form. HTTP-date values are ignored and
/// fall back to the regular back-off.
fn retry_after_secs(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

/// Pull `error.message` out of a Google API error body, falling back to the
/// raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> GeminiClient {
        GeminiClient::with_base_url("test-key", "gemini-2.5-flash", 30, base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn build_url_targets_generate_content() {
        let client = test_client("https://generativelanguage.googleapis.com");
        let url = client.build_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent?key=test-key"
        );
    }

    #[test]
    fn build_url_keeps_base_path() {
        let client = test_client("http://localhost:9000/proxy/");
        let url = client.build_url().unwrap();
        assert!(
            url.as_str()
                .starts_with("http://localhost:9000/proxy/v1beta/models/"),
            "got {url}"
        );
    }

    #[test]
    fn blank_api_key_is_rejected() {
        let err = GeminiClient::with_base_url("  ", "m", 30, DEFAULT_BASE_URL)
            .err()
            .expect("blank key must fail");
        assert!(matches!(err, ProviderError::Config(_)));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = GeminiClient::with_base_url("k", "m", 30, "not a url")
            .err()
            .expect("bad url must fail");
        assert!(matches!(err, ProviderError::Config(_)));
    }

    #[test]
    fn retry_after_reads_delay_seconds_only() {
        let mut headers = HeaderMap::new();
        assert_eq!(retry_after_secs(&headers), None);
        headers.insert(RETRY_AFTER, " 12 ".parse().unwrap());
        assert_eq!(retry_after_secs(&headers), Some(12));
        headers.insert(RETRY_AFTER, "Wed, 21 Oct 2015 07:28:00 GMT".parse().unwrap());
        assert_eq!(retry_after_secs(&headers), None);
    }

    #[test]
    fn code_fences_are_stripped() {
        assert_eq!(strip_code_fence("```json\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fence("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("  [2] "), "[2]");
    }

    #[test]
    fn api_error_message_prefers_google_error_shape() {
        let body = r#"{"error":{"code":400,"message":"API key not valid","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(api_error_message(body), "API key not valid");
        assert_eq!(api_error_message("upstream down"), "upstream down");
    }

    #[test]
    fn response_text_joins_parts_of_first_candidate() {
        let parsed: GenerateContentResponse = serde_json::from_str(
            r###"{"candidates":[{"content":{"parts":[{"text":"## Overall "},{"text":"Score\n7"}]}},
                {"content":{"parts":[{"text":"ignored"}]}}]}"###,
        )
        .unwrap();
        assert_eq!(parsed.into_text().as_deref(), Some("## Overall Score\n7"));
    }

    #[test]
    fn blank_candidate_text_is_empty() {
        let parsed: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#)
                .unwrap();
        assert!(parsed.into_text().is_none());
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.into_text().is_none());
    }
}
