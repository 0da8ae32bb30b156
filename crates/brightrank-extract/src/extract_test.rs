use super::*;

#[test]
fn overall_score_missing_section_fails() {
    let err = extract_analysis("## Total Mentions\n10\n").unwrap_err();
    assert_eq!(err, ExtractionFailed::MissingOverallScore);
}

#[test]
fn overall_score_without_digits_fails() {
    let err = extract_analysis("## Overall Score\nnot available\n").unwrap_err();
    assert_eq!(
        err,
        ExtractionFailed::InvalidOverallScore("not available".to_string())
    );
}

#[test]
fn overall_score_overflow_fails() {
    let err = extract_analysis("## Overall Score\n99999999999999999999\n").unwrap_err();
    assert!(matches!(err, ExtractionFailed::InvalidOverallScore(_)));
}

#[test]
fn overall_score_takes_first_digit_run() {
    let result = extract_analysis("## Overall Score\nScore: 72/100\n").unwrap();
    assert_eq!(result.overall_score, 72);
}

#[test]
fn overall_score_is_not_clamped() {
    let result = extract_analysis("## Overall Score\n140\n").unwrap();
    assert_eq!(result.overall_score, 140);
}

#[test]
fn visibility_change_accepts_negative_decimal() {
    let raw = "## Overall Score\n50\n## Visibility Change\n-3.5%\n";
    assert_eq!(extract_analysis(raw).unwrap().visibility_change, -3.5);
}

#[test]
fn visibility_change_ignores_leading_plus() {
    let raw = "## Overall Score\n50\n## Visibility Change\n+5.2% vs last period\n";
    assert_eq!(extract_analysis(raw).unwrap().visibility_change, 5.2);
}

#[test]
fn visibility_change_without_number_defaults_to_zero() {
    let raw = "## Overall Score\n50\n## Visibility Change\nflat\n";
    assert_eq!(extract_analysis(raw).unwrap().visibility_change, 0.0);
}

#[test]
fn total_mentions_overflow_defaults_to_zero() {
    let raw = "## Overall Score\n50\n## Total Mentions\n99999999999999999999\n";
    assert_eq!(extract_analysis(raw).unwrap().total_mentions, 0);
}

#[test]
fn sentiment_breakdown_is_not_normalized() {
    let raw = "## Overall Score\n50\n## Sentiment Breakdown\nPositive: 80%\nNeutral: 30%\nNegative: 20%\n";
    let breakdown = extract_analysis(raw).unwrap().sentiment_breakdown;
    assert_eq!(
        breakdown,
        SentimentBreakdown {
            positive: 80,
            neutral: 30,
            negative: 20
        }
    );
}

#[test]
fn sentiment_breakdown_sub_fields_are_case_sensitive() {
    let raw = "## Overall Score\n50\n## Sentiment Breakdown\npositive: 80\nNeutral: 15\n";
    let breakdown = extract_analysis(raw).unwrap().sentiment_breakdown;
    assert_eq!(breakdown.positive, 0);
    assert_eq!(breakdown.neutral, 15);
    assert_eq!(breakdown.negative, 0);
}

#[test]
fn sentiment_breakdown_does_not_read_other_sections() {
    let raw = "## Sentiment Trend\n- Date: Week 1 | Positive: 40 | Neutral: 30 | Negative: 30\n## Overall Score\n50\n## Sentiment Breakdown\nNeutral: 15\n";
    let breakdown = extract_analysis(raw).unwrap().sentiment_breakdown;
    assert_eq!(breakdown.positive, 0);
    assert_eq!(breakdown.neutral, 15);
}

#[test]
fn mention_with_unknown_sentiment_label_is_kept_verbatim() {
    let raw = "## Overall Score\n50\n## Mentions\n- Platform: Claude | Query: q | Snippet: s | Sentiment: Mixed | Date: 2024-01-01 | Confidence: 0.9\n";
    let mentions = extract_analysis(raw).unwrap().mentions;
    assert_eq!(mentions.len(), 1);
    assert_eq!(mentions[0].sentiment, Sentiment::Other("Mixed".to_string()));
}

#[test]
fn mention_sentiment_is_case_sensitive() {
    let raw = "## Overall Score\n50\n## Mentions\n- Platform: Claude | Query: q | Snippet: s | Sentiment: positive | Date: 2024-01-01 | Confidence: 0.9\n";
    let mentions = extract_analysis(raw).unwrap().mentions;
    assert_eq!(mentions.len(), 1);
    assert_eq!(mentions[0].sentiment, Sentiment::Other("positive".to_string()));
    assert_eq!(mentions[0].sentiment.as_str(), "positive");
}

#[test]
fn every_template_line_yields_a_mention_whatever_its_sentiment() {
    let raw = "## Overall Score\n50\n## Mentions\n\
- Platform: Gemini | Query: a | Snippet: one | Sentiment: Positive | Date: d1 | Confidence: 0.9\n\
- Platform: ChatGPT | Query: b | Snippet: two | Sentiment: positive | Date: d2 | Confidence: 0.8\n\
- Platform: Claude | Query: c | Snippet: three | Sentiment: Mixed | Date: d3 | Confidence: 0.7\n";
    let mentions = extract_analysis(raw).unwrap().mentions;
    let labels: Vec<&str> = mentions.iter().map(|m| m.sentiment.as_str()).collect();
    assert_eq!(labels, vec!["Positive", "positive", "Mixed"]);
    assert_eq!(mentions[0].sentiment, Sentiment::Positive);
}

#[test]
fn mention_fields_are_trimmed() {
    let raw = "## Overall Score\n50\n## Mentions\n  -   Platform:   ChatGPT  |Query:best widget|  Snippet:  Widget Co leads  | Sentiment: Neutral | Date:  Oct 3  | Confidence:   0.5  \n";
    let mentions = extract_analysis(raw).unwrap().mentions;
    assert_eq!(mentions.len(), 1);
    let m = &mentions[0];
    assert_eq!(m.platform, "ChatGPT");
    assert_eq!(m.query, "best widget");
    assert_eq!(m.snippet, "Widget Co leads");
    assert_eq!(m.sentiment, Sentiment::Neutral);
    assert_eq!(m.date, "Oct 3");
    assert_eq!(m.confidence, 0.5);
}

#[test]
fn mention_confidence_accepts_trailing_dot_and_exponent() {
    let raw = "## Overall Score\n50\n## Mentions\n\
- Platform: Gemini | Query: a | Snippet: s | Sentiment: Positive | Date: d | Confidence: 1.\n\
- Platform: Gemini | Query: b | Snippet: s | Sentiment: Positive | Date: d | Confidence: 8.5e-1\n\
- Platform: Gemini | Query: c | Snippet: s | Sentiment: Positive | Date: d | Confidence: 1E0\n";
    let confidences: Vec<f64> = extract_analysis(raw)
        .unwrap()
        .mentions
        .iter()
        .map(|m| m.confidence)
        .collect();
    assert_eq!(confidences, vec![1.0, 0.85, 1.0]);
}

#[test]
fn mention_with_signed_or_bare_dot_confidence_is_skipped() {
    let raw = "## Overall Score\n50\n## Mentions\n\
- Platform: Gemini | Query: a | Snippet: s | Sentiment: Positive | Date: d | Confidence: -0.5\n\
- Platform: Gemini | Query: b | Snippet: s | Sentiment: Positive | Date: d | Confidence: .\n";
    assert!(extract_analysis(raw).unwrap().mentions.is_empty());
}

#[test]
fn mention_snippet_may_contain_pipe() {
    let raw = "## Overall Score\n50\n## Mentions\n- Platform: Gemini | Query: q | Snippet: good | cheap | Sentiment: Positive | Date: d | Confidence: 0.7\n";
    let mentions = extract_analysis(raw).unwrap().mentions;
    assert_eq!(mentions.len(), 1);
    assert_eq!(mentions[0].snippet, "good | cheap");
}

#[test]
fn trend_points_allow_negative_values() {
    let raw = "## Overall Score\n50\n## Sentiment Trend\n- Date: Week 1 | Positive: 110 | Neutral: 5 | Negative: -15\n";
    let trend = extract_analysis(raw).unwrap().sentiment_trend;
    assert_eq!(
        trend,
        vec![TrendPoint {
            date: "Week 1".to_string(),
            positive: 110,
            neutral: 5,
            negative: -15
        }]
    );
}

#[test]
fn trend_line_missing_a_field_is_skipped() {
    let raw = "## Overall Score\n50\n## Sentiment Trend\n- Date: Week 1 | Positive: 40 | Neutral: 30\n- Date: Week 2 | Positive: 45 | Neutral: 30 | Negative: 25\n";
    let trend = extract_analysis(raw).unwrap().sentiment_trend;
    assert_eq!(trend.len(), 1);
    assert_eq!(trend[0].date, "Week 2");
}

#[test]
fn platform_line_with_non_numeric_count_is_skipped() {
    let raw = "## Overall Score\n50\n## Platform Breakdown\n- Platform: ChatGPT | Mentions: many\n- Platform: Gemini | Mentions: 12\n";
    let platforms = extract_analysis(raw).unwrap().platform_breakdown;
    assert_eq!(
        platforms,
        vec![PlatformCount {
            platform: "Gemini".to_string(),
            mentions: 12
        }]
    );
}

#[test]
fn list_lines_outside_their_section_are_ignored() {
    let raw = "- Platform: ChatGPT | Mentions: 4\n## Overall Score\n50\n";
    assert!(extract_analysis(raw).unwrap().platform_breakdown.is_empty());
}

#[test]
fn extractor_never_sets_insights() {
    let result = extract_analysis("## Overall Score\n50\n").unwrap();
    assert!(result.actionable_insights.is_none());
}
