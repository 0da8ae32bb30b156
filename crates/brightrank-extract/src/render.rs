//! Writes analysis records into the `## Heading` template.

use std::fmt::Write as _;

use brightrank_core::AnalysisResult;

use crate::section::{
    MENTIONS, OVERALL_SCORE, PLATFORM_BREAKDOWN, SENTIMENT_BREAKDOWN, SENTIMENT_TREND,
    TOTAL_MENTIONS, VISIBILITY_CHANGE,
};

/// Render `analysis` in the template [`extract_analysis`] reads.
///
/// Free-text fields are flattened onto one line and `|` is replaced with `/`
/// so that every record survives a render → extract round trip.
///
/// [`extract_analysis`]: crate::extract_analysis
#[must_use]
pub fn render_analysis(analysis: &AnalysisResult) -> String {
    let mut out = String::new();
    let breakdown = &analysis.sentiment_breakdown;

    // Writing to a String cannot fail.
    let _ = writeln!(out, "## {OVERALL_SCORE}\n{}", analysis.overall_score);
    let _ = writeln!(out, "## {VISIBILITY_CHANGE}\n{}%", analysis.visibility_change);
    let _ = writeln!(out, "## {TOTAL_MENTIONS}\n{}", analysis.total_mentions);
    let _ = writeln!(
        out,
        "## {SENTIMENT_BREAKDOWN}\nPositive: {}%\nNeutral: {}%\nNegative: {}%",
        breakdown.positive, breakdown.neutral, breakdown.negative
    );

    let _ = writeln!(out, "## {MENTIONS}");
    for m in &analysis.mentions {
        let _ = writeln!(
            out,
            "- Platform: {} | Query: {} | Snippet: {} | Sentiment: {} | Date: {} | Confidence: {}",
            one_line(&m.platform),
            one_line(&m.query),
            one_line(&m.snippet),
            m.sentiment,
            one_line(&m.date),
            m.confidence
        );
    }

    let _ = writeln!(out, "## {SENTIMENT_TREND}");
    for p in &analysis.sentiment_trend {
        let _ = writeln!(
            out,
            "- Date: {} | Positive: {} | Neutral: {} | Negative: {}",
            one_line(&p.date),
            p.positive,
            p.neutral,
            p.negative
        );
    }

    let _ = writeln!(out, "## {PLATFORM_BREAKDOWN}");
    for p in &analysis.platform_breakdown {
        let _ = writeln!(
            out,
            "- Platform: {} | Mentions: {}",
            one_line(&p.platform),
            p.mentions
        );
    }

    out
}

/// Prompt text describing the response template, for providers that
/// generate it from a language model.
#[must_use]
pub fn format_instructions() -> String {
    format!(
        "Respond using exactly these sections, each introduced by a line starting with `## `:\n\
         ## {OVERALL_SCORE}\n<integer 0-100>\n\
         ## {VISIBILITY_CHANGE}\n<signed percentage, e.g. -3.5%>\n\
         ## {TOTAL_MENTIONS}\n<integer>\n\
         ## {SENTIMENT_BREAKDOWN}\nPositive: <integer>%\nNeutral: <integer>%\nNegative: <integer>%\n\
         ## {MENTIONS}\n- Platform: <platform> | Query: <query> | Snippet: <snippet> | Sentiment: <Positive|Negative|Neutral> | Date: <YYYY-MM-DD> | Confidence: <0.00-1.00>\n\
         ## {SENTIMENT_TREND}\n- Date: <label> | Positive: <integer> | Neutral: <integer> | Negative: <integer>\n\
         ## {PLATFORM_BREAKDOWN}\n- Platform: <platform> | Mentions: <integer>\n\
         Do not add any other text."
    )
}

fn one_line(field: &str) -> String {
    field
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "/")
}
