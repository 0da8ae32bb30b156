//! Prompt text sent to language-model providers.

use std::fmt::Write as _;

use brightrank_core::AnalysisResult;

pub(crate) fn dashboard(brand: &str, keywords: &[String], date_range: &str) -> String {
    format!(
        "You are a brand visibility analyst. Estimate how the brand \"{brand}\" appears in \
         answers from AI assistants (ChatGPT, Gemini, Claude) for the period \"{date_range}\", \
         focusing on these keywords: {}.\n\n{}",
        keyword_list(keywords),
        brightrank_extract::format_instructions()
    )
}

pub(crate) fn keyword_analysis(brand: &str, keywords: &[String]) -> String {
    format!(
        "Analyze how AI assistants associate the brand \"{brand}\" with these keywords: {}.\n\
         Reply with only a JSON object of the form \
         {{\"summary\": string, \"sentiment\": \"Mixed\" | \"Positive\" | \"Neutral\" | \"Negative\", \
         \"score\": integer 0-100, \"mentions\": [{{\"text\": string, \
         \"sentiment\": \"Positive\" | \"Negative\" | \"Neutral\" | \"Unknown\"}}]}}.",
        keyword_list(keywords)
    )
}

pub(crate) fn actionable_insights(brand: &str, analysis: &AnalysisResult) -> String {
    let b = &analysis.sentiment_breakdown;
    let mut prompt = format!(
        "Brand \"{brand}\" has an AI visibility score of {} with {} total mentions \
         ({}% positive, {}% neutral, {}% negative).\n",
        analysis.overall_score, analysis.total_mentions, b.positive, b.neutral, b.negative
    );
    if !analysis.mentions.is_empty() {
        prompt.push_str("Recent mentions:\n");
        for m in analysis.mentions.iter().take(5) {
            let _ = writeln!(prompt, "- [{}] {} ({})", m.platform, m.snippet, m.sentiment);
        }
    }
    prompt.push_str(
        "Suggest three actions to improve the brand's AI visibility. Reply with only a JSON \
         object of the form {\"insights\": [{\"category\": \"Content Strategy\" | \
         \"Community Engagement\" | \"Reputation Management\" | \"SEO Optimization\", \
         \"priority\": \"High\" | \"Medium\" | \"Low\", \"title\": string, \
         \"description\": string}]}.",
    );
    prompt
}

pub(crate) fn competitor_scores(brand: &str, keywords: &[String], competitors: &[String]) -> String {
    format!(
        "Compared with \"{brand}\" for the keywords {}, estimate an AI visibility score from 0 to \
         100 for each of these competitors: {}.\n\
         Reply with only a JSON array of the form [{{\"name\": string, \"visibility\": integer}}], \
         one entry per competitor in the same order.",
        keyword_list(keywords),
        competitors.join(", ")
    )
}

fn keyword_list(keywords: &[String]) -> String {
    if keywords.is_empty() {
        "(none)".to_string()
    } else {
        keywords.join(", ")
    }
}
