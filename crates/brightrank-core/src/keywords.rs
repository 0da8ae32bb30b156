use serde::{Deserialize, Serialize};

/// Sentiment attached to a keyword-level mention; `Unknown` when the provider
/// could not tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeywordSentiment {
    Positive,
    Negative,
    Neutral,
    Unknown,
}

impl std::fmt::Display for KeywordSentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            KeywordSentiment::Positive => "Positive",
            KeywordSentiment::Negative => "Negative",
            KeywordSentiment::Neutral => "Neutral",
            KeywordSentiment::Unknown => "Unknown",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMention {
    pub text: String,
    pub sentiment: KeywordSentiment,
}

/// Summary of how a brand shows up for its tracked keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub summary: String,
    /// Free-form overall label such as `Mixed` or `Positive`.
    pub sentiment: String,
    pub score: u32,
    pub mentions: Vec<KeywordMention>,
}
