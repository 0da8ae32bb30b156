//! AI response providers for BrightRank.
//!
//! A [`ResponseProvider`] answers four questions about a brand: the raw
//! dashboard analysis text (parsed later by `brightrank-extract`), a keyword
//! summary, actionable insights, and competitor visibility scores.
//! [`MockProvider`] generates plausible data locally; [`GeminiClient`] asks
//! the Gemini `generateContent` API.

pub mod error;
pub mod gemini;
pub mod mock;
pub mod provider;

mod prompt;
mod retry;

pub use error::ProviderError;
pub use gemini::GeminiClient;
pub use mock::MockProvider;
pub use provider::ResponseProvider;
