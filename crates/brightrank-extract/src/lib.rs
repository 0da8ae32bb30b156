//! Response extractor for BrightRank.
//!
//! Turns the semi-structured text an AI provider returns (sections introduced
//! by `## Heading` lines) into an [`AnalysisResult`]. Only the overall score
//! is mandatory; every other section degrades to zero or empty when missing
//! or malformed.
//!
//! [`render_analysis`] writes a record back into the same template.
//!
//! [`AnalysisResult`]: brightrank_core::AnalysisResult

pub mod error;
pub mod extract;
pub mod render;
pub mod section;

pub use error::ExtractionFailed;
pub use extract::extract_analysis;
pub use render::{format_instructions, render_analysis};
pub use section::section;
