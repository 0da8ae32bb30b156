use thiserror::Error;

/// The extractor's only failure: the mandatory overall score could not be
/// resolved to a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionFailed {
    #[error("response has no `## Overall Score` section")]
    MissingOverallScore,

    #[error("`## Overall Score` section has no usable score: {0:?}")]
    InvalidOverallScore(String),
}
