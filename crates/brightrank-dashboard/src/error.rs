use brightrank_core::ProfileError;
use brightrank_extract::ExtractionFailed;
use brightrank_provider::ProviderError;
use brightrank_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("brand name is not set; complete onboarding or update the profile")]
    MissingBrand,

    #[error("no keywords found; add some to the profile first")]
    NoKeywords,

    #[error("report title must not be blank")]
    BlankTitle,

    #[error("no brand profile saved; run onboarding first")]
    NotOnboarded,

    #[error("could not load dashboard data: {0}")]
    Provider(#[from] ProviderError),

    #[error("could not load dashboard data: {0}")]
    Extraction(#[from] ExtractionFailed),

    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("invalid profile: {0}")]
    Profile(#[from] ProfileError),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
}
