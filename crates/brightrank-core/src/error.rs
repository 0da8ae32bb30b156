use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read profile file {path}: {source}")]
    ProfileFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profile file: {0}")]
    ProfileFileParse(#[from] serde_yaml::Error),

    #[error("invalid profile: {0}")]
    Profile(#[from] ProfileError),
}

/// Validation failures for brand profile edits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("brand name must be non-empty")]
    BlankBrandName,

    #[error("keyword must be non-empty")]
    BlankKeyword,

    #[error("keyword '{0}' is already tracked")]
    DuplicateKeyword(String),

    #[error("competitor name must be non-empty")]
    BlankCompetitorName,

    #[error("competitor '{0}' is already tracked")]
    DuplicateCompetitor(String),

    #[error("invalid visibility score {0}; must be between 0 and 100")]
    ScoreOutOfRange(i64),
}
