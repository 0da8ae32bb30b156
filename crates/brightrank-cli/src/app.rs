//! Wiring from configuration to provider and storage.

use anyhow::Context as _;
use brightrank_core::{AppConfig, ProviderKind};
use brightrank_provider::{GeminiClient, MockProvider, ResponseProvider};
use brightrank_store::{AppRepository, FileStore};

pub(crate) struct App {
    pub config: AppConfig,
    pub provider: Box<dyn ResponseProvider>,
    pub repo: AppRepository<FileStore>,
}

impl App {
    pub(crate) fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let provider = build_provider(&config)?;
        let store = FileStore::open(&config.data_dir).with_context(|| {
            format!("failed to open data directory {}", config.data_dir.display())
        })?;
        tracing::debug!(
            provider = %config.provider,
            data_dir = %config.data_dir.display(),
            "application initialised"
        );
        Ok(Self {
            config,
            provider,
            repo: AppRepository::new(store),
        })
    }

    pub(crate) fn provider(&self) -> &dyn ResponseProvider {
        self.provider.as_ref()
    }
}

pub(crate) fn build_provider(config: &AppConfig) -> anyhow::Result<Box<dyn ResponseProvider>> {
    match config.provider {
        ProviderKind::Mock => Ok(Box::new(MockProvider::new(
            config.mock_min_latency_ms,
            config.mock_max_latency_ms,
        ))),
        ProviderKind::Gemini => {
            let api_key = config
                .gemini_api_key
                .as_deref()
                .context("GEMINI_API_KEY is required when BRIGHTRANK_PROVIDER=gemini")?;
            let client = GeminiClient::with_base_url(
                api_key,
                &config.gemini_model,
                config.request_timeout_secs,
                &config.gemini_base_url,
            )?
            .with_retry(config.max_retries, config.retry_backoff_base_ms);
            Ok(Box::new(client))
        }
    }
}
