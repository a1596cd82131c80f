use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::application::{
    CredentialResolver, EnrichmentSettings, ResultPersister, ReviewEnrichmentUseCase,
    SentimentReportUseCase,
};
use crate::domain::app_config::AppConfig;
use crate::domain::error::Result;
use crate::domain::restaurant::SearchQuery;
use crate::infrastructure::browser::{BrowserConfig, HeadlessBrowser, PageRenderer};
use crate::infrastructure::search_clients::{BusinessSearch, YelpSearchClient};
use crate::infrastructure::security::keyring::KeyringManager;
use crate::infrastructure::security::SecretStore;

/// Everything a trigger needs, built once per process.
pub struct AppState {
    pub config: AppConfig,
    pub enrichment: ReviewEnrichmentUseCase,
    pub persister: ResultPersister,
    pub sentiment: SentimentReportUseCase,
}

impl AppState {
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let secrets = Arc::new(KeyringManager::new(&config.keyring_service));
        let search = Arc::new(YelpSearchClient::new(
            &config.search_url,
            config.http_timeout_secs,
        )?);
        let renderer = Arc::new(HeadlessBrowser::with_config(BrowserConfig {
            binary_path: PathBuf::from(&config.browser_path),
            navigation_timeout: Duration::from_secs(config.navigation_timeout_secs),
            render_budget_ms: config.render_budget_ms,
        }));

        tracing::info!(
            browser = %config.browser_path,
            search_url = %config.search_url,
            "Handlers configured"
        );

        Ok(Self::with_adapters(config, secrets, search, renderer))
    }

    pub fn with_adapters(
        config: AppConfig,
        secrets: Arc<dyn SecretStore + Send + Sync>,
        search: Arc<dyn BusinessSearch + Send + Sync>,
        renderer: Arc<dyn PageRenderer + Send + Sync>,
    ) -> Self {
        let credentials = CredentialResolver::new(secrets, &config.secret_field);
        let settings = EnrichmentSettings {
            secret_name: config.secret_name.clone(),
            secret_region: config.secret_region.clone(),
            review_marker: config.review_marker.clone(),
            max_reviews: config.max_reviews,
        };

        Self {
            enrichment: ReviewEnrichmentUseCase::new(credentials, search, renderer, settings),
            persister: ResultPersister::new(&config.output_path),
            sentiment: SentimentReportUseCase::new(&config.graph_path),
            config,
        }
    }

    pub fn default_query(&self) -> SearchQuery {
        SearchQuery {
            location: self.config.location.clone(),
            category: self.config.category.clone(),
            limit: self.config.limit,
        }
    }
}
