use crate::application::use_cases::credential_resolver::CredentialResolver;
use crate::domain::error::{AppError, Result};
use crate::domain::restaurant::{Business, BusinessResult, PipelineOutcome, SearchQuery, REVIEW_CAP};
use crate::infrastructure::browser::{extract_reviews, PageRenderer};
use crate::infrastructure::search_clients::BusinessSearch;
use std::sync::Arc;
use validator::Validate;

pub const MISSING_CREDENTIAL_MESSAGE: &str = "API key not found.";

#[derive(Debug, Clone)]
pub struct EnrichmentSettings {
    pub secret_name: String,
    pub secret_region: String,
    pub review_marker: String,
    pub max_reviews: usize,
}

/// Search, then scrape a handful of reviews for every hit.
pub struct ReviewEnrichmentUseCase {
    credentials: CredentialResolver,
    search: Arc<dyn BusinessSearch + Send + Sync>,
    renderer: Arc<dyn PageRenderer + Send + Sync>,
    settings: EnrichmentSettings,
}

impl ReviewEnrichmentUseCase {
    pub fn new(
        credentials: CredentialResolver,
        search: Arc<dyn BusinessSearch + Send + Sync>,
        renderer: Arc<dyn PageRenderer + Send + Sync>,
        settings: EnrichmentSettings,
    ) -> Self {
        Self {
            credentials,
            search,
            renderer,
            settings,
        }
    }

    pub async fn run(&self, query: &SearchQuery) -> PipelineOutcome {
        if let Err(e) = query.validate() {
            return PipelineOutcome::Failed(format!("Invalid search query: {}", e));
        }

        let token = match self.resolve_token().await {
            Ok(token) => token,
            Err(AppError::NotFound(detail)) => {
                tracing::error!(secret = %self.settings.secret_name, %detail, "API key missing");
                return PipelineOutcome::Failed(MISSING_CREDENTIAL_MESSAGE.to_string());
            }
            Err(e) => {
                tracing::error!(secret = %self.settings.secret_name, error = %e, "Error retrieving API key");
                return PipelineOutcome::Failed(format!("Error retrieving API key: {}", e));
            }
        };

        let response = match self.search.search(&token, query).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, location = %query.location, "Search request failed");
                return PipelineOutcome::Failed(format!(
                    "Error fetching data from search API: {}",
                    e
                ));
            }
        };

        if response.businesses.is_empty() {
            tracing::info!(location = %query.location, category = %query.category, "Search returned no businesses");
            return PipelineOutcome::Empty;
        }

        let total = response.businesses.len();
        tracing::info!(count = total, location = %query.location, "Enriching search results");

        let mut results = Vec::with_capacity(total);
        for (index, business) in response.businesses.into_iter().enumerate() {
            let reviews = self.reviews_for(&business).await;
            tracing::debug!(
                business = %business.name,
                position = index + 1,
                total,
                reviews = reviews.len(),
                "Business enriched"
            );
            results.push(BusinessResult::from_business(index, business, reviews));
        }

        PipelineOutcome::Completed(results)
    }

    /// Secret reads block on OS IPC and run on the blocking pool.
    async fn resolve_token(&self) -> Result<String> {
        let credentials = self.credentials.clone();
        let name = self.settings.secret_name.clone();
        let region = self.settings.secret_region.clone();
        tokio::task::spawn_blocking(move || credentials.resolve(&name, &region))
            .await
            .unwrap_or_else(|e| {
                Err(AppError::Internal(format!("Credential lookup task failed: {}", e)))
            })
    }

    /// Never fails: any scrape error is logged and becomes an empty list.
    async fn reviews_for(&self, business: &Business) -> Vec<String> {
        let Some(url) = business.url.as_deref().filter(|url| !url.is_empty()) else {
            tracing::warn!(business = %business.name, "No detail URL, skipping reviews");
            return Vec::new();
        };

        match self.scrape(url).await {
            Ok(reviews) => {
                if reviews.is_empty() {
                    tracing::debug!(business = %business.name, url, "No review elements found");
                }
                reviews
            }
            Err(e) => {
                tracing::warn!(business = %business.name, url, error = %e, "Error fetching reviews");
                Vec::new()
            }
        }
    }

    async fn scrape(&self, url: &str) -> Result<Vec<String>> {
        let html = self.renderer.render(url).await?;
        let max = self.settings.max_reviews.min(REVIEW_CAP);
        extract_reviews(&html, &self.settings.review_marker, max)
    }
}
