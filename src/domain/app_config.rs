use serde::{Deserialize, Serialize};
use validator::Validate;

/// Runtime settings shared by both handlers.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct AppConfig {
    /// Name of the secret holding the search API token.
    #[validate(length(min = 1))]
    pub secret_name: String,
    #[validate(length(min = 1))]
    pub secret_region: String,
    /// JSON field inside the secret payload that carries the token.
    #[validate(length(min = 1))]
    pub secret_field: String,
    #[validate(length(min = 1))]
    pub keyring_service: String,

    #[validate(url)]
    pub search_url: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(range(min = 1, max = 50))]
    pub limit: u32,
    #[validate(range(min = 1))]
    pub http_timeout_secs: u64,

    #[validate(length(min = 1))]
    pub browser_path: String,
    #[validate(range(min = 1))]
    pub navigation_timeout_secs: u64,
    /// Virtual time granted to page scripts before the DOM is dumped.
    #[validate(range(min = 100, max = 60000))]
    pub render_budget_ms: u64,
    /// CSS class that marks a review container on detail pages.
    #[validate(length(min = 1))]
    pub review_marker: String,
    #[validate(range(max = 10))]
    pub max_reviews: usize,

    #[validate(length(min = 1))]
    pub output_path: String,
    #[validate(length(min = 1))]
    pub graph_path: String,
    #[validate(length(min = 1))]
    pub bind_address: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            secret_name: "apikey".to_string(),
            secret_region: "eu-north-1".to_string(),
            secret_field: "yelp_api_key".to_string(),
            keyring_service: "restoscope".to_string(),
            search_url: "https://api.yelp.com/v3/businesses/search".to_string(),
            location: "Paris".to_string(),
            category: "restaurants".to_string(),
            limit: 30,
            http_timeout_secs: 15,
            browser_path: "chromium".to_string(),
            navigation_timeout_secs: 30,
            render_budget_ms: 5000,
            review_marker: "comment__09f24__D0cxf".to_string(),
            max_reviews: 10,
            output_path: "/tmp/restaurants_data.json".to_string(),
            graph_path: "./sentiment_graph.png".to_string(),
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}
