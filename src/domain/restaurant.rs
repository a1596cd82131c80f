use serde::{Deserialize, Serialize};
use validator::Validate;

/// Hard upper bound on reviews kept per business.
pub const REVIEW_CAP: usize = 10;

/// Parameters of one search request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SearchQuery {
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(range(min = 1, max = 50))]
    pub limit: u32,
}

/// Body returned by the business search endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub businesses: Vec<Business>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Business {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub location: BusinessLocation,
    #[serde(default)]
    pub display_phone: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BusinessLocation {
    #[serde(default)]
    pub address1: Option<String>,
}

/// One enriched search hit as written to the output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessResult {
    /// Zero-based position in the search response.
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    pub rating: Option<f64>,
    pub price: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub reviews: Vec<String>,
}

impl BusinessResult {
    pub fn from_business(sequence: usize, business: Business, mut reviews: Vec<String>) -> Self {
        reviews.truncate(REVIEW_CAP);
        Self {
            id: sequence.to_string(),
            restaurant_id: business.id,
            name: business.name,
            rating: business.rating,
            price: business.price,
            address: business.location.address1,
            phone: business.display_phone,
            url: business.url,
            reviews,
        }
    }
}

/// Top-level shape of the persisted results file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RestaurantsDocument {
    pub restaurants: Vec<BusinessResult>,
}

/// What a pipeline run produced. Setup failures are data, not faults.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    Completed(Vec<BusinessResult>),
    Empty,
    Failed(String),
}

impl PipelineOutcome {
    pub const NO_RESULTS_MESSAGE: &'static str = "No restaurants found.";

    pub fn error_message(&self) -> Option<&str> {
        match self {
            PipelineOutcome::Completed(_) => None,
            PipelineOutcome::Empty => Some(Self::NO_RESULTS_MESSAGE),
            PipelineOutcome::Failed(message) => Some(message),
        }
    }
}
