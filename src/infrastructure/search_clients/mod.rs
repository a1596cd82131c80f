pub mod yelp;

use crate::domain::error::Result;
use crate::domain::restaurant::{SearchQuery, SearchResponse};
use async_trait::async_trait;

pub use yelp::YelpSearchClient;

#[async_trait]
pub trait BusinessSearch {
    /// One search request, attempted exactly once.
    async fn search(&self, token: &str, query: &SearchQuery) -> Result<SearchResponse>;
}
