use super::BusinessSearch;
use crate::domain::error::{AppError, Result};
use crate::domain::restaurant::{SearchQuery, SearchResponse};
use async_trait::async_trait;
use std::time::Duration;

pub struct YelpSearchClient {
    client: reqwest::Client,
    search_url: String,
}

impl YelpSearchClient {
    pub fn new(search_url: &str, timeout_secs: u64) -> Result<Self> {
        url::Url::parse(search_url)
            .map_err(|e| AppError::ConfigError(format!("Invalid search URL {}: {}", search_url, e)))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            search_url: search_url.to_string(),
        })
    }
}

#[async_trait]
impl BusinessSearch for YelpSearchClient {
    async fn search(&self, token: &str, query: &SearchQuery) -> Result<SearchResponse> {
        tracing::debug!(
            location = %query.location,
            category = %query.category,
            limit = query.limit,
            "Searching businesses"
        );

        let limit = query.limit.to_string();
        let response = self
            .client
            .get(&self.search_url)
            .bearer_auth(token)
            .query(&[
                ("location", query.location.as_str()),
                ("categories", query.category.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::HttpError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::HttpError(format!(
                "API error ({}): {}",
                status, text
            )));
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| AppError::ParseError(format!("Failed to parse JSON: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn paris_query() -> SearchQuery {
        SearchQuery {
            location: "Paris".to_string(),
            category: "restaurants".to_string(),
            limit: 2,
        }
    }

    fn client_for(server: &MockServer) -> YelpSearchClient {
        YelpSearchClient::new(&format!("{}/v3/businesses/search", server.uri()), 5).unwrap()
    }

    #[tokio::test]
    async fn test_search_sends_bearer_and_query() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "businesses": [
                {
                    "id": "b1",
                    "name": "Le Comptoir",
                    "rating": 4.5,
                    "price": "€€",
                    "location": { "address1": "9 Carrefour de l'Odéon" },
                    "display_phone": "+33 1 44 27 07 97",
                    "url": "https://example.test/biz/le-comptoir"
                },
                { "id": "b2", "name": "Chez Janou", "location": {} }
            ]
        });

        Mock::given(method("GET"))
            .and(path("/v3/businesses/search"))
            .and(header("authorization", "Bearer secret-token"))
            .and(query_param("location", "Paris"))
            .and(query_param("categories", "restaurants"))
            .and(query_param("limit", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .search("secret-token", &paris_query())
            .await
            .unwrap();

        assert_eq!(response.businesses.len(), 2);
        assert_eq!(response.businesses[0].name, "Le Comptoir");
        assert_eq!(response.businesses[1].rating, None);
    }

    #[tokio::test]
    async fn test_non_success_status_is_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .search("bad-token", &paris_query())
            .await
            .unwrap_err();

        match err {
            AppError::HttpError(msg) => assert!(msg.contains("401")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .search("token", &paris_query())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ParseError(_)));
    }

    #[test]
    fn test_invalid_search_url_is_rejected() {
        assert!(matches!(
            YelpSearchClient::new("not a url", 5),
            Err(AppError::ConfigError(_))
        ));
    }
}
