use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domain::restaurant::{PipelineOutcome, SearchQuery};
use crate::domain::sentiment::default_samples;
use crate::interfaces::state::AppState;

/// `{statusCode, body}` envelope returned to whatever fired the trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    /// JSON-encoded result object.
    pub body: String,
}

impl HandlerResponse {
    /// 500 when the result object carries an `error` key, 200 otherwise.
    pub fn from_result(result: Value) -> Self {
        let status_code = if result.get("error").is_some() { 500 } else { 200 };
        Self {
            status_code,
            body: result.to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::from_result(json!({ "error": message.into() }))
    }

    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScrapeEvent {
    pub location: Option<String>,
    pub category: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SentimentEvent {
    pub reviews: Option<Vec<String>>,
}

fn parse_event<T: Default + for<'de> Deserialize<'de>>(event: Value) -> Result<T, String> {
    if event.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(event).map_err(|e| format!("Invalid event: {}", e))
}

pub async fn handle_scrape(state: &AppState, event: Value) -> HandlerResponse {
    let event: ScrapeEvent = match parse_event(event) {
        Ok(event) => event,
        Err(message) => return HandlerResponse::error(message),
    };

    let defaults = state.default_query();
    let query = SearchQuery {
        location: event.location.unwrap_or(defaults.location),
        category: event.category.unwrap_or(defaults.category),
        limit: event.limit.unwrap_or(defaults.limit),
    };

    let results = match state.enrichment.run(&query).await {
        PipelineOutcome::Completed(results) => results,
        outcome => {
            let message = outcome.error_message().unwrap_or_default().to_string();
            return HandlerResponse::error(message);
        }
    };

    match state.persister.persist(&results) {
        Ok(path) => HandlerResponse::from_result(json!({
            "message": "Data successfully saved.",
            "file_path": path.display().to_string(),
            "count": results.len(),
        })),
        Err(e) => {
            tracing::error!(error = %e, "Failed to persist results");
            HandlerResponse::error(format!("Error saving results: {}", e))
        }
    }
}

pub fn handle_sentiment(state: &AppState, event: Value) -> HandlerResponse {
    let event: SentimentEvent = match parse_event(event) {
        Ok(event) => event,
        Err(message) => return HandlerResponse::error(message),
    };
    let reviews = event.reviews.unwrap_or_else(default_samples);

    match state.sentiment.generate(&reviews) {
        Ok(report) => {
            let scores: Vec<f64> = report.samples.iter().map(|s| s.compound).collect();
            let samples: Vec<Value> = report
                .samples
                .iter()
                .map(|s| {
                    json!({
                        "text": s.text,
                        "compound": s.compound,
                        "positive": s.positive,
                        "negative": s.negative,
                        "neutral": s.neutral,
                        "leaning": s.leaning(),
                    })
                })
                .collect();
            HandlerResponse::from_result(json!({
                "message": "Graph generated successfully.",
                "graph_path": report.graph_path.display().to_string(),
                "scores": scores,
                "samples": samples,
            }))
        }
        Err(e) => {
            tracing::error!(error = %e, "Sentiment report failed");
            HandlerResponse::error(e.to_string())
        }
    }
}
