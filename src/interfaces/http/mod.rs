use crate::interfaces::handlers::{handle_scrape, handle_sentiment, HandlerResponse};
use crate::interfaces::state::AppState;
use actix_web::http::StatusCode;
use actix_web::{dev::Server, get, post, web, App, HttpResponse, HttpServer, Responder};
use serde_json::Value;
use std::sync::Arc;

pub struct HttpState {
    pub app_state: Arc<AppState>,
}

/// Empty bodies are treated as a null event.
fn event_from_body(body: &web::Bytes) -> Result<Value, String> {
    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| format!("Invalid event: {}", e))
}

fn respond(response: HandlerResponse) -> HttpResponse {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(response)
}

#[post("/scrape")]
async fn scrape(data: web::Data<HttpState>, body: web::Bytes) -> impl Responder {
    tracing::info!("Scrape triggered");
    let response = match event_from_body(&body) {
        Ok(event) => handle_scrape(&data.app_state, event).await,
        Err(message) => HandlerResponse::error(message),
    };
    respond(response)
}

#[post("/sentiment")]
async fn sentiment(data: web::Data<HttpState>, body: web::Bytes) -> impl Responder {
    tracing::info!("Sentiment report triggered");
    let event = match event_from_body(&body) {
        Ok(event) => event,
        Err(message) => return respond(HandlerResponse::error(message)),
    };

    let app_state = data.app_state.clone();
    match web::block(move || handle_sentiment(&app_state, event)).await {
        Ok(response) => respond(response),
        Err(e) => {
            tracing::error!(error = %e, "Sentiment worker failed");
            respond(HandlerResponse::error(format!("Sentiment worker failed: {}", e)))
        }
    }
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(scrape).service(sentiment).service(health);
}

pub fn start_server(app_state: Arc<AppState>) -> std::io::Result<Server> {
    let bind_address = app_state.config.bind_address.clone();
    let state = web::Data::new(HttpState { app_state });

    let server = HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .bind(&bind_address)?
        .run();

    tracing::info!(address = %bind_address, "Trigger server listening");
    Ok(server)
}
