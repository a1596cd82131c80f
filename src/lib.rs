pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

mod app;

pub use app::run;
pub use domain::app_config::AppConfig;
pub use domain::error::{AppError, Result};
pub use interfaces::handlers::{handle_scrape, handle_sentiment, HandlerResponse};
pub use interfaces::state::AppState;
