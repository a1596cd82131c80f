#[path = "config/mod.rs"]
pub mod config_mod;
pub use config_mod as config;
pub mod browser;
pub mod chart;
pub mod response;
pub mod search_clients;
pub mod security;
pub mod storage;
