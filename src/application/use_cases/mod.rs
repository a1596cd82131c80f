pub mod credential_resolver;
pub mod result_persister;
pub mod review_enrichment;
pub mod sentiment_report;
