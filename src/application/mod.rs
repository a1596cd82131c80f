pub mod use_cases;

pub use use_cases::credential_resolver::CredentialResolver;
pub use use_cases::result_persister::ResultPersister;
pub use use_cases::review_enrichment::{EnrichmentSettings, ReviewEnrichmentUseCase};
pub use use_cases::sentiment_report::{SentimentReport, SentimentReportUseCase};
