use crate::domain::error::{AppError, Result};
use crate::infrastructure::security::SecretStore;
use std::sync::Arc;

/// Fetches the search API token. Nothing is cached; every call reads the
/// store again.
#[derive(Clone)]
pub struct CredentialResolver {
    store: Arc<dyn SecretStore + Send + Sync>,
    field: String,
}

impl CredentialResolver {
    pub fn new(store: Arc<dyn SecretStore + Send + Sync>, field: &str) -> Self {
        Self {
            store,
            field: field.to_string(),
        }
    }

    /// Reads secret `name` in `region`; the payload is a JSON object and the
    /// token is its string field.
    pub fn resolve(&self, name: &str, region: &str) -> Result<String> {
        let payload = self
            .store
            .get_secret_string(name, region)?
            .ok_or_else(|| {
                tracing::warn!(secret = name, region, "Secret has no string payload");
                AppError::NotFound(format!("Secret {} does not contain a string payload", name))
            })?;

        let document: serde_json::Value = serde_json::from_str(&payload)
            .map_err(|e| AppError::ParseError(format!("Secret {} is not valid JSON: {}", name, e)))?;

        document
            .get(&self.field)
            .and_then(|value| value.as_str())
            .filter(|token| !token.is_empty())
            .map(|token| token.to_string())
            .ok_or_else(|| {
                AppError::NotFound(format!("Secret {} has no {} field", name, self.field))
            })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory store keyed by (name, region); `None` values model records
    /// without a string payload.
    #[derive(Default)]
    pub(crate) struct MemorySecretStore {
        pub secrets: HashMap<(String, String), Option<String>>,
        pub deny: bool,
        pub reads: Mutex<usize>,
    }

    impl MemorySecretStore {
        pub(crate) fn with_token(name: &str, region: &str, field: &str, token: &str) -> Self {
            let mut secrets = HashMap::new();
            secrets.insert(
                (name.to_string(), region.to_string()),
                Some(serde_json::json!({ field: token }).to_string()),
            );
            Self {
                secrets,
                ..Default::default()
            }
        }
    }

    impl SecretStore for MemorySecretStore {
        fn get_secret_string(&self, name: &str, region: &str) -> Result<Option<String>> {
            *self.reads.lock().unwrap() += 1;
            if self.deny {
                return Err(AppError::AccessError("request rejected".to_string()));
            }
            Ok(self
                .secrets
                .get(&(name.to_string(), region.to_string()))
                .cloned()
                .flatten())
        }
    }

    fn resolver(store: MemorySecretStore) -> (CredentialResolver, Arc<MemorySecretStore>) {
        let store = Arc::new(store);
        (CredentialResolver::new(store.clone(), "yelp_api_key"), store)
    }

    #[test]
    fn test_resolves_token_field() {
        let (resolver, _) = resolver(MemorySecretStore::with_token(
            "apikey",
            "eu-north-1",
            "yelp_api_key",
            "tok-123",
        ));
        assert_eq!(resolver.resolve("apikey", "eu-north-1").unwrap(), "tok-123");
    }

    #[test]
    fn test_unknown_region_is_not_found() {
        let (resolver, _) = resolver(MemorySecretStore::with_token(
            "apikey",
            "eu-north-1",
            "yelp_api_key",
            "tok-123",
        ));
        let err = resolver.resolve("apikey", "us-east-1").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_record_without_string_payload_is_not_found() {
        let mut store = MemorySecretStore::default();
        store
            .secrets
            .insert(("apikey".to_string(), "eu-north-1".to_string()), None);
        let (resolver, _) = resolver(store);
        let err = resolver.resolve("apikey", "eu-north-1").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_payload_missing_field_is_not_found() {
        let (resolver, _) = resolver(MemorySecretStore::with_token(
            "apikey",
            "eu-north-1",
            "other_key",
            "tok-123",
        ));
        let err = resolver.resolve("apikey", "eu-north-1").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_rejected_request_propagates_access_error() {
        let store = MemorySecretStore {
            deny: true,
            ..Default::default()
        };
        let (resolver, _) = resolver(store);
        let err = resolver.resolve("apikey", "eu-north-1").unwrap_err();
        assert!(matches!(err, AppError::AccessError(_)));
    }

    #[test]
    fn test_every_call_reads_the_store() {
        let (resolver, store) = resolver(MemorySecretStore::with_token(
            "apikey",
            "eu-north-1",
            "yelp_api_key",
            "tok-123",
        ));
        resolver.resolve("apikey", "eu-north-1").unwrap();
        resolver.resolve("apikey", "eu-north-1").unwrap();
        assert_eq!(*store.reads.lock().unwrap(), 2);
    }
}
