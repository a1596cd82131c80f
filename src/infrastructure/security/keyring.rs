use super::SecretStore;
use crate::domain::error::{AppError, Result};
use keyring::Entry;

/// Secret store backed by the platform keyring. Regions become part of
/// the service name so the same secret can be provisioned per region.
pub struct KeyringManager {
    service: String,
}

impl KeyringManager {
    pub fn new(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }

    pub fn service_for(&self, region: &str) -> String {
        format!("{}/{}", self.service, region)
    }

    fn entry(&self, name: &str, region: &str) -> Result<Entry> {
        Entry::new(&self.service_for(region), name)
            .map_err(|e| AppError::AccessError(format!("Failed to create entry: {}", e)))
    }
}

impl SecretStore for KeyringManager {
    fn get_secret_string(&self, name: &str, region: &str) -> Result<Option<String>> {
        let entry = self.entry(name, region)?;

        match entry.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(keyring::Error::BadEncoding(_)) => {
                tracing::warn!(secret = name, "Secret does not contain a string payload");
                Ok(None)
            }
            Err(e) => Err(AppError::AccessError(format!(
                "Failed to read secret {}: {}",
                name, e
            ))),
        }
    }
}
