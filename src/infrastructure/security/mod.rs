pub mod keyring;

use crate::domain::error::Result;

/// Read-only access to a managed secret store.
///
/// `Ok(None)` means the store has no record under `name`, or the record
/// carries no string payload. Rejected requests surface as
/// [`AppError::AccessError`](crate::domain::error::AppError::AccessError).
pub trait SecretStore {
    fn get_secret_string(&self, name: &str, region: &str) -> Result<Option<String>>;
}
