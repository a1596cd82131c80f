use crate::domain::error::Result;
use crate::domain::restaurant::{BusinessResult, RestaurantsDocument};
use crate::infrastructure::storage::{read_json_document, write_json_document};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct RestaurantsDocumentRef<'a> {
    restaurants: &'a [BusinessResult],
}

/// Writes enriched results to a fixed path, replacing the previous run.
pub struct ResultPersister {
    output_path: PathBuf,
}

impl ResultPersister {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn persist(&self, results: &[BusinessResult]) -> Result<PathBuf> {
        write_json_document(&self.output_path, &RestaurantsDocumentRef { restaurants: results })?;
        tracing::info!(
            path = %self.output_path.display(),
            count = results.len(),
            "Results saved"
        );
        Ok(self.output_path.clone())
    }

    pub fn load(&self) -> Result<RestaurantsDocument> {
        read_json_document(&self.output_path)
    }
}
