use crate::domain::error::{AppError, Result};
use crate::domain::sentiment::SentimentSample;
use crate::infrastructure::chart::{save_scatter, ChartLayout};
use crate::infrastructure::storage::ensure_parent_dir;
use std::path::PathBuf;
use vader_sentiment::SentimentIntensityAnalyzer;

#[derive(Debug, Clone)]
pub struct SentimentReport {
    pub graph_path: PathBuf,
    pub samples: Vec<SentimentSample>,
}

/// Scores review texts with the VADER lexicon and plots the compound scores.
pub struct SentimentReportUseCase {
    graph_path: PathBuf,
    layout: ChartLayout,
}

impl SentimentReportUseCase {
    pub fn new(graph_path: impl Into<PathBuf>) -> Self {
        Self {
            graph_path: graph_path.into(),
            layout: ChartLayout::default(),
        }
    }

    pub fn with_layout(mut self, layout: ChartLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn score(&self, texts: &[String]) -> Vec<SentimentSample> {
        let analyzer = SentimentIntensityAnalyzer::new();
        texts
            .iter()
            .map(|text| {
                let scores = analyzer.polarity_scores(text);
                let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);
                SentimentSample {
                    text: text.clone(),
                    compound: get("compound").clamp(-1.0, 1.0),
                    positive: get("pos"),
                    negative: get("neg"),
                    neutral: get("neu"),
                }
            })
            .collect()
    }

    /// Scores `texts` and overwrites the chart at the configured path.
    pub fn generate(&self, texts: &[String]) -> Result<SentimentReport> {
        if texts.is_empty() {
            return Err(AppError::ValidationError(
                "At least one review is required".to_string(),
            ));
        }

        let samples = self.score(texts);
        let compounds: Vec<f64> = samples.iter().map(|s| s.compound).collect();

        ensure_parent_dir(&self.graph_path).map_err(|e| {
            AppError::IoError(format!(
                "Failed to create directory for {}: {}",
                self.graph_path.display(),
                e
            ))
        })?;
        save_scatter(&compounds, &self.layout, &self.graph_path)?;

        tracing::info!(
            path = %self.graph_path.display(),
            count = samples.len(),
            "Sentiment graph generated"
        );

        Ok(SentimentReport {
            graph_path: self.graph_path.clone(),
            samples,
        })
    }
}
