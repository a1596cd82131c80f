use serde::{Deserialize, Serialize};

/// Review texts scored when a trigger supplies none of its own.
pub const DEFAULT_REVIEW_SAMPLES: [&str; 10] = [
    "I love this product! It is amazing!",
    "I hate this product! It is terrible!",
    "I am indifferent about this product. It is okay.",
    "The quality is fantastic, and I highly recommend it.",
    "Worst purchase ever! Do not buy this.",
    "It works fine, but nothing extraordinary.",
    "Amazing customer service! They resolved my issue instantly.",
    "The shipping took forever, but the product is decent.",
    "I’ve had better, but it’s not the worst either.",
    "Great value for money, I’m really happy with it.",
];

pub fn default_samples() -> Vec<String> {
    DEFAULT_REVIEW_SAMPLES.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSample {
    pub text: String,
    /// Normalized polarity in [-1.0, 1.0].
    pub compound: f64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

impl SentimentSample {
    pub fn leaning(&self) -> Leaning {
        if self.compound >= Leaning::THRESHOLD {
            Leaning::Positive
        } else if self.compound <= -Leaning::THRESHOLD {
            Leaning::Negative
        } else {
            Leaning::Neutral
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Leaning {
    Positive,
    Neutral,
    Negative,
}

impl Leaning {
    /// Conventional VADER cut-off around zero.
    pub const THRESHOLD: f64 = 0.05;
}
