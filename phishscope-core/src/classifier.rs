// Optional trained classifier consulted before the heuristic scorer

use crate::verdict::probability_score;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to read model: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed model artifact: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Model returned an invalid probability: {0}")]
    InvalidProbability(f64),

    #[error("Prediction failed: {0}")]
    Prediction(String),
}

/// Contract for an externally trained URL classifier. Implementations are
/// shared read-only across concurrent analyses.
pub trait PhishingClassifier: Send + Sync {
    /// Probability in `[0, 1]` that `url` is a phishing page.
    fn predict_probability(&self, url: &str) -> Result<f64, ModelError>;
}

/// Result of consulting the optional classifier.
#[derive(Debug)]
pub enum ModelOutcome {
    Scored { score: u8, probability: f64 },
    Unavailable,
    Failed(ModelError),
}

/// Query `classifier` and validate its answer. Out-of-range or non-finite
/// probabilities are failures, not scores.
pub fn consult(classifier: Option<&dyn PhishingClassifier>, url: &str) -> ModelOutcome {
    let Some(classifier) = classifier else {
        return ModelOutcome::Unavailable;
    };

    match classifier.predict_probability(url) {
        Ok(p) if p.is_finite() && (0.0..=1.0).contains(&p) => ModelOutcome::Scored {
            score: probability_score(p),
            probability: p,
        },
        Ok(p) => ModelOutcome::Failed(ModelError::InvalidProbability(p)),
        Err(e) => ModelOutcome::Failed(e),
    }
}

/// Logistic model over URL tokens, stored as JSON:
///
/// ```json
/// { "bias": -1.5, "weights": { "login": 1.2, "paypa1": 2.4 } }
/// ```
///
/// The URL is lower-cased and split on non-alphanumeric characters; each
/// distinct token contributes its weight once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenModel {
    pub bias: f64,
    #[serde(default)]
    pub weights: HashMap<String, f64>,
}

impl TokenModel {
    pub fn new(bias: f64, weights: HashMap<String, f64>) -> Self {
        Self { bias, weights }
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let model = Self::from_json(&fs::read_to_string(path)?)?;
        info!(
            "Loaded model from {} ({} weights)",
            path.display(),
            model.weights.len()
        );
        Ok(model)
    }

    pub fn tokens(url: &str) -> BTreeSet<String> {
        url.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl PhishingClassifier for TokenModel {
    fn predict_probability(&self, url: &str) -> Result<f64, ModelError> {
        let logit: f64 = self.bias
            + Self::tokens(url)
                .iter()
                .filter_map(|t| self.weights.get(t))
                .sum::<f64>();

        if !logit.is_finite() {
            return Err(ModelError::Prediction(format!(
                "non-finite logit for {}",
                url
            )));
        }

        let probability = 1.0 / (1.0 + (-logit).exp());
        debug!("Model logit {:.3} -> p={:.3} for {}", logit, probability, url);
        Ok(probability)
    }
}
