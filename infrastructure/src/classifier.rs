use crate::logistic::LogisticRegression;
use crate::naive_bayes::MultinomialNb;
use domain::model::BinaryClassifier;
use domain::ModelLoadError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Serialized form of a fitted binary classifier. Externally tagged so the
/// same document decodes from both JSON and bincode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierArtifact {
    MultinomialNb {
        class_log_prior: [f64; 2],
        feature_log_prob: [Vec<f64>; 2],
    },
    Logistic {
        coef: Vec<f64>,
        intercept: f64,
    },
}

impl ClassifierArtifact {
    pub fn into_model(self) -> Result<Arc<dyn BinaryClassifier>, ModelLoadError> {
        let model: Arc<dyn BinaryClassifier> = match self {
            ClassifierArtifact::MultinomialNb {
                class_log_prior,
                feature_log_prob,
            } => Arc::new(MultinomialNb::new(class_log_prior, feature_log_prob)?),
            ClassifierArtifact::Logistic { coef, intercept } => {
                Arc::new(LogisticRegression::new(coef, intercept)?)
            }
        };
        Ok(model)
    }
}
