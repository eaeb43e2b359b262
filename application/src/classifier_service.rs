use domain::model::{BinaryClassifier, Vectorizer};
use domain::{ClassificationResult, ClassifyError, Message, NormalizationPolicy};
use infrastructure::artifact_loader::LoadedModel;
use rayon::prelude::*;
use shared::telemetry::Telemetry;
use std::sync::Arc;
use tracing::debug;

/// Runs one message through normalization, vectorization and prediction.
/// Holds only shared, immutable artifacts, so one instance can serve any
/// number of sessions and threads.
#[derive(Clone)]
pub struct ClassifierService {
    vectorizer: Arc<dyn Vectorizer>,
    classifier: Arc<dyn BinaryClassifier>,
    policy: NormalizationPolicy,
    max_message_chars: usize,
}

impl ClassifierService {
    pub fn new(
        vectorizer: Arc<dyn Vectorizer>,
        classifier: Arc<dyn BinaryClassifier>,
        policy: NormalizationPolicy,
        max_message_chars: usize,
    ) -> Self {
        Self {
            vectorizer,
            classifier,
            policy,
            max_message_chars,
        }
    }

    pub fn from_model(
        model: &LoadedModel,
        policy: NormalizationPolicy,
        max_message_chars: usize,
    ) -> Self {
        Self::new(
            Arc::clone(&model.vectorizer),
            Arc::clone(&model.classifier),
            policy,
            max_message_chars,
        )
    }

    pub fn policy(&self) -> NormalizationPolicy {
        self.policy
    }

    pub fn parse_message(&self, text: &str) -> Result<Message, ClassifyError> {
        Message::parse(text, self.max_message_chars)
    }

    pub fn classify(&self, text: &str) -> Result<ClassificationResult, ClassifyError> {
        let message = self.parse_message(text)?;
        self.classify_message(&message)
    }

    pub fn classify_message(
        &self,
        message: &Message,
    ) -> Result<ClassificationResult, ClassifyError> {
        let telemetry = Telemetry::new();
        let prepared = self.policy.apply(message.content());
        let features = self.vectorizer.transform(&prepared)?;
        if features.len() != self.vectorizer.n_features() {
            return Err(ClassifyError::Vectorization(format!(
                "vectorizer returned {} features, expected {}",
                features.len(),
                self.vectorizer.n_features()
            )));
        }
        let probabilities = self.classifier.predict_proba(&features)?;
        let result = ClassificationResult::from_probabilities(probabilities);
        debug!(
            label = %result.label(),
            confidence = result.confidence(),
            latency_us = telemetry.elapsed_micros(),
            "classified message"
        );
        Ok(result)
    }

    /// Classify many messages in parallel; results keep the input order.
    pub fn classify_batch<S>(&self, texts: &[S]) -> Vec<Result<ClassificationResult, ClassifyError>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.classify(text.as_ref()))
            .collect()
    }
}
