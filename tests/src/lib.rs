//! Fixtures shared by the integration tests: a small fitted model written to
//! a temporary directory in either artifact format.

use application::classifier_service::ClassifierService;
use domain::NormalizationPolicy;
use infrastructure::artifact_loader::{encode_artifact, load_artifacts, LoadedModel};
use infrastructure::classifier::ClassifierArtifact;
use infrastructure::vectorizer::{VectorizerArtifact, Weighting};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SPAM_TERMS: &[&str] = &["free", "win", "prize", "claim", "cash", "txt", "urgent"];
pub const HAM_TERMS: &[&str] = &["lunch", "home", "tomorrow", "love", "ok", "later", "meet"];

/// Directory holding the sample artifacts shipped with the repository.
pub fn bundled_models_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("models")
}

pub fn vectorizer_artifact() -> VectorizerArtifact {
    VectorizerArtifact {
        vocabulary: SPAM_TERMS
            .iter()
            .chain(HAM_TERMS)
            .enumerate()
            .map(|(i, term)| (term.to_string(), i))
            .collect(),
        weighting: Weighting::Count,
        norm: None,
        min_token_chars: 2,
    }
}

/// Naive Bayes where spam terms are ten times likelier under spam and the
/// other way round, with even priors.
pub fn naive_bayes_artifact() -> ClassifierArtifact {
    let row = |favoured: &[&str]| -> Vec<f64> {
        let weights: Vec<f64> = SPAM_TERMS
            .iter()
            .chain(HAM_TERMS)
            .map(|t| if favoured.contains(t) { 10.0 } else { 1.0 })
            .collect();
        let total: f64 = weights.iter().sum();
        weights.iter().map(|w| (w / total).ln()).collect()
    };
    ClassifierArtifact::MultinomialNb {
        class_log_prior: [0.5f64.ln(), 0.5f64.ln()],
        feature_log_prob: [row(HAM_TERMS), row(SPAM_TERMS)],
    }
}

pub struct ModelFixture {
    pub dir: TempDir,
    pub vectorizer_path: PathBuf,
    pub classifier_path: PathBuf,
}

impl ModelFixture {
    /// Write the fixture artifacts with the given extension (`json` or `bin`).
    pub fn write(extension: &str) -> Self {
        let dir = TempDir::new().expect("temp dir");
        let vectorizer_path = dir.path().join(format!("vectorizer.{extension}"));
        let classifier_path = dir.path().join(format!("classifier.{extension}"));
        write_artifact(&vectorizer_path, &vectorizer_artifact());
        write_artifact(&classifier_path, &naive_bayes_artifact());
        Self {
            dir,
            vectorizer_path,
            classifier_path,
        }
    }

    pub async fn load(&self) -> LoadedModel {
        load_artifacts(&self.vectorizer_path, &self.classifier_path)
            .await
            .expect("fixture artifacts load")
    }

    pub async fn service(&self, policy: NormalizationPolicy) -> ClassifierService {
        ClassifierService::from_model(&self.load().await, policy, 500)
    }
}

pub fn write_artifact<T: serde::Serialize>(path: &Path, artifact: &T) {
    let bytes = encode_artifact(path, artifact).expect("encode artifact");
    std::fs::write(path, bytes).expect("write artifact");
}
