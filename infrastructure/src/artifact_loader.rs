use crate::classifier::ClassifierArtifact;
use crate::vectorizer::{TextVectorizer, VectorizerArtifact};
use domain::model::{BinaryClassifier, Vectorizer};
use domain::ModelLoadError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::telemetry::Telemetry;
use shared::utils::{artifact_format, ArtifactFormat};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Vectorizer and classifier loaded at startup. Cheap to clone; both halves
/// are immutable for the rest of the process.
#[derive(Clone)]
pub struct LoadedModel {
    pub vectorizer: Arc<dyn Vectorizer>,
    pub classifier: Arc<dyn BinaryClassifier>,
}

impl std::fmt::Debug for LoadedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedModel")
            .field("n_features", &self.vectorizer.n_features())
            .field("classifier", &self.classifier.kind())
            .finish()
    }
}

/// Read both artifacts concurrently, decode them and check they agree on the
/// feature count.
pub async fn load_artifacts(
    vectorizer_path: &Path,
    classifier_path: &Path,
) -> Result<LoadedModel, ModelLoadError> {
    let telemetry = Telemetry::new();
    let vectorizer_format = format_of(vectorizer_path)?;
    let classifier_format = format_of(classifier_path)?;

    let (vectorizer_bytes, classifier_bytes) = tokio::try_join!(
        read_artifact(vectorizer_path),
        read_artifact(classifier_path)
    )?;

    let vectorizer_artifact: VectorizerArtifact =
        decode(vectorizer_path, vectorizer_format, &vectorizer_bytes)?;
    let classifier_artifact: ClassifierArtifact =
        decode(classifier_path, classifier_format, &classifier_bytes)?;

    let vectorizer: Arc<dyn Vectorizer> =
        Arc::new(TextVectorizer::from_artifact(vectorizer_artifact)?);
    let classifier = classifier_artifact.into_model()?;

    if vectorizer.n_features() != classifier.n_features() {
        return Err(ModelLoadError::Invalid(format!(
            "vectorizer produces {} features but the classifier expects {}",
            vectorizer.n_features(),
            classifier.n_features()
        )));
    }

    info!(
        features = vectorizer.n_features(),
        classifier = classifier.kind(),
        elapsed_ms = telemetry.elapsed().as_millis() as u64,
        "model artifacts loaded"
    );
    Ok(LoadedModel {
        vectorizer,
        classifier,
    })
}

/// Serialize an artifact in the format implied by `path`'s extension.
pub fn encode_artifact<T: Serialize>(path: &Path, artifact: &T) -> Result<Vec<u8>, ModelLoadError> {
    let encoded = match format_of(path)? {
        ArtifactFormat::Json => serde_json::to_vec_pretty(artifact).map_err(|e| e.to_string()),
        ArtifactFormat::Bincode => bincode::serialize(artifact).map_err(|e| e.to_string()),
    };
    encoded.map_err(|reason| ModelLoadError::Decode {
        path: path.to_path_buf(),
        reason,
    })
}

fn format_of(path: &Path) -> Result<ArtifactFormat, ModelLoadError> {
    artifact_format(path).ok_or_else(|| ModelLoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })
}

async fn read_artifact(path: &Path) -> Result<Vec<u8>, ModelLoadError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| ModelLoadError::Io {
        path: PathBuf::from(path),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read model artifact");
    Ok(bytes)
}

fn decode<T: DeserializeOwned>(
    path: &Path,
    format: ArtifactFormat,
    bytes: &[u8],
) -> Result<T, ModelLoadError> {
    let decoded = match format {
        ArtifactFormat::Json => serde_json::from_slice(bytes).map_err(|e| e.to_string()),
        ArtifactFormat::Bincode => bincode::deserialize(bytes).map_err(|e| e.to_string()),
    };
    decoded.map_err(|reason| ModelLoadError::Decode {
        path: path.to_path_buf(),
        reason,
    })
}
