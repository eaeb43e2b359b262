use std::path::PathBuf;

/// Failures on the classification path. The first two are caused by the
/// submitted text; the rest mean the loaded artifacts misbehaved.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifyError {
    #[error("message is empty")]
    EmptyInput,
    #[error("message is {len} characters long, the limit is {max}")]
    MessageTooLong { len: usize, max: usize },
    #[error("feature extraction failed: {0}")]
    Vectorization(String),
    #[error("prediction failed: {0}")]
    Prediction(String),
}

impl ClassifyError {
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::MessageTooLong { .. })
    }
}

/// Startup failure while reading the vectorizer or classifier artifacts.
#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error("cannot read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported artifact format for {path} (expected .json or .bin)")]
    UnsupportedFormat { path: PathBuf },
    #[error("cannot decode model artifact {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("inconsistent model artifacts: {0}")]
    Invalid(String),
}
