//! Seams between the classification pipeline and the loaded artifacts.
//!
//! Implementations are read-only after construction and shared across
//! sessions and worker threads, hence the `Send + Sync` bounds.

use crate::classification::Probabilities;
use crate::error::ClassifyError;

/// Fitted text-to-features transform.
pub trait Vectorizer: Send + Sync {
    /// Length of every vector returned by `transform`.
    fn n_features(&self) -> usize;

    fn transform(&self, text: &str) -> Result<Vec<f64>, ClassifyError>;
}

/// Fitted two-class model over a fixed-length feature vector.
pub trait BinaryClassifier: Send + Sync {
    fn n_features(&self) -> usize;

    /// `[P(Ham), P(Spam)]` for one feature vector.
    fn predict_proba(&self, features: &[f64]) -> Result<Probabilities, ClassifyError>;

    /// Short human-readable model name for logs.
    fn kind(&self) -> &'static str;
}
