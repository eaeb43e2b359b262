pub mod classification;
pub mod error;
pub mod history;
pub mod message;
pub mod model;
pub mod normalizer;
pub mod session;
pub mod stopwords;

pub use classification::{ClassificationResult, Label, Probabilities};
pub use error::{ClassifyError, ModelLoadError};
pub use history::{HistoryEntry, HistoryLedger};
pub use message::Message;
pub use normalizer::{normalize, NormalizationPolicy};
pub use session::Session;
