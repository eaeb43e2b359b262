use domain::model::Vectorizer;
use domain::{ClassifyError, ModelLoadError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weighting {
    /// Raw term counts.
    Count,
    /// 1.0 when the term occurs at all.
    Binary,
    TfIdf {
        idf: Vec<f64>,
        #[serde(default)]
        sublinear_tf: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

/// Serialized form of a fitted bag-of-words vectorizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorizerArtifact {
    pub vocabulary: BTreeMap<String, usize>,
    #[serde(default = "default_weighting")]
    pub weighting: Weighting,
    #[serde(default)]
    pub norm: Option<Norm>,
    #[serde(default = "default_min_token_chars")]
    pub min_token_chars: usize,
}

fn default_weighting() -> Weighting {
    Weighting::Count
}

fn default_min_token_chars() -> usize {
    2
}

pub struct TextVectorizer {
    vocabulary: HashMap<String, usize>,
    weighting: Weighting,
    norm: Option<Norm>,
    min_token_chars: usize,
    token_pattern: Regex,
}

impl TextVectorizer {
    pub fn from_artifact(artifact: VectorizerArtifact) -> Result<Self, ModelLoadError> {
        let n = artifact.vocabulary.len();
        if n == 0 {
            return Err(ModelLoadError::Invalid("vectorizer vocabulary is empty".into()));
        }

        let mut seen = vec![false; n];
        for (term, &index) in &artifact.vocabulary {
            if index >= n || seen[index] {
                return Err(ModelLoadError::Invalid(format!(
                    "vocabulary index {index} for {term:?} is out of range or duplicated"
                )));
            }
            seen[index] = true;
        }

        if let Weighting::TfIdf { idf, .. } = &artifact.weighting {
            if idf.len() != n {
                return Err(ModelLoadError::Invalid(format!(
                    "idf has {} weights for a vocabulary of {n} terms",
                    idf.len()
                )));
            }
            if idf.iter().any(|w| !w.is_finite()) {
                return Err(ModelLoadError::Invalid("idf contains a non-finite weight".into()));
            }
        }

        let token_pattern = Regex::new(r"\w+")
            .map_err(|e| ModelLoadError::Invalid(format!("token pattern: {e}")))?;

        Ok(Self {
            vocabulary: artifact.vocabulary.into_iter().collect(),
            weighting: artifact.weighting,
            norm: artifact.norm,
            min_token_chars: artifact.min_token_chars.max(1),
            token_pattern,
        })
    }

    fn term_counts(&self, text: &str) -> HashMap<usize, f64> {
        let lowered = text.to_lowercase();
        let mut counts = HashMap::new();
        for token in self.token_pattern.find_iter(&lowered) {
            let token = token.as_str();
            if token.chars().count() < self.min_token_chars {
                continue;
            }
            if let Some(&index) = self.vocabulary.get(token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }
        counts
    }
}

impl Vectorizer for TextVectorizer {
    fn n_features(&self) -> usize {
        self.vocabulary.len()
    }

    fn transform(&self, text: &str) -> Result<Vec<f64>, ClassifyError> {
        let mut features = vec![0.0; self.n_features()];
        for (index, count) in self.term_counts(text) {
            features[index] = match &self.weighting {
                Weighting::Count => count,
                Weighting::Binary => 1.0,
                Weighting::TfIdf { idf, sublinear_tf } => {
                    let tf = if *sublinear_tf { 1.0 + count.ln() } else { count };
                    tf * idf[index]
                }
            };
        }

        let scale = match self.norm {
            Some(Norm::L1) => features.iter().map(|x| x.abs()).sum::<f64>(),
            Some(Norm::L2) => features.iter().map(|x| x * x).sum::<f64>().sqrt(),
            None => 1.0,
        };
        if scale > 0.0 && scale != 1.0 {
            features.iter_mut().for_each(|x| *x /= scale);
        }

        if features.iter().any(|x| !x.is_finite()) {
            return Err(ClassifyError::Vectorization(
                "feature vector contains a non-finite value".into(),
            ));
        }
        Ok(features)
    }
}
