use crate::error::ClassifyError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Class of a message. The discriminant is the index into `Probabilities`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Ham = 0,
    Spam = 1,
}

impl Label {
    pub const ALL: [Label; 2] = [Label::Ham, Label::Spam];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Label::Ham),
            1 => Some(Label::Spam),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Ham => "Ham",
            Label::Spam => "Spam",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `[P(Ham), P(Spam)]`, validated to be a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Probabilities([f64; 2]);

impl Probabilities {
    pub const SUM_TOLERANCE: f64 = 1e-6;

    pub fn new(ham: f64, spam: f64) -> Result<Self, ClassifyError> {
        for (label, p) in [(Label::Ham, ham), (Label::Spam, spam)] {
            if !p.is_finite() {
                return Err(ClassifyError::Prediction(format!(
                    "P({label}) is not a finite number"
                )));
            }
            if !(-Self::SUM_TOLERANCE..=1.0 + Self::SUM_TOLERANCE).contains(&p) {
                return Err(ClassifyError::Prediction(format!(
                    "P({label}) = {p} is outside [0, 1]"
                )));
            }
        }
        let sum = ham + spam;
        if (sum - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(ClassifyError::Prediction(format!(
                "probabilities sum to {sum}, expected 1"
            )));
        }
        Ok(Self([ham.clamp(0.0, 1.0), spam.clamp(0.0, 1.0)]))
    }

    pub fn from_spam(spam: f64) -> Result<Self, ClassifyError> {
        Self::new(1.0 - spam, spam)
    }

    pub fn get(&self, label: Label) -> f64 {
        self.0[label.index()]
    }

    pub fn as_array(&self) -> [f64; 2] {
        self.0
    }

    /// Most likely class. Ties go to `Spam`.
    pub fn argmax(&self) -> Label {
        if self.get(Label::Spam) >= self.get(Label::Ham) {
            Label::Spam
        } else {
            Label::Ham
        }
    }

    pub fn max(&self) -> f64 {
        self.0[0].max(self.0[1])
    }
}

/// Outcome of one classifier invocation. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    label: Label,
    confidence: f64,
    probabilities: Probabilities,
}

impl ClassificationResult {
    pub fn from_probabilities(probabilities: Probabilities) -> Self {
        Self {
            label: probabilities.argmax(),
            confidence: probabilities.max(),
            probabilities,
        }
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn is_spam(&self) -> bool {
        self.label == Label::Spam
    }

    /// Highest class probability in `[0, 1]`.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn confidence_percent(&self) -> f64 {
        self.confidence * 100.0
    }

    pub fn probabilities(&self) -> Probabilities {
        self.probabilities
    }
}
