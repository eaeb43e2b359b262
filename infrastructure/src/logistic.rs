use domain::model::BinaryClassifier;
use domain::{ClassifyError, ModelLoadError, Probabilities};

/// Linear model with a sigmoid link; positive scores lean towards spam.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    coef: Vec<f64>,
    intercept: f64,
}

impl LogisticRegression {
    pub fn new(coef: Vec<f64>, intercept: f64) -> Result<Self, ModelLoadError> {
        if !intercept.is_finite() || coef.iter().any(|c| !c.is_finite()) {
            return Err(ModelLoadError::Invalid(
                "logistic regression parameters must be finite".into(),
            ));
        }
        Ok(Self { coef, intercept })
    }

    fn decision(&self, features: &[f64]) -> f64 {
        self.intercept
            + self
                .coef
                .iter()
                .zip(features)
                .map(|(w, x)| w * x)
                .sum::<f64>()
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl BinaryClassifier for LogisticRegression {
    fn n_features(&self) -> usize {
        self.coef.len()
    }

    fn predict_proba(&self, features: &[f64]) -> Result<Probabilities, ClassifyError> {
        if features.len() != self.n_features() {
            return Err(ClassifyError::Prediction(format!(
                "expected {} features, got {}",
                self.n_features(),
                features.len()
            )));
        }
        Probabilities::from_spam(sigmoid(self.decision(features)))
    }

    fn kind(&self) -> &'static str {
        "logistic regression"
    }
}
