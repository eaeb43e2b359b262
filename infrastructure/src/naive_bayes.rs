use domain::model::BinaryClassifier;
use domain::{ClassifyError, ModelLoadError, Probabilities};

/// Multinomial naive Bayes over term features, parameters in log space.
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    class_log_prior: [f64; 2],
    feature_log_prob: [Vec<f64>; 2],
}

impl MultinomialNb {
    pub fn new(
        class_log_prior: [f64; 2],
        feature_log_prob: [Vec<f64>; 2],
    ) -> Result<Self, ModelLoadError> {
        if feature_log_prob[0].len() != feature_log_prob[1].len() {
            return Err(ModelLoadError::Invalid(format!(
                "feature_log_prob rows differ in length ({} vs {})",
                feature_log_prob[0].len(),
                feature_log_prob[1].len()
            )));
        }
        let finite = class_log_prior.iter().all(|p| p.is_finite())
            && feature_log_prob.iter().flatten().all(|p| p.is_finite());
        if !finite {
            return Err(ModelLoadError::Invalid(
                "naive Bayes parameters must be finite".into(),
            ));
        }
        Ok(Self {
            class_log_prior,
            feature_log_prob,
        })
    }

    fn joint_log_likelihood(&self, features: &[f64]) -> [f64; 2] {
        let mut jll = self.class_log_prior;
        for (class, row) in self.feature_log_prob.iter().enumerate() {
            jll[class] += row.iter().zip(features).map(|(lp, x)| lp * x).sum::<f64>();
        }
        jll
    }
}

impl BinaryClassifier for MultinomialNb {
    fn n_features(&self) -> usize {
        self.feature_log_prob[0].len()
    }

    fn predict_proba(&self, features: &[f64]) -> Result<Probabilities, ClassifyError> {
        if features.len() != self.n_features() {
            return Err(ClassifyError::Prediction(format!(
                "expected {} features, got {}",
                self.n_features(),
                features.len()
            )));
        }
        let [ham, spam] = self.joint_log_likelihood(features);
        let max = ham.max(spam);
        let (eh, es) = ((ham - max).exp(), (spam - max).exp());
        let total = eh + es;
        Probabilities::new(eh / total, es / total)
    }

    fn kind(&self) -> &'static str {
        "multinomial naive Bayes"
    }
}
