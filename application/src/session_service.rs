use crate::classifier_service::ClassifierService;
use domain::{ClassificationResult, ClassifyError, Session};
use tracing::warn;

/// What happened to one submitted message.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Classified(ClassificationResult),
    /// The text itself was not acceptable; nothing was recorded.
    Rejected(String),
    /// The model failed on this message; nothing was recorded.
    Failed(String),
}

/// Request boundary for one interactive session. Every classification error
/// ends here as a user-facing message, and history is only written once a
/// complete result exists.
pub struct SessionService {
    classifier: ClassifierService,
    session: Session,
}

impl SessionService {
    pub fn new(classifier: ClassifierService, session_id: String) -> Self {
        Self {
            classifier,
            session: Session::new(session_id),
        }
    }

    pub fn submit(&mut self, text: &str) -> Submission {
        let message = match self.classifier.parse_message(text) {
            Ok(message) => message,
            Err(err) => return self.refuse(err),
        };
        match self.classifier.classify_message(&message) {
            Ok(result) => {
                self.session.record(message, result);
                Submission::Classified(result)
            }
            Err(err) => self.refuse(err),
        }
    }

    fn refuse(&self, err: ClassifyError) -> Submission {
        warn!(session = %self.session.id, error = %err, "submission not classified");
        match err {
            ClassifyError::EmptyInput => {
                Submission::Rejected("Please enter a message!".to_string())
            }
            ClassifyError::MessageTooLong { len, max } => Submission::Rejected(format!(
                "Message is too long ({len} characters, limit {max})."
            )),
            other => Submission::Failed(format!("Could not classify this message: {other}")),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn clear_history(&mut self) {
        self.session.clear_history();
    }
}
