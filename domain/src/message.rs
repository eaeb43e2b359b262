use crate::error::ClassifyError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 5000;

/// Raw text submitted for classification. Construction rejects blank and
/// over-long input, so a `Message` is always classifiable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    content: String,
}

impl Message {
    pub fn parse(content: impl Into<String>, max_chars: usize) -> Result<Self, ClassifyError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ClassifyError::EmptyInput);
        }
        let len = content.chars().count();
        if len > max_chars {
            return Err(ClassifyError::MessageTooLong { len, max: max_chars });
        }
        Ok(Self { content })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Single-line excerpt for history cards.
    pub fn preview(&self, max_chars: usize) -> String {
        let flat = self.content.split_whitespace().collect::<Vec<_>>().join(" ");
        if flat.chars().count() <= max_chars {
            return flat;
        }
        let mut cut: String = flat.chars().take(max_chars.saturating_sub(3)).collect();
        cut.push_str("...");
        cut
    }
}
