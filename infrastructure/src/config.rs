use domain::message::DEFAULT_MAX_MESSAGE_CHARS;
use domain::NormalizationPolicy;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_VECTORIZER_PATH: &str = "models/vectorizer.json";
pub const DEFAULT_MODEL_PATH: &str = "models/classifier.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub vectorizer_path: PathBuf,
    pub model_path: PathBuf,
    pub normalization: NormalizationPolicy,
    pub max_message_chars: usize,
}

impl Config {
    /// `.env` first, then the process environment, then defaults.
    pub fn load() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let normalization = match lookup("SPAM_NORMALIZE") {
            Some(raw) => match parse_flag(&raw) {
                Some(true) => NormalizationPolicy::Always,
                Some(false) => NormalizationPolicy::Never,
                None => {
                    warn!(value = %raw, "SPAM_NORMALIZE is not a boolean, normalizing");
                    NormalizationPolicy::Always
                }
            },
            None => NormalizationPolicy::Always,
        };

        let max_message_chars = match lookup("SPAM_MAX_MESSAGE_CHARS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    warn!(
                        value = %raw,
                        default = DEFAULT_MAX_MESSAGE_CHARS,
                        "invalid SPAM_MAX_MESSAGE_CHARS"
                    );
                    DEFAULT_MAX_MESSAGE_CHARS
                }
            },
            None => DEFAULT_MAX_MESSAGE_CHARS,
        };

        Self {
            vectorizer_path: lookup("SPAM_VECTORIZER_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_VECTORIZER_PATH)),
            model_path: lookup("SPAM_MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH)),
            normalization,
            max_message_chars,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
