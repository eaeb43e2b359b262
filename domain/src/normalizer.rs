//! Text normalization applied before vectorization: lowercase, tokenize,
//! keep alphanumeric non-stopword tokens, stem with the Snowball English
//! stemmer, join with spaces.

use crate::stopwords;
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::LazyLock;

static STEMMER: LazyLock<Stemmer> = LazyLock::new(|| Stemmer::create(Algorithm::English));

/// Whether submitted text goes through `normalize` before the vectorizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationPolicy {
    #[default]
    Always,
    Never,
}

impl NormalizationPolicy {
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            Self::Always => Cow::Owned(normalize(text)),
            Self::Never => Cow::Borrowed(text),
        }
    }
}

pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    tokenize(&lowered)
        .into_iter()
        .filter(|token| is_alphanumeric(token))
        .filter(|token| !stopwords::is_stopword(token))
        .map(|token| STEMMER.stem(token).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits on whitespace, then separates runs of alphanumeric characters from
/// runs of everything else. `"don't!!"` becomes `["don", "'", "t", "!!"]`.
fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for word in text.split_whitespace() {
        let mut start = 0;
        let mut current: Option<bool> = None;
        for (idx, ch) in word.char_indices() {
            let alnum = ch.is_alphanumeric();
            match current {
                Some(kind) if kind != alnum => {
                    tokens.push(&word[start..idx]);
                    start = idx;
                }
                _ => {}
            }
            current = Some(alnum);
        }
        if start < word.len() {
            tokens.push(&word[start..]);
        }
    }
    tokens
}

fn is_alphanumeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}
