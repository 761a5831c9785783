use crate::models::PartOfSpeech;
use crate::types::{PartOfSpeechFilter, TokenStream};

/// A source of linguistically normalized tokens.
///
/// Implementations receive raw text and return lower-cased alphabetic tokens in document
/// order, after applying whatever stopword removal, part-of-speech filtering and
/// lemmatization the `LinguisticConfig` requests.
pub trait LinguisticPipeline: Send + Sync {
    fn tokenize_with_linguistics(&self, text: &str, config: &LinguisticConfig) -> TokenStream;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinguisticConfig {
    pub remove_stopwords: bool,
    /// Emit lemmas instead of the surface form of each word.
    pub lemmatize: bool,
    /// When set (and non-empty), only tokens tagged with one of these parts of speech are kept.
    pub pos_filter: Option<PartOfSpeechFilter>,
}

impl LinguisticConfig {
    /// Lemmatized words with stopwords removed.
    pub fn content_words() -> Self {
        Self {
            remove_stopwords: true,
            lemmatize: true,
            pos_filter: None,
        }
    }

    /// Lemmatized words, stopwords included.
    pub fn all_words() -> Self {
        Self {
            remove_stopwords: false,
            lemmatize: true,
            pos_filter: None,
        }
    }

    pub fn with_pos_filter(mut self, tags: impl IntoIterator<Item = PartOfSpeech>) -> Self {
        self.pos_filter = Some(tags.into_iter().collect());
        self
    }
}

impl Default for LinguisticConfig {
    fn default() -> Self {
        Self::content_words()
    }
}
