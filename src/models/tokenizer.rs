use crate::constants::{TYPOGRAPHIC_REPLACEMENTS, WORD_REGEX};
use crate::models::{LinguisticConfig, LinguisticPipeline};
use crate::types::TokenStream;

/// Selects how raw text is broken into tokens.
#[derive(Clone, Copy)]
pub enum TokenizerPolicy<'a> {
    /// Splits on any run of whitespace. Punctuation is not stripped.
    WhitespaceSplit,
    /// Extracts alphabetic words, keeping a single internal apostrophe (e.g. "don't").
    /// Digits, punctuation and other symbols never produce tokens.
    PatternMatch,
    /// Hands the text to a linguistic pipeline, which may lemmatize and filter tokens.
    ExternalPipeline {
        pipeline: &'a dyn LinguisticPipeline,
        config: &'a LinguisticConfig,
    },
}

#[derive(Clone, Copy)]
pub struct Tokenizer<'a> {
    pub policy: TokenizerPolicy<'a>,
}

impl Tokenizer<'static> {
    /// Configuration matching a plain `split()` of the text
    pub fn whitespace_split() -> Self {
        Self {
            policy: TokenizerPolicy::WhitespaceSplit,
        }
    }

    /// Configuration for extracting words only
    pub fn pattern_match() -> Self {
        Self {
            policy: TokenizerPolicy::PatternMatch,
        }
    }
}

impl<'a> Tokenizer<'a> {
    pub fn new(policy: TokenizerPolicy<'a>) -> Self {
        Self { policy }
    }

    pub fn external_pipeline(
        pipeline: &'a dyn LinguisticPipeline,
        config: &'a LinguisticConfig,
    ) -> Self {
        Self {
            policy: TokenizerPolicy::ExternalPipeline { pipeline, config },
        }
    }

    /// Tokenizer function to split the text into individual, lower-cased tokens.
    ///
    /// Any string is valid input; empty or word-less text yields an empty stream.
    pub fn tokenize(self, text: &str) -> TokenStream {
        match self.policy {
            TokenizerPolicy::WhitespaceSplit => text
                .split_whitespace()
                .map(|word| word.to_lowercase())
                .collect(),
            TokenizerPolicy::PatternMatch => {
                let normalized = normalize_typography(text);

                WORD_REGEX
                    .find_iter(&normalized)
                    .map(|word| word.as_str().to_lowercase())
                    .collect()
            }
            TokenizerPolicy::ExternalPipeline { pipeline, config } => {
                pipeline.tokenize_with_linguistics(text, config)
            }
        }
    }
}

/// Rewrites curly apostrophes and long dashes to their ASCII equivalents.
pub fn normalize_typography(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());

    for c in text.chars() {
        match TYPOGRAPHIC_REPLACEMENTS
            .iter()
            .find(|(variant, _)| *variant == c)
        {
            Some((_, replacement)) => normalized.push_str(replacement),
            None => normalized.push(c),
        }
    }

    normalized
}
