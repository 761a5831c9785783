use crate::models::Tokenizer;

/// Tokenization policy used by the classic analysis pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordPolicy {
    /// Split on runs of whitespace; punctuation stays attached to words.
    Whitespace,
    /// Extract alphabetic words (with at most one internal apostrophe).
    Pattern,
}

impl WordPolicy {
    pub fn tokenizer(self) -> Tokenizer<'static> {
        match self {
            WordPolicy::Whitespace => Tokenizer::whitespace_split(),
            WordPolicy::Pattern => Tokenizer::pattern_match(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub word_policy: WordPolicy,
    /// Maximum number of entries in each top-N word ranking.
    pub top_n: usize,
}
