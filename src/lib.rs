//! Descriptive lexical statistics for a body of text: word counts, character and word
//! frequencies, unique-word counts and lexical diversity, with an optional pass over
//! lemmatized, stopword-filtered tokens.

mod config;
pub use config::DEFAULT_ANALYSIS_CONFIG;
mod constants;
pub use constants::DEFAULT_TOP_N;
pub mod models;
pub use models::{
    detect_linguistic_pipeline, AnalysisConfig, AnalysisReport, ClassicStats, DiversityResult,
    Error, FrequencyTable, LexiconEntry, LexiconPipeline, LinguisticConfig, LinguisticPipeline,
    NormalizedStats, PartOfSpeech, TextAnalyzer, Tokenizer, TokenizerPolicy, WordPolicy,
};
pub mod types;
pub use types::{Frequency, Lemma, PartOfSpeechFilter, RankedList, Token, TokenRef, TokenStream};
mod utils;
pub use utils::{
    char_count, count, count_frequencies, render_report, sort_frequency_table, top_n,
    unique_and_diversity,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Converts raw text into an ordered stream of lower-cased tokens under the given policy.
pub fn tokenize(text: &str, policy: TokenizerPolicy) -> TokenStream {
    Tokenizer::new(policy).tokenize(text)
}
