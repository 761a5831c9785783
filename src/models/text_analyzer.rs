use crate::models::{AnalysisConfig, DiversityResult, LinguisticConfig, LinguisticPipeline, Tokenizer};
use crate::types::{RankedList, Token};
use crate::utils::{char_count, count, sort_frequency_table, top_n, unique_and_diversity};
use log::{debug, info};

/// Statistics derived from the configured word policy, without linguistic normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassicStats {
    pub total_words: usize,
    pub diversity: DiversityResult,
    /// Every case-folded character of the raw text, most frequent first.
    pub char_frequencies: RankedList<char>,
    pub top_words: RankedList<Token>,
}

/// Statistics over lemmatized tokens produced by a linguistic pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedStats {
    /// Lemmas with stopwords removed.
    pub content_words: DiversityResult,
    /// Lemmas with stopwords kept.
    pub all_words: DiversityResult,
    pub top_content_words: RankedList<Token>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// Requested size of the top-N rankings.
    pub top_n: usize,
    pub classic: ClassicStats,
    /// `None` when no linguistic pipeline is available.
    pub normalized: Option<NormalizedStats>,
}

pub struct TextAnalyzer<'a> {
    config: &'a AnalysisConfig,
    linguistics: Option<&'a dyn LinguisticPipeline>,
}

impl<'a> TextAnalyzer<'a> {
    pub fn new(
        config: &'a AnalysisConfig,
        linguistics: Option<&'a dyn LinguisticPipeline>,
    ) -> Self {
        Self {
            config,
            linguistics,
        }
    }

    pub fn has_linguistics(&self) -> bool {
        self.linguistics.is_some()
    }

    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let classic = self.analyze_classic(text);

        let normalized = self.linguistics.map(|pipeline| {
            info!("Running normalized pass...");

            let content_words = LinguisticConfig::content_words();
            let all_words = LinguisticConfig::all_words();

            let content_tokens = Tokenizer::external_pipeline(pipeline, &content_words).tokenize(text);
            let all_tokens = Tokenizer::external_pipeline(pipeline, &all_words).tokenize(text);

            debug!(
                "Normalized pass produced {} content tokens and {} total tokens",
                content_tokens.len(),
                all_tokens.len()
            );

            NormalizedStats {
                content_words: unique_and_diversity(&content_tokens),
                all_words: unique_and_diversity(&all_tokens),
                top_content_words: top_n(&content_tokens, self.config.top_n),
            }
        });

        AnalysisReport {
            top_n: self.config.top_n,
            classic,
            normalized,
        }
    }

    pub fn analyze_classic(&self, text: &str) -> ClassicStats {
        info!("Running classic pass...");

        let tokens = self.config.word_policy.tokenizer().tokenize(text);
        debug!("Classic pass produced {} tokens", tokens.len());

        let char_frequencies = sort_frequency_table(char_count(text));
        debug!("Counted {} distinct characters", char_frequencies.len());

        ClassicStats {
            total_words: count(&tokens),
            diversity: unique_and_diversity(&tokens),
            char_frequencies,
            top_words: top_n(&tokens, self.config.top_n),
        }
    }

    /// Diversity and top-N ranking under a custom linguistic configuration, such as a
    /// part-of-speech filter. Returns `None` when no linguistic pipeline is available.
    pub fn analyze_normalized(
        &self,
        text: &str,
        linguistic_config: &LinguisticConfig,
    ) -> Option<(DiversityResult, RankedList<Token>)> {
        let pipeline = self.linguistics?;

        let tokens = Tokenizer::external_pipeline(pipeline, linguistic_config).tokenize(text);

        Some((
            unique_and_diversity(&tokens),
            top_n(&tokens, self.config.top_n),
        ))
    }
}
