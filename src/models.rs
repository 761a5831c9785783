pub mod config;
pub use config::{AnalysisConfig, WordPolicy};

pub mod diversity_result;
pub use diversity_result::DiversityResult;

pub mod error;
pub use error::Error;

pub mod frequency_table;
pub use frequency_table::FrequencyTable;

pub mod lexicon_pipeline;
pub use lexicon_pipeline::{detect_linguistic_pipeline, LexiconEntry, LexiconPipeline};

pub mod linguistic_pipeline;
pub use linguistic_pipeline::{LinguisticConfig, LinguisticPipeline};

pub mod part_of_speech;
pub use part_of_speech::PartOfSpeech;

pub mod text_analyzer;
pub use text_analyzer::{AnalysisReport, ClassicStats, NormalizedStats, TextAnalyzer};

pub mod tokenizer;
pub use tokenizer::{normalize_typography, Tokenizer, TokenizerPolicy};
