use crate::constants::DEFAULT_TOP_N;
use crate::models::{AnalysisConfig, WordPolicy};

pub const DEFAULT_ANALYSIS_CONFIG: AnalysisConfig = AnalysisConfig {
    word_policy: WordPolicy::Whitespace,
    top_n: DEFAULT_TOP_N,
};
