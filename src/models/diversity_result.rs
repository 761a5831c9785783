/// Unique-word count and lexical diversity of a token stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiversityResult {
    pub unique_count: usize,
    pub total_count: usize,
    /// `unique_count / total_count`, or `0.0` for an empty stream.
    pub ratio: f64,
}

impl DiversityResult {
    pub fn new(unique_count: usize, total_count: usize) -> Self {
        let ratio = if total_count > 0 {
            unique_count as f64 / total_count as f64
        } else {
            0.0
        };

        Self {
            unique_count,
            total_count,
            ratio,
        }
    }
}

impl Default for DiversityResult {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
