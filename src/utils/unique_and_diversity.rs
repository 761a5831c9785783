use crate::models::DiversityResult;
use std::collections::HashSet;

/// Counts the distinct tokens in a stream and its lexical diversity
/// (`unique / total`, or `0.0` for an empty stream).
///
/// # Example
/// ```
/// use lexical_stats::unique_and_diversity;
///
/// let result = unique_and_diversity(&["to", "be", "or", "not", "to", "be"]);
/// assert_eq!(result.unique_count, 4);
/// assert_eq!(result.total_count, 6);
/// assert!((result.ratio - 4.0 / 6.0).abs() < f64::EPSILON);
/// ```
pub fn unique_and_diversity<T: AsRef<str>>(tokens: &[T]) -> DiversityResult {
    let unique_tokens: HashSet<&str> = tokens.iter().map(|token| token.as_ref()).collect();

    DiversityResult::new(unique_tokens.len(), tokens.len())
}
