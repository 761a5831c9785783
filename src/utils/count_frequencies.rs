use crate::models::FrequencyTable;
use crate::types::Token;

/// Counts the frequency of each token in the given stream.
///
/// # Arguments
/// * `tokens` - A slice of tokens to analyze.
///
/// # Returns
/// * A `FrequencyTable` where the keys are tokens, in order of first appearance, and the
///   values are their respective frequencies.
///
/// # Example
/// ```
/// use lexical_stats::count_frequencies;
///
/// let tokens = vec!["whale", "ship", "whale"];
/// let frequencies = count_frequencies(&tokens);
/// assert_eq!(frequencies.get("whale"), Some(2));
/// assert_eq!(frequencies.get("ship"), Some(1));
/// ```
pub fn count_frequencies<T: AsRef<str>>(tokens: &[T]) -> FrequencyTable<Token> {
    tokens
        .iter()
        .map(|token| token.as_ref().to_string())
        .collect()
}
