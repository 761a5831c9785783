/// Counts the tokens in a stream.
///
/// # Example
/// ```
/// use lexical_stats::{count, tokenize, TokenizerPolicy};
///
/// let tokens = tokenize("Three little words", TokenizerPolicy::PatternMatch);
/// assert_eq!(count(&tokens), 3);
/// ```
pub fn count<T>(tokens: &[T]) -> usize {
    tokens.len()
}
