use crate::types::{RankedList, Token};
use crate::utils::{count_frequencies, sort_frequency_table};

/// Returns the `n` most frequent tokens with their counts.
///
/// Tokens with equal counts are ranked by first appearance in the stream. If `n` exceeds
/// the number of distinct tokens, every distinct token is returned.
///
/// # Example
/// ```
/// use lexical_stats::top_n;
///
/// let tokens = vec!["b", "a", "b", "a", "c"];
/// assert_eq!(
///     top_n(&tokens, 3),
///     vec![("b".to_string(), 2), ("a".to_string(), 2), ("c".to_string(), 1)]
/// );
/// ```
pub fn top_n<T: AsRef<str>>(tokens: &[T], n: usize) -> RankedList<Token> {
    let mut ranked_list = sort_frequency_table(count_frequencies(tokens));
    ranked_list.truncate(n);

    ranked_list
}
