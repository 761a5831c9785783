use crate::models::FrequencyTable;

/// Counts every character of the raw text after case folding.
///
/// Whitespace, digits and punctuation are counted like any other character; narrowing
/// the result to letters is left to the caller.
///
/// # Example
/// ```
/// use lexical_stats::char_count;
///
/// let frequencies = char_count("AAbb");
/// assert_eq!(frequencies.get(&'a'), Some(2));
/// assert_eq!(frequencies.get(&'b'), Some(2));
/// assert_eq!(frequencies.len(), 2);
/// ```
pub fn char_count(text: &str) -> FrequencyTable<char> {
    text.chars().flat_map(char::to_lowercase).collect()
}
