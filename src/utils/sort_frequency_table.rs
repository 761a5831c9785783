use crate::models::FrequencyTable;
use crate::types::RankedList;
use std::hash::Hash;

/// Sorts a frequency table into a ranked list.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** Items with equal frequency keep the order in which they were first
///   seen, since the sort is stable over the table's insertion order.
///
/// No entries are dropped; every key of the table appears exactly once.
///
/// ### Example:
/// ```rust
/// use lexical_stats::{sort_frequency_table, FrequencyTable};
///
/// let table: FrequencyTable<char> = "abbccc".chars().collect();
///
/// let sorted = sort_frequency_table(table);
/// assert_eq!(sorted, vec![('c', 3), ('b', 2), ('a', 1)]);
/// ```
pub fn sort_frequency_table<K: Eq + Hash + Clone>(table: FrequencyTable<K>) -> RankedList<K> {
    let mut sorted_results = table.into_entries();

    sorted_results.sort_by(|a, b| b.1.cmp(&a.1));

    sorted_results
}
