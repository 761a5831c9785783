use crate::types::Frequency;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts keyed by token or character.
///
/// Entries are kept in the order their key was first seen, so any ranking built from
/// the table can break ties by first appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<K: Eq + Hash> {
    entries: Vec<(K, Frequency)>,
    first_seen: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone> FrequencyTable<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            first_seen: HashMap::new(),
        }
    }

    /// Records one occurrence of `key`.
    pub fn increment(&mut self, key: K) {
        match self.first_seen.get(&key) {
            Some(&index) => self.entries[index].1 += 1,
            None => {
                self.first_seen.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<Frequency>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.first_seen
            .get(key)
            .map(|&index| self.entries[index].1)
    }

    /// Position of `key` in first-seen order.
    pub fn first_seen_index<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.first_seen.get(key).copied()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, equal to the length of the counted stream.
    pub fn total(&self) -> Frequency {
        self.entries.iter().map(|(_, frequency)| frequency).sum()
    }

    /// Iterates over `(key, frequency)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, Frequency)> {
        self.entries.iter().map(|(key, frequency)| (key, *frequency))
    }

    /// Consumes the table, returning its entries in first-seen order.
    pub fn into_entries(self) -> Vec<(K, Frequency)> {
        self.entries
    }
}

impl<K: Eq + Hash + Clone> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();

        for key in iter {
            table.increment(key);
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_first_seen_order() {
        let table: FrequencyTable<&str> = ["b", "a", "b", "c", "a", "b"].into_iter().collect();

        assert_eq!(table.first_seen_index("b"), Some(0));
        assert_eq!(table.first_seen_index("a"), Some(1));
        assert_eq!(table.first_seen_index("c"), Some(2));
        assert_eq!(table.first_seen_index("d"), None);

        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![(&"b", 3), (&"a", 2), (&"c", 1)]);
    }

    #[test]
    fn test_total_matches_stream_length() {
        let stream = vec!['x', 'y', 'x', ' ', 'x'];
        let table: FrequencyTable<char> = stream.iter().copied().collect();

        assert_eq!(table.total(), stream.len());
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(&'x'), Some(3));
    }

    #[test]
    fn test_borrowed_lookup() {
        let table: FrequencyTable<String> =
            ["one".to_string(), "two".to_string(), "one".to_string()]
                .into_iter()
                .collect();

        assert_eq!(table.get("one"), Some(2));
        assert_eq!(table.get("three"), None);
    }

    #[test]
    fn test_empty_table() {
        let table: FrequencyTable<String> = FrequencyTable::default();

        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert!(table.into_entries().is_empty());
    }
}
