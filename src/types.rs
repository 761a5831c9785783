use crate::models::PartOfSpeech;
use std::collections::HashSet;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the normalized (case-folded) word
/// units produced by a `Tokenizer`.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// An ordered, finite sequence of tokens derived from a single input text.
pub type TokenStream = Vec<Token>;

/// Represents the total number of occurrences of an item (token or character) within a text.
pub type Frequency = usize;

/// A list of `(item, frequency)` pairs ordered by frequency, highest first.
pub type RankedList<K> = Vec<(K, Frequency)>;

/// The dictionary base form of a token.
pub type Lemma = String;

/// A set of part-of-speech tags a token must belong to in order to be kept.
pub type PartOfSpeechFilter = HashSet<PartOfSpeech>;
