use regex::Regex;
use std::sync::LazyLock;

/// Number of ranked words reported when no other limit is configured.
pub const DEFAULT_TOP_N: usize = 10;

/// A maximal run of ASCII letters, optionally joined to a second run by one apostrophe.
pub const WORD_PATTERN: &str = r"[A-Za-z]+(?:'[A-Za-z]+)?";

/// Typographic variants rewritten to their ASCII equivalents before pattern matching.
pub const TYPOGRAPHIC_REPLACEMENTS: &[(char, &str)] = &[
    ('\u{2019}', "'"), // Right single quotation mark
    ('\u{2014}', " "), // Em dash
    ('\u{2013}', " "), // En dash
];

pub static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WORD_PATTERN).expect("WORD_PATTERN should be a valid regex"));
