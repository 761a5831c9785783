use crate::types::Lemma;

/// Best-effort lemma for a lower-cased word missing from the lexicon.
///
/// Only plural noun endings are handled; anything else is returned unchanged.
pub fn lemmatize_by_suffix(word: &str) -> Lemma {
    if word.len() > 4 && word.ends_with("ies") {
        format!("{}y", &word[..word.len() - 3])
    } else if word.ends_with("sses") {
        word[..word.len() - 2].to_string()
    } else if word.len() > 3
        && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
    {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}
