use crate::models::PartOfSpeech;

/// Guesses the part of speech of a lower-cased word missing from the lexicon.
pub fn guess_part_of_speech(word: &str) -> PartOfSpeech {
    if word.len() > 3 && word.ends_with("ly") {
        PartOfSpeech::Adverb
    } else if (word.len() > 4 && word.ends_with("ing")) || (word.len() > 3 && word.ends_with("ed")) {
        PartOfSpeech::Verb
    } else {
        PartOfSpeech::Noun
    }
}
