use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Universal part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Adjective,
    Adposition,
    Adverb,
    Auxiliary,
    CoordinatingConjunction,
    Determiner,
    Interjection,
    Noun,
    Numeral,
    Particle,
    Pronoun,
    ProperNoun,
    SubordinatingConjunction,
    Verb,
    Other,
}

impl PartOfSpeech {
    pub fn tag(self) -> &'static str {
        match self {
            PartOfSpeech::Adjective => "ADJ",
            PartOfSpeech::Adposition => "ADP",
            PartOfSpeech::Adverb => "ADV",
            PartOfSpeech::Auxiliary => "AUX",
            PartOfSpeech::CoordinatingConjunction => "CCONJ",
            PartOfSpeech::Determiner => "DET",
            PartOfSpeech::Interjection => "INTJ",
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Numeral => "NUM",
            PartOfSpeech::Particle => "PART",
            PartOfSpeech::Pronoun => "PRON",
            PartOfSpeech::ProperNoun => "PROPN",
            PartOfSpeech::SubordinatingConjunction => "SCONJ",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Other => "X",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for PartOfSpeech {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_uppercase().as_str() {
            "ADJ" => Ok(PartOfSpeech::Adjective),
            "ADP" => Ok(PartOfSpeech::Adposition),
            "ADV" => Ok(PartOfSpeech::Adverb),
            "AUX" => Ok(PartOfSpeech::Auxiliary),
            "CCONJ" => Ok(PartOfSpeech::CoordinatingConjunction),
            "DET" => Ok(PartOfSpeech::Determiner),
            "INTJ" => Ok(PartOfSpeech::Interjection),
            "NOUN" => Ok(PartOfSpeech::Noun),
            "NUM" => Ok(PartOfSpeech::Numeral),
            "PART" => Ok(PartOfSpeech::Particle),
            "PRON" => Ok(PartOfSpeech::Pronoun),
            "PROPN" => Ok(PartOfSpeech::ProperNoun),
            "SCONJ" => Ok(PartOfSpeech::SubordinatingConjunction),
            "VERB" => Ok(PartOfSpeech::Verb),
            "X" => Ok(PartOfSpeech::Other),
            _ => Err(Error::ParserError(format!(
                "Unknown part-of-speech tag: {}",
                tag
            ))),
        }
    }
}
