use crate::models::{LinguisticConfig, LinguisticPipeline, PartOfSpeech, Tokenizer};
use crate::types::{Lemma, Token, TokenStream};
use crate::utils::{guess_part_of_speech, lemmatize_by_suffix};
use crate::Error;
use csv::{ReaderBuilder, StringRecord, Trim};
use flate2::read::GzDecoder;
use log::{debug, warn};
use std::collections::HashMap;
use std::io::Cursor;
use std::io::Read;

#[cfg(feature = "embedded-lexicon")]
const COMPRESSED_LEXICON_BYTES: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/lexicon.csv.gz"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub lemma: Lemma,
    pub part_of_speech: PartOfSpeech,
    pub is_stopword: bool,
}

/// Linguistic pipeline backed by a word-form lexicon.
///
/// Each known word form carries its lemma, part of speech and stopword flag. Forms missing
/// from the lexicon are lemmatized and tagged by suffix, and are never stopwords.
#[derive(Debug, Clone, Default)]
pub struct LexiconPipeline {
    entries: HashMap<Token, LexiconEntry>,
}

impl LexiconPipeline {
    /// Parses a lexicon with the headers `word,lemma,pos,stop`.
    pub fn from_csv_str(csv: &str) -> Result<Self, Error> {
        let mut entries = HashMap::new();

        // Use a cursor to simulate a file reader from the string
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(Cursor::new(csv));

        let headers = reader.headers()?.clone();

        let word_index = header_position(&headers, "word")?;
        let lemma_index = header_position(&headers, "lemma")?;
        let pos_index = header_position(&headers, "pos")?;
        let stop_index = header_position(&headers, "stop")?;

        for record in reader.records() {
            let record = record?;

            let word = required_field(&record, word_index, "word")?.to_lowercase();
            let lemma = required_field(&record, lemma_index, "lemma")?.to_lowercase();
            let part_of_speech = required_field(&record, pos_index, "pos")?.parse()?;
            let is_stopword = parse_stop_flag(required_field(&record, stop_index, "stop")?)?;

            entries.insert(
                word,
                LexiconEntry {
                    lemma,
                    part_of_speech,
                    is_stopword,
                },
            );
        }

        debug!("Loaded {} lexicon entries", entries.len());

        Ok(Self { entries })
    }

    /// Decompress and parse a Gzip-compressed lexicon
    pub fn from_gzip_bytes(read_bytes: &[u8]) -> Result<Self, Error> {
        let mut decoder = GzDecoder::new(read_bytes);
        let mut decompressed_data = String::new();
        decoder.read_to_string(&mut decompressed_data)?;

        Self::from_csv_str(&decompressed_data)
    }

    /// Loads the lexicon embedded at build time.
    #[cfg(feature = "embedded-lexicon")]
    pub fn from_embedded() -> Result<Self, Error> {
        Self::from_gzip_bytes(COMPRESSED_LEXICON_BYTES)
    }

    pub fn lookup(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LinguisticPipeline for LexiconPipeline {
    fn tokenize_with_linguistics(&self, text: &str, config: &LinguisticConfig) -> TokenStream {
        let mut processed_tokens = TokenStream::new();

        for word in Tokenizer::pattern_match().tokenize(text) {
            let word = strip_clitic(&word);
            if word.is_empty() {
                continue;
            }

            let entry = self.lookup(word);

            if config.remove_stopwords && entry.is_some_and(|entry| entry.is_stopword) {
                continue;
            }

            if let Some(pos_filter) = config.pos_filter.as_ref().filter(|f| !f.is_empty()) {
                let part_of_speech =
                    entry.map_or_else(|| guess_part_of_speech(word), |entry| entry.part_of_speech);
                if !pos_filter.contains(&part_of_speech) {
                    continue;
                }
            }

            let token = match (config.lemmatize, entry) {
                (true, Some(entry)) => entry.lemma.clone(),
                (true, None) => lemmatize_by_suffix(word),
                (false, _) => word.to_string(),
            };

            processed_tokens.push(token);
        }

        processed_tokens
    }
}

/// Returns the embedded lexicon pipeline, or `None` if it cannot be loaded.
///
/// Intended to be called once at startup.
#[cfg(feature = "embedded-lexicon")]
pub fn detect_linguistic_pipeline() -> Option<Box<dyn LinguisticPipeline>> {
    match LexiconPipeline::from_embedded() {
        Ok(pipeline) => {
            log::info!(
                "Linguistic pipeline available ({} lexicon entries)",
                pipeline.len()
            );
            Some(Box::new(pipeline))
        }
        Err(e) => {
            warn!("Linguistic pipeline unavailable: {}", e);
            None
        }
    }
}

/// Returns `None`: this build carries no lexicon.
#[cfg(not(feature = "embedded-lexicon"))]
pub fn detect_linguistic_pipeline() -> Option<Box<dyn LinguisticPipeline>> {
    warn!("Linguistic pipeline unavailable: built without the `embedded-lexicon` feature");
    None
}

/// Drops the non-alphabetic clitic of a contraction ("don't" -> "do", "it's" -> "it").
fn strip_clitic(word: &str) -> &str {
    if !word.contains('\'') {
        word
    } else if let Some(base) = word.strip_suffix("n't") {
        base
    } else {
        word.split('\'').next().unwrap_or_default()
    }
}

fn header_position(headers: &StringRecord, name: &str) -> Result<usize, Error> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", name)))
}

fn required_field<'r>(record: &'r StringRecord, index: usize, name: &str) -> Result<&'r str, Error> {
    record
        .get(index)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| Error::ParserError(format!("Missing '{}' field", name)))
}

fn parse_stop_flag(value: &str) -> Result<bool, Error> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(Error::ParserError(format!("Invalid 'stop' flag: {}", value))),
    }
}
