use flate2::write::GzEncoder;
use flate2::Compression;
use lexical_stats::{
    Error, LexiconPipeline, LinguisticConfig, LinguisticPipeline, PartOfSpeech,
};
use std::io::Write;

const TEST_LEXICON_CSV: &str = "\
word,lemma,pos,stop
the,the,DET,true
is,be,AUX,true
was,be,AUX,true
do,do,AUX,true
not,not,PART,true
men,man,NOUN,false
ran,run,VERB,false
quick,quick,ADJ,false
";

fn test_pipeline() -> LexiconPipeline {
    LexiconPipeline::from_csv_str(TEST_LEXICON_CSV).expect("Failed to parse test lexicon")
}

#[cfg(test)]
mod lexicon_loading_tests {
    use super::*;

    #[test]
    fn test_parses_entries() {
        let pipeline = test_pipeline();

        assert_eq!(pipeline.len(), 8);

        let entry = pipeline.lookup("men").expect("men should be in the lexicon");
        assert_eq!(entry.lemma, "man");
        assert_eq!(entry.part_of_speech, PartOfSpeech::Noun);
        assert!(!entry.is_stopword);

        assert!(pipeline.lookup("is").is_some_and(|entry| entry.is_stopword));
        assert!(pipeline.lookup("whale").is_none());
    }

    #[test]
    fn test_columns_may_be_reordered() {
        let pipeline =
            LexiconPipeline::from_csv_str("stop,pos,word,lemma\nfalse,NOUN,Geese,Goose\n")
                .unwrap();

        assert_eq!(pipeline.lookup("geese").unwrap().lemma, "goose");
    }

    #[test]
    fn test_missing_column_is_parser_error() {
        let result = LexiconPipeline::from_csv_str("word,lemma,pos\nmen,man,NOUN\n");
        assert!(matches!(result, Err(Error::ParserError(_))));
    }

    #[test]
    fn test_unknown_tag_is_parser_error() {
        let result = LexiconPipeline::from_csv_str("word,lemma,pos,stop\nmen,man,THING,false\n");
        assert!(matches!(result, Err(Error::ParserError(_))));
    }

    #[test]
    fn test_invalid_stop_flag_is_parser_error() {
        let result = LexiconPipeline::from_csv_str("word,lemma,pos,stop\nmen,man,NOUN,sometimes\n");
        assert!(matches!(result, Err(Error::ParserError(_))));
    }

    #[test]
    fn test_ragged_row_is_csv_error() {
        let result = LexiconPipeline::from_csv_str("word,lemma,pos,stop\nmen,man\n");
        assert!(matches!(result, Err(Error::CsvError(_))));
    }

    #[test]
    fn test_loads_from_gzip_bytes() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(TEST_LEXICON_CSV.as_bytes()).unwrap();
        let compressed = encoder.finish().unwrap();

        let pipeline = LexiconPipeline::from_gzip_bytes(&compressed).unwrap();
        assert_eq!(pipeline.len(), 8);
    }

    #[test]
    fn test_invalid_gzip_bytes_is_io_error() {
        let result = LexiconPipeline::from_gzip_bytes(b"definitely not gzip");
        assert!(matches!(result, Err(Error::IoError(_))));
    }
}

#[cfg(test)]
mod lexicon_tokenization_tests {
    use super::*;

    #[test]
    fn test_removes_stopwords_and_lemmatizes() {
        let tokens = test_pipeline().tokenize_with_linguistics(
            "The men ran. The quick dogs was not barking",
            &LinguisticConfig::content_words(),
        );

        assert_eq!(tokens, vec!["man", "run", "quick", "dog", "barking"]);
    }

    #[test]
    fn test_keeps_stopwords_when_requested() {
        let tokens = test_pipeline()
            .tokenize_with_linguistics("The men was quick", &LinguisticConfig::all_words());

        assert_eq!(tokens, vec!["the", "man", "be", "quick"]);
    }

    #[test]
    fn test_surface_forms_without_lemmatization() {
        let config = LinguisticConfig {
            remove_stopwords: false,
            lemmatize: false,
            pos_filter: None,
        };

        let tokens = test_pipeline().tokenize_with_linguistics("The Men RAN", &config);
        assert_eq!(tokens, vec!["the", "men", "ran"]);
    }

    #[test]
    fn test_contractions_drop_their_clitic() {
        let tokens = test_pipeline()
            .tokenize_with_linguistics("Don't stop\u{2014}it's 2025!", &LinguisticConfig::all_words());

        assert_eq!(tokens, vec!["do", "stop", "it"]);
    }

    #[test]
    fn test_part_of_speech_filter() {
        let config = LinguisticConfig::all_words()
            .with_pos_filter([PartOfSpeech::Noun, PartOfSpeech::Adjective]);

        let tokens = test_pipeline()
            .tokenize_with_linguistics("The quick men ran quickly to the harbors", &config);

        assert_eq!(tokens, vec!["quick", "man", "to", "harbor"]);
    }

    #[test]
    fn test_empty_part_of_speech_filter_keeps_everything() {
        let config = LinguisticConfig::all_words().with_pos_filter(Vec::<PartOfSpeech>::new());

        let tokens = test_pipeline().tokenize_with_linguistics("men ran", &config);
        assert_eq!(tokens, vec!["man", "run"]);
    }

    #[test]
    fn test_empty_text() {
        let tokens =
            test_pipeline().tokenize_with_linguistics("", &LinguisticConfig::content_words());
        assert!(tokens.is_empty());
    }
}

#[cfg(all(test, feature = "embedded-lexicon"))]
mod embedded_lexicon_tests {
    use super::*;
    use lexical_stats::detect_linguistic_pipeline;

    #[test]
    fn test_embedded_lexicon_is_detected() {
        let pipeline = detect_linguistic_pipeline().expect("Embedded lexicon should load");

        let tokens = pipeline.tokenize_with_linguistics(
            "The children went to see the whales",
            &LinguisticConfig::content_words(),
        );
        assert_eq!(tokens, vec!["child", "go", "see", "whale"]);
    }

    #[test]
    fn test_embedded_lexicon_loads_directly() {
        let pipeline = LexiconPipeline::from_embedded().unwrap();

        assert!(!pipeline.is_empty());
        assert!(pipeline.lookup("the").is_some_and(|entry| entry.is_stopword));
        assert_eq!(pipeline.lookup("went").unwrap().lemma, "go");
    }
}
