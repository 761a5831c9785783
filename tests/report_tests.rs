use lexical_stats::{
    render_report, AnalysisReport, ClassicStats, DiversityResult, NormalizedStats,
};

fn classic_stats() -> ClassicStats {
    ClassicStats {
        total_words: 3,
        diversity: DiversityResult::new(2, 3),
        char_frequencies: vec![('a', 4), (' ', 2), ('t', 2), ('c', 1), ('.', 1)],
        top_words: vec![("cat".to_string(), 2), ("a".to_string(), 1)],
    }
}

#[cfg(test)]
mod render_report_tests {
    use super::*;

    #[test]
    fn test_renders_classic_report_without_pipeline() {
        let report = AnalysisReport {
            top_n: 10,
            classic: classic_stats(),
            normalized: None,
        };

        let expected = "\
========== LEXICAL STATS ==========
Analyzing text found at books/cat.txt...
----------- Word Count ----------
Found 3 total words
Unique words: 2
Lexical diversity: 0.667
--------- Character Count -------
a: 4
t: 2
c: 1
--------- Top 10 Words ---------
cat: 2
a: 1
------- NLP -------
Linguistic pipeline not available
============= END ===============
";

        assert_eq!(render_report("books/cat.txt", &report), expected);
    }

    #[test]
    fn test_renders_normalized_section() {
        let report = AnalysisReport {
            top_n: 5,
            classic: classic_stats(),
            normalized: Some(NormalizedStats {
                content_words: DiversityResult::new(1, 2),
                all_words: DiversityResult::new(2, 3),
                top_content_words: vec![("cat".to_string(), 2)],
            }),
        };

        let rendered = render_report("cat.txt", &report);

        assert!(rendered.contains("--------- Top 5 Words ---------\n"));
        assert!(rendered.contains("Unique words (lemma, no stopwords): 1\n"));
        assert!(rendered.contains("Lexical diversity (lemma, no stopwords): 0.500\n"));
        assert!(rendered.contains("Unique words (lemma, with stopwords): 2\n"));
        assert!(rendered.contains("Lexical diversity (lemma, with stopwords): 0.667\n"));
        assert!(rendered
            .contains("--------- Top 5 Words (lemma, no stopwords) ---------\ncat: 2\n"));
        assert!(!rendered.contains("not available"));
        assert!(rendered.ends_with("============= END ===============\n"));
    }

    #[test]
    fn test_unavailable_notice_does_not_name_a_cause() {
        let report = AnalysisReport {
            top_n: 10,
            classic: classic_stats(),
            normalized: None,
        };

        let rendered = render_report("cat.txt", &report);

        assert!(rendered.contains("------- NLP -------\nLinguistic pipeline not available\n"));
        assert!(!rendered.contains("feature"));
    }

    #[test]
    fn test_zero_diversity_renders_with_three_decimals() {
        let report = AnalysisReport {
            top_n: 10,
            classic: ClassicStats {
                total_words: 0,
                diversity: DiversityResult::default(),
                char_frequencies: Vec::new(),
                top_words: Vec::new(),
            },
            normalized: None,
        };

        assert!(render_report("empty.txt", &report).contains("Lexical diversity: 0.000\n"));
    }
}
