use crate::models::AnalysisReport;

/// Renders an analysis report as plain text.
///
/// Only alphabetic characters are listed in the character section, and ratios are shown
/// with three decimal places.
pub fn render_report(source_label: &str, report: &AnalysisReport) -> String {
    let classic = &report.classic;
    let mut lines: Vec<String> = Vec::new();

    lines.push("========== LEXICAL STATS ==========".to_string());
    lines.push(format!("Analyzing text found at {}...", source_label));

    lines.push("----------- Word Count ----------".to_string());
    lines.push(format!("Found {} total words", classic.total_words));
    lines.push(format!("Unique words: {}", classic.diversity.unique_count));
    lines.push(format!("Lexical diversity: {:.3}", classic.diversity.ratio));

    lines.push("--------- Character Count -------".to_string());
    for (c, frequency) in &classic.char_frequencies {
        if !c.is_alphabetic() {
            continue;
        }
        lines.push(format!("{}: {}", c, frequency));
    }

    lines.push(format!("--------- Top {} Words ---------", report.top_n));
    for (word, frequency) in &classic.top_words {
        lines.push(format!("{}: {}", word, frequency));
    }

    match &report.normalized {
        Some(normalized) => {
            lines.push("----------- NLP - Cleaned Words -------------".to_string());
            lines.push(format!(
                "Unique words (lemma, no stopwords): {}",
                normalized.content_words.unique_count
            ));
            lines.push(format!(
                "Lexical diversity (lemma, no stopwords): {:.3}",
                normalized.content_words.ratio
            ));
            lines.push(format!(
                "Unique words (lemma, with stopwords): {}",
                normalized.all_words.unique_count
            ));
            lines.push(format!(
                "Lexical diversity (lemma, with stopwords): {:.3}",
                normalized.all_words.ratio
            ));

            lines.push(format!(
                "--------- Top {} Words (lemma, no stopwords) ---------",
                report.top_n
            ));
            for (word, frequency) in &normalized.top_content_words {
                lines.push(format!("{}: {}", word, frequency));
            }
        }
        None => {
            lines.push("------- NLP -------".to_string());
            lines.push("Linguistic pipeline not available".to_string());
        }
    }

    lines.push("============= END ===============".to_string());

    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}
