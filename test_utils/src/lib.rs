pub mod constants;

use constants::{
    COMMENT_PREFIX, EXPECTED_CONTENT_TOP_PREFIX, EXPECTED_TOP_PREFIX,
    EXPECTED_TOTAL_WORDS_PREFIX, EXPECTED_UNIQUE_WORDS_PREFIX, TEST_FILES_DIRECTORY,
};
use lexical_stats::{RankedList, Token};
use std::fs;
use std::path::{Path, PathBuf};

/// Expectations declared by annotation lines inside a test file.
#[derive(Debug, Default)]
pub struct TestFileExpectations {
    pub total_words: Option<usize>,
    pub unique_words: Option<usize>,
    pub top_words: RankedList<Token>,
    pub top_content_words: RankedList<Token>,
}

/// A test file split into the text under analysis and its expectations.
#[derive(Debug)]
pub struct TestFile {
    pub path: PathBuf,
    pub text: String,
    pub expectations: TestFileExpectations,
}

fn is_annotation(line: &str) -> bool {
    let line = line.trim_start();
    line.starts_with("EXPECTED_") || line.starts_with(COMMENT_PREFIX)
}

fn parse_ranked_entry(value: &str, file_path: &Path) -> (Token, usize) {
    let (word, count) = value
        .split_once('=')
        .unwrap_or_else(|| panic!("{:?} - Malformed ranked entry: {}", file_path, value));

    let count = count
        .trim()
        .parse()
        .unwrap_or_else(|_| panic!("{:?} - Malformed count: {}", file_path, value));

    (word.trim().to_string(), count)
}

fn parse_count(value: &str, file_path: &Path) -> usize {
    value
        .trim()
        .parse()
        .unwrap_or_else(|_| panic!("{:?} - Malformed count: {}", file_path, value))
}

/// Reads a test file, separating annotation lines from the text under analysis.
pub fn load_test_file(file_path: &Path) -> TestFile {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    // Filter out lines starting with 'EXPECTED_' or 'COMMENT:'
    let text = content
        .lines()
        .filter(|line| !is_annotation(line))
        .collect::<Vec<&str>>()
        .join("\n");

    let mut expectations = TestFileExpectations::default();

    for line in content.lines().map(str::trim) {
        if let Some(value) = line.strip_prefix(EXPECTED_TOTAL_WORDS_PREFIX) {
            expectations.total_words = Some(parse_count(value, file_path));
        } else if let Some(value) = line.strip_prefix(EXPECTED_UNIQUE_WORDS_PREFIX) {
            expectations.unique_words = Some(parse_count(value, file_path));
        } else if let Some(value) = line.strip_prefix(EXPECTED_TOP_PREFIX) {
            expectations
                .top_words
                .push(parse_ranked_entry(value, file_path));
        } else if let Some(value) = line.strip_prefix(EXPECTED_CONTENT_TOP_PREFIX) {
            expectations
                .top_content_words
                .push(parse_ranked_entry(value, file_path));
        }
    }

    TestFile {
        path: file_path.to_path_buf(),
        text,
        expectations,
    }
}

/// Lists the `.txt` files in the test files directory, sorted by name.
pub fn get_test_files() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = fs::read_dir(TEST_FILES_DIRECTORY)
        .expect("Failed to read test files directory")
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();

    paths.sort();
    paths
}
