pub const TEST_FILES_DIRECTORY: &str = "tests/test_files";

pub const EXPECTED_TOTAL_WORDS_PREFIX: &str = "EXPECTED_TOTAL_WORDS:";
pub const EXPECTED_UNIQUE_WORDS_PREFIX: &str = "EXPECTED_UNIQUE_WORDS:";
pub const EXPECTED_TOP_PREFIX: &str = "EXPECTED_TOP:";
pub const EXPECTED_CONTENT_TOP_PREFIX: &str = "EXPECTED_CONTENT_TOP:";
pub const COMMENT_PREFIX: &str = "COMMENT:";
