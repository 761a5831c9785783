pub mod char_count;
pub use char_count::char_count;

pub mod count_frequencies;
pub use count_frequencies::count_frequencies;

pub mod count_tokens;
pub use count_tokens::count;

pub mod guess_part_of_speech;
pub use guess_part_of_speech::guess_part_of_speech;

pub mod lemmatize_by_suffix;
pub use lemmatize_by_suffix::lemmatize_by_suffix;

pub mod render_report;
pub use render_report::render_report;

pub mod sort_frequency_table;
pub use sort_frequency_table::sort_frequency_table;

pub mod top_n;
pub use top_n::top_n;

pub mod unique_and_diversity;
pub use unique_and_diversity::unique_and_diversity;
