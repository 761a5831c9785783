use lexical_stats::{
    detect_linguistic_pipeline, render_report, Error, TextAnalyzer, DEFAULT_ANALYSIS_CONFIG,
};
use log::{error, info};
use std::env;
use std::fs;

fn get_text(file_path: &str) -> Result<String, Error> {
    let text = fs::read_to_string(file_path)?;
    Ok(text)
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: lexical-stats <path_to_text>");
        std::process::exit(1);
    }

    let file_path = &args[1];

    let text = match get_text(file_path) {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read {}: {}", file_path, e);
            std::process::exit(1);
        }
    };
    info!("Loaded {} bytes from {}", text.len(), file_path);

    // Detected once; the classic pass runs either way
    let linguistics = detect_linguistic_pipeline();

    let analyzer = TextAnalyzer::new(&DEFAULT_ANALYSIS_CONFIG, linguistics.as_deref());
    let report = analyzer.analyze(&text);

    print!("{}", render_report(file_path, &report));
}
