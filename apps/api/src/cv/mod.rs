// CV Analyzer: PDF upload → extracted text → improvement suggestions.

pub mod extractor;
pub mod handlers;
pub mod prompts;
