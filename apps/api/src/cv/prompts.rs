// Prompt template for the CV Analyzer.

/// Résumé critique. Replace: {cv_text} (the full extracted text, untruncated).
pub const ANALYZE_PROMPT: &str = "\
Analyze the following resume text and provide improvement suggestions.
Mention missing sections, formatting issues, or unclear language.

Resume:
{cv_text}";
