// Prompt templates for the document panels.
// Placeholder names match the form field names in `forms.rs`.

/// Résumé generator. Replace: {job_title}, {experience}, {skills}
pub const RESUME_PROMPT: &str = "\
Generate a professional resume for a {job_title} role.
Experience: {experience}
Skills: {skills}
Format it in a clean, ATS-friendly markdown layout with sections and bullet points.";

/// Cover letter generator. Replace: {job_title}, {company}, {motivation}, {achievements}
pub const COVER_LETTER_PROMPT: &str = "\
Write a formal cover letter for a {job_title} position at {company}.
Reason for interest: {motivation}
Key achievements: {achievements}
Use a confident and professional tone.";

/// LinkedIn "About" section. Replace: {name}, {profession}, {goals}, {key_skills}
pub const LINKEDIN_PROMPT: &str = "\
Write a compelling LinkedIn summary for {name}, a {profession}.
Highlight their career goals: {goals}
Mention skills like: {key_skills}
Use a friendly yet professional tone.";
