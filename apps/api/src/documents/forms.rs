use serde::Deserialize;

use crate::forms::FeatureForm;

#[derive(Debug, Clone, Deserialize)]
pub struct ResumeForm {
    pub job_title: String,
    /// Work experience summary.
    pub experience: String,
    /// Comma-separated skills.
    pub skills: String,
}

impl FeatureForm for ResumeForm {
    const PANEL: &'static str = "Resume Generator";

    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("job_title", self.job_title.as_str()),
            ("experience", self.experience.as_str()),
            ("skills", self.skills.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoverLetterForm {
    pub job_title: String,
    pub company: String,
    /// Why the candidate wants this role.
    pub motivation: String,
    pub achievements: String,
}

impl FeatureForm for CoverLetterForm {
    const PANEL: &'static str = "Cover Letter Generator";

    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("job_title", self.job_title.as_str()),
            ("company", self.company.as_str()),
            ("motivation", self.motivation.as_str()),
            ("achievements", self.achievements.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkedInForm {
    pub name: String,
    pub profession: String,
    pub goals: String,
    pub key_skills: String,
}

impl FeatureForm for LinkedInForm {
    const PANEL: &'static str = "LinkedIn Summary Generator";

    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", self.name.as_str()),
            ("profession", self.profession.as_str()),
            ("goals", self.goals.as_str()),
            ("key_skills", self.key_skills.as_str()),
        ]
    }
}
