//! Prompt templates with `{name}` placeholders.
//!
//! Syntax follows Python-style format strings: `{job_title}` is a placeholder,
//! `{{` and `}}` render as literal braces. A brace sequence that is not a valid
//! placeholder (e.g. `{ not a name }`) is kept as-is.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Missing value for placeholder(s): {}", .0.join(", "))]
    MissingPlaceholder(Vec<String>),
}

/// Values substituted into a template for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    values: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// An immutable, pre-parsed prompt template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    text: String,
    segments: Vec<Segment>,
    /// Referenced placeholder names, in order of first appearance.
    placeholders: Vec<String>,
}

impl PromptTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let segments = parse_segments(&text);

        let mut seen = BTreeSet::new();
        let placeholders = segments
            .iter()
            .filter_map(|s| match s {
                Segment::Placeholder(name) if seen.insert(name.clone()) => Some(name.clone()),
                _ => None,
            })
            .collect();

        Self {
            text,
            segments,
            placeholders,
        }
    }

    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Substitutes every placeholder from `context` in a single pass.
    ///
    /// All placeholders are checked before any output is produced, so a missing
    /// name never yields a partially rendered prompt. Extra context entries are ignored.
    pub fn render(&self, context: &RenderContext) -> Result<String, TemplateError> {
        let missing: Vec<String> = self
            .placeholders
            .iter()
            .filter(|name| context.get(name).is_none())
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(TemplateError::MissingPlaceholder(missing));
        }

        let mut rendered = String::with_capacity(self.text.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Placeholder(name) => {
                    // presence checked above
                    rendered.push_str(context.get(name).unwrap_or_default());
                }
            }
        }
        Ok(rendered)
    }
}

fn parse_segments(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = text;

    while let Some(idx) = rest.find(['{', '}']) {
        literal.push_str(&rest[..idx]);
        let tail = &rest[idx..];

        if let Some(after) = tail.strip_prefix("{{") {
            literal.push('{');
            rest = after;
        } else if let Some(after) = tail.strip_prefix("}}") {
            literal.push('}');
            rest = after;
        } else if let Some((name, after)) = placeholder_at(tail) {
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Placeholder(name.to_string()));
            rest = after;
        } else {
            // lone brace: keep literally
            literal.push_str(&tail[..1]);
            rest = &tail[1..];
        }
    }
    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

/// Matches `{identifier}` at the start of `tail`, returning the name and the remainder.
fn placeholder_at(tail: &str) -> Option<(&str, &str)> {
    let body = tail.strip_prefix('{')?;
    let end = body.find('}')?;
    let name = &body[..end];
    let mut chars = name.chars();
    let first = chars.next()?;
    if !(first.is_ascii_alphabetic() || first == '_')
        || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return None;
    }
    Some((name, &body[end + 1..]))
}
