//! Parsed resume as produced by the external extraction service.
//!
//! Deserialization never fails on shape: missing or mistyped sections become
//! empty, non-string elements are skipped, and a bad `word_count` reads as 0.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Placeholder prefixes/fragments the extractor emits instead of real entries.
const SENTINEL_PREFIXES: &[&str] = &[
    "no work experience",
    "no experience",
    "no education",
    "no projects",
];
const SENTINEL_FRAGMENTS: &[&str] = &[
    "couldn't be parsed",
    "could not be parsed",
    "information not available",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Contact {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
}

impl Contact {
    pub fn has_email(&self) -> bool {
        self.emails.iter().any(|e| !e.trim().is_empty())
    }

    pub fn has_phone(&self) -> bool {
        self.phones.iter().any(|p| !p.trim().is_empty())
    }

    fn from_value(value: &Value) -> Self {
        Self {
            emails: strings_of(value.get("emails")),
            phones: strings_of(value.get("phones")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedResume {
    pub contact: Contact,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub projects: Vec<String>,
    pub word_count: u64,
}

impl ParsedResume {
    /// Builds a resume from arbitrary JSON, tolerating any shape.
    pub fn from_value(value: &Value) -> Self {
        Self {
            contact: value
                .get("contact")
                .map(Contact::from_value)
                .unwrap_or_default(),
            skills: strings_of(value.get("skills")),
            experience: strings_of(value.get("experience")),
            education: strings_of(value.get("education")),
            projects: strings_of(value.get("projects")),
            word_count: count_of(value.get("word_count")),
        }
    }

    /// Experience entries that are not sentinels and longer than 30 characters.
    pub fn real_experience(&self) -> usize {
        count_real(&self.experience, 30)
    }

    /// Education entries that are not sentinels and longer than 20 characters.
    pub fn real_education(&self) -> usize {
        count_real(&self.education, 20)
    }

    pub fn real_projects(&self) -> usize {
        count_real(&self.projects, 0)
    }
}

impl<'de> Deserialize<'de> for ParsedResume {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// True for extractor placeholders like "No education section found or couldn't be parsed."
pub fn is_sentinel(entry: &str) -> bool {
    let lower = entry.trim().to_lowercase();
    SENTINEL_PREFIXES.iter().any(|p| lower.starts_with(p))
        || SENTINEL_FRAGMENTS.iter().any(|f| lower.contains(f))
}

fn count_real(entries: &[String], min_len: usize) -> usize {
    entries
        .iter()
        .map(|e| e.trim())
        .filter(|e| !is_sentinel(e) && e.chars().count() > min_len)
        .count()
}

fn strings_of(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn count_of(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f > 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}
