//! Rejects extracted "skills" that are obviously not skills
//! (dates, bare numbers, city names, resume boilerplate, function words).
//!
//! Runs on the *original* candidate string, independently of whether the
//! candidate matched the vocabulary.

use std::collections::HashSet;

use regex::Regex;

const MIN_LEN: usize = 2;
const MAX_LEN: usize = 40;

pub const DEFAULT_CITIES: &[&str] = &[
    "gurugram",
    "delhi",
    "mumbai",
    "bangalore",
    "india",
    "noida",
    "gurgaon",
];

pub const DEFAULT_NOISE: &[&str] = &[
    "soft skills",
    "automated",
    "portfolio",
    "email",
    "website",
    "phone",
    "linkedin",
    "chatgpt",
    // months
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
    "jan",
    "feb",
    "mar",
    "apr",
    "jun",
    "jul",
    "aug",
    "sep",
    "sept",
    "oct",
    "nov",
    "dec",
    // weekdays
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
    // stoplist
    "and",
    "or",
    "the",
    "of",
    "in",
    "on",
    "at",
    "to",
    "for",
    "with",
    "by",
    "an",
    "as",
    "is",
    "present",
    "current",
];

/// Configurable deny-list plus fixed shape checks.
#[derive(Debug, Clone)]
pub struct JunkFilter {
    date_like: Regex,
    year: Regex,
    small_number: Regex,
    deny: HashSet<String>,
}

impl JunkFilter {
    pub fn new() -> Self {
        let deny = DEFAULT_CITIES
            .iter()
            .chain(DEFAULT_NOISE)
            .map(|s| s.to_string())
            .collect();
        Self {
            date_like: Regex::new(r"\d{1,2}/\d{1,4}").expect("regex for date-like tokens"),
            year: Regex::new(r"^\d{4}$").expect("regex for bare years"),
            small_number: Regex::new(r"^\d{1,2}$").expect("regex for bare small numbers"),
            deny,
        }
    }

    /// Extends the deny-list. Terms are trimmed and compared case-insensitively;
    /// blank terms are ignored.
    pub fn with_extra_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.deny.extend(
            terms
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty()),
        );
        self
    }

    pub fn is_junk(&self, raw: &str) -> bool {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        if !(MIN_LEN..=MAX_LEN).contains(&len) {
            return true;
        }
        if self.date_like.is_match(trimmed)
            || self.year.is_match(trimmed)
            || self.small_number.is_match(trimmed)
        {
            return true;
        }
        self.deny.contains(&trimmed.to_lowercase())
    }
}

impl Default for JunkFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dates_and_numbers_are_junk() {
        let f = JunkFilter::new();
        for s in ["01/2021", "3/22", "2021", "7", "42", " 2019 "] {
            assert!(f.is_junk(s), "{s} should be junk");
        }
    }

    #[test]
    fn test_length_bounds() {
        let f = JunkFilter::new();
        assert!(f.is_junk("a"));
        assert!(f.is_junk(""));
        assert!(f.is_junk(&"x".repeat(41)));
        assert!(!f.is_junk("Go"));
        assert!(!f.is_junk(&"x".repeat(40)));
    }

    #[test]
    fn test_cities_case_insensitive() {
        let f = JunkFilter::new();
        assert!(f.is_junk("Gurugram"));
        assert!(f.is_junk("MUMBAI"));
        assert!(f.is_junk("  noida "));
    }

    #[test]
    fn test_noise_phrases() {
        let f = JunkFilter::new();
        for s in ["Soft Skills", "Portfolio", "email", "January", "friday", "the"] {
            assert!(f.is_junk(s), "{s} should be junk");
        }
    }

    #[test]
    fn test_real_skills_pass() {
        let f = JunkFilter::new();
        for s in ["React", "Node.js", "CI/CD", "C++", "Kubernetes", "Python 3"] {
            assert!(!f.is_junk(s), "{s} should pass");
        }
    }

    #[test]
    fn test_extra_terms_extend_deny_list() {
        let f = JunkFilter::new().with_extra_terms(["Pune", "  ", "Hyderabad"]);
        assert!(f.is_junk("pune"));
        assert!(f.is_junk("HYDERABAD"));
        assert!(!f.is_junk("React"));
    }
}
