//! Skill Canonicalizer — maps noisy extracted skill tokens onto the canonical vocabulary.
//!
//! Per candidate:
//! 1. junk check on the original string (dates, numbers, cities, boilerplate)
//! 2. normalize, then exact name/alias lookup
//! 3. fuzzy fallback: max(token-set Dice, substring ratio) against every canonical name,
//!    accepted at ≥78 for candidates from a packed list, ≥85 otherwise
//!
//! Output is deduplicated case-insensitively, first appearance wins.

use std::collections::HashSet;

use tracing::debug;

use crate::scoring::junk::JunkFilter;
use crate::scoring::vocabulary::{VocabEntry, Vocabulary};

/// Threshold for candidates that came out of a separator-packed skill list.
pub const LIST_THRESHOLD: f64 = 78.0;
/// Threshold for isolated tokens.
pub const SINGLE_THRESHOLD: f64 = 85.0;

const LIST_SEPARATORS: &[char] = &[',', ';', '•', '·', '-'];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchKind {
    Exact,
    Fuzzy { similarity: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    pub canonical: &'static str,
    pub kind: MatchKind,
}

/// Normalizes a skill string for comparison: trim (including stray list
/// punctuation at the edges), `_`/`.` → space, collapse whitespace, strip
/// trailing version markers, lower-case.
pub fn normalize(raw: &str) -> String {
    let replaced: String = raw
        .trim_matches(|c: char| c.is_whitespace() || LIST_SEPARATORS.contains(&c))
        .chars()
        .map(|c| if c == '_' || c == '.' { ' ' } else { c })
        .collect();
    let mut tokens: Vec<String> = replaced.split_whitespace().map(str::to_lowercase).collect();
    strip_version_suffix(&mut tokens);
    tokens.join(" ")
}

fn strip_version_suffix(tokens: &mut Vec<String>) {
    while tokens.len() > 1 {
        let Some(last) = tokens.last() else { break };
        if is_number(last) {
            tokens.pop();
            if tokens.len() > 1 && tokens.last().is_some_and(|t| t == "version") {
                tokens.pop();
            }
        } else if is_version_marker(last) {
            tokens.pop();
        } else {
            break;
        }
    }
}

fn is_number(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

fn is_version_marker(token: &str) -> bool {
    token.strip_prefix('v').is_some_and(is_number)
}

/// Sørensen–Dice over whitespace token sets, scaled to 0–100.
pub fn token_set_similarity(a: &str, b: &str) -> f64 {
    let ta: HashSet<&str> = a.split_whitespace().collect();
    let tb: HashSet<&str> = b.split_whitespace().collect();
    let total = ta.len() + tb.len();
    if total == 0 {
        return 0.0;
    }
    let shared = ta.intersection(&tb).count();
    (2.0 * shared as f64 / total as f64) * 100.0
}

/// 100 × shorter/longer when one string contains the other, else 0.
pub fn substring_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if !(a.contains(b) || b.contains(a)) {
        return 0.0;
    }
    let la = a.chars().count() as f64;
    let lb = b.chars().count() as f64;
    100.0 * la.min(lb) / la.max(lb)
}

pub fn similarity(a: &str, b: &str) -> f64 {
    token_set_similarity(a, b).max(substring_similarity(a, b))
}

fn threshold_for(raw: &str) -> f64 {
    if raw.contains(LIST_SEPARATORS) {
        LIST_THRESHOLD
    } else {
        SINGLE_THRESHOLD
    }
}

/// Best fuzzy candidate; ties keep the earliest vocabulary entry.
fn best_fuzzy<'v>(normalized: &str, vocab: &'v Vocabulary) -> Option<(&'v VocabEntry, f64)> {
    let mut best: Option<(&VocabEntry, f64)> = None;
    for entry in vocab.entries() {
        let score = similarity(normalized, &entry.key);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((entry, score));
        }
    }
    best
}

/// Matches a single raw candidate against the vocabulary, ignoring the junk filter.
pub fn match_skill(raw: &str, vocab: &Vocabulary) -> Option<SkillMatch> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return None;
    }

    if let Some(entry) = vocab.lookup_exact(&normalized) {
        return Some(SkillMatch {
            canonical: entry.name,
            kind: MatchKind::Exact,
        });
    }

    let (entry, score) = best_fuzzy(&normalized, vocab)?;
    if score >= threshold_for(raw) {
        debug!(
            "Fuzzy skill match: '{}' -> '{}' ({:.1})",
            raw, entry.name, score
        );
        Some(SkillMatch {
            canonical: entry.name,
            kind: MatchKind::Fuzzy { similarity: score },
        })
    } else {
        None
    }
}

/// Canonicalizes a list of raw skill candidates.
pub fn canonicalize_skills<S: AsRef<str>>(
    raw: &[S],
    vocab: &Vocabulary,
    junk: &JunkFilter,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for candidate in raw {
        let candidate = candidate.as_ref();
        if junk.is_junk(candidate) {
            continue;
        }
        let Some(m) = match_skill(candidate, vocab) else {
            continue;
        };
        if seen.insert(m.canonical.to_lowercase()) {
            out.push(m.canonical.to_string());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::vocabulary::{SkillCategory, SkillDef};

    fn canon(raw: &[&str]) -> Vec<String> {
        canonicalize_skills(raw, &Vocabulary::builtin(), &JunkFilter::new())
    }

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize("  Node.js "), "node js");
        assert_eq!(normalize("spring_boot"), "spring boot");
        assert_eq!(normalize("Tailwind    CSS"), "tailwind css");
    }

    #[test]
    fn test_normalize_strips_version_markers() {
        assert_eq!(normalize("Python 3.11"), "python");
        assert_eq!(normalize("Angular v14"), "angular");
        assert_eq!(normalize("Java version 17"), "java");
        assert_eq!(normalize("Vue.js 3"), "vue js");
    }

    #[test]
    fn test_normalize_trims_list_punctuation() {
        assert_eq!(normalize("• Docker,"), "docker");
        assert_eq!(normalize("- Redis;"), "redis");
    }

    #[test]
    fn test_normalize_keeps_single_token() {
        assert_eq!(normalize("2021"), "2021");
        assert_eq!(normalize("v8"), "v8");
    }

    #[test]
    fn test_token_set_similarity() {
        assert_eq!(token_set_similarity("spring boot", "spring boot"), 100.0);
        let s = token_set_similarity("react native", "react");
        assert!((s - 66.666).abs() < 0.01, "got {s}");
        assert_eq!(token_set_similarity("rust", "go"), 0.0);
    }

    #[test]
    fn test_substring_similarity() {
        assert_eq!(substring_similarity("redis", "redis"), 100.0);
        assert_eq!(substring_similarity("kubernetes", "kubernete"), 90.0);
        assert_eq!(substring_similarity("java", "python"), 0.0);
    }

    #[test]
    fn test_alias_equivalence() {
        for alias in ["Node", "NodeJS", "node-js"] {
            assert_eq!(canon(&[alias]), vec!["Node.js"], "alias {alias}");
        }
    }

    #[test]
    fn test_aliases_collapse_to_one() {
        assert_eq!(canon(&["Node.js", "Node", "NodeJS"]), vec!["Node.js"]);
    }

    #[test]
    fn test_junk_rejected() {
        assert!(canon(&["01/2021", "2021", "Gurugram", "a", "chatgpt"]).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        assert!(canon(&empty).is_empty());
    }

    #[test]
    fn test_idempotent_on_canonical_names() {
        let vocab = Vocabulary::builtin();
        let names: Vec<&str> = vocab.entries().iter().map(|e| e.name).collect();
        let once = canon(&names);
        assert_eq!(once, names);
        let twice = canonicalize_skills(once.as_slice(), &vocab, &JunkFilter::new());
        assert_eq!(twice, once);
    }

    #[test]
    fn test_output_uses_canonical_casing() {
        assert_eq!(canon(&["postgresql", "KUBERNETES"]), vec!["PostgreSQL", "Kubernetes"]);
    }

    #[test]
    fn test_order_of_first_appearance() {
        assert_eq!(
            canon(&["Docker", "React", "docker", "AWS"]),
            vec!["Docker", "React", "AWS"]
        );
    }

    #[test]
    fn test_fuzzy_substring_match_isolated() {
        // "kubernete" ⊂ "kubernetes": 90 ≥ 85
        let m = match_skill("Kubernete", &Vocabulary::builtin()).unwrap();
        assert_eq!(m.canonical, "Kubernetes");
        assert!(matches!(m.kind, MatchKind::Fuzzy { .. }));
    }

    #[test]
    fn test_fuzzy_threshold_depends_on_separator() {
        let vocab = Vocabulary::builtin();
        // "postgresq" vs "postgresql": 9/10 = 90 → accepted either way
        assert!(match_skill("postgresq", &vocab).is_some());
        // "mongod" vs "mongodb": 6/7 ≈ 85.7 → passes 85
        assert!(match_skill("mongod", &vocab).is_some());
        // "kotli" vs "kotlin": 5/6 ≈ 83.3, only good enough inside a list
        assert!(match_skill("kotli", &vocab).is_none());
        assert_eq!(
            match_skill("kotli,", &vocab).map(|m| m.canonical),
            Some("Kotlin")
        );
    }

    #[test]
    fn test_weak_fuzzy_dropped() {
        let vocab = Vocabulary::builtin();
        assert!(match_skill("React Native", &vocab).is_none());
        assert!(match_skill("Photoshop", &vocab).is_none());
    }

    #[test]
    fn test_tie_breaks_on_declaration_order() {
        const DEFS: &[SkillDef] = &[
            SkillDef {
                name: "Alpha Beta",
                category: SkillCategory::General,
                aliases: &[],
            },
            SkillDef {
                name: "Alpha Gamma",
                category: SkillCategory::General,
                aliases: &[],
            },
        ];
        let vocab = Vocabulary::from_defs(DEFS);
        // "alpha" vs each: dice 2/3 ≈ 66.7, substring 5/10 and 5/11 → tie on 66.7
        let m = match_skill("alpha;", &vocab);
        assert!(m.is_none(), "66.7 is below both thresholds");
        let (entry, score) = best_fuzzy("alpha", &vocab).unwrap();
        assert_eq!(entry.name, "Alpha Beta");
        assert!((score - 66.666).abs() < 0.01);
    }

    #[test]
    fn test_junk_filter_applies_to_exact_matches() {
        let junk = JunkFilter::new().with_extra_terms(["docker"]);
        let out = canonicalize_skills(&["Docker", "React"], &Vocabulary::builtin(), &junk);
        assert_eq!(out, vec!["React"]);
    }
}
