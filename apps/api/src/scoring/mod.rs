// Resume Scoring Engine
// Implements: skill canonicalization, weighted skill scoring, section aggregation, grading.
// Pure and synchronous, no I/O here. HTTP glue lives in `handlers`.

pub mod canonicalize;
pub mod grade;
pub mod handlers;
pub mod junk;
pub mod sections;
pub mod skills;
pub mod vocabulary;

use tracing::debug;

use crate::models::resume::ParsedResume;
use crate::scoring::canonicalize::canonicalize_skills;
use crate::scoring::junk::JunkFilter;
use crate::scoring::sections::{aggregate, ScoreResult};
use crate::scoring::skills::{score_skills, SkillScore};
use crate::scoring::vocabulary::Vocabulary;

/// Scoring configuration: vocabulary and junk deny-list. Built once, shared
/// read-only across requests.
#[derive(Debug, Clone, Default)]
pub struct ResumeScorer {
    vocab: Vocabulary,
    junk: JunkFilter,
}

impl ResumeScorer {
    pub fn new(vocab: Vocabulary, junk: JunkFilter) -> Self {
        Self { vocab, junk }
    }

    pub fn canonicalize<S: AsRef<str>>(&self, raw: &[S]) -> Vec<String> {
        canonicalize_skills(raw, &self.vocab, &self.junk)
    }

    pub fn score_skills<S: AsRef<str>>(&self, canonical: &[S]) -> SkillScore {
        score_skills(canonical, &self.vocab)
    }

    /// Scores a resume. Returns the result together with the canonical skills
    /// it was computed from.
    pub fn score_with_skills(&self, resume: &ParsedResume) -> (ScoreResult, Vec<String>) {
        let canonical = self.canonicalize(&resume.skills);
        let skills = self.score_skills(&canonical);
        let result = aggregate(resume, &skills);
        debug!(
            "Scored resume: score={} skills={} penalties={}",
            result.score,
            skills.count,
            result.penalties.len()
        );
        (result, canonical)
    }

    pub fn score(&self, resume: &ParsedResume) -> ScoreResult {
        self.score_with_skills(resume).0
    }
}

/// Scores a resume with the built-in vocabulary and default deny-list.
pub fn score_resume(resume: &ParsedResume) -> ScoreResult {
    ResumeScorer::default().score(resume)
}
