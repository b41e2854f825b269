//! Weighted Skill Scorer — turns canonical skills into the 0–25 skills sub-score.
//!
//! points = round(min(25, Σ min(weight(category), 2.2) / 18 × 25))

use std::collections::HashSet;

use crate::scoring::vocabulary::Vocabulary;

pub const MAX_SKILL_POINTS: u32 = 25;
/// Per-skill weight cap.
pub const MAX_SKILL_WEIGHT: f64 = 2.2;
/// Weighted total treated as an excellent skills section.
pub const EXCELLENT_WEIGHTED_TOTAL: f64 = 18.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillScore {
    pub points: u32,
    pub note: String,
    /// Unique skills that contributed.
    pub count: usize,
    pub weighted: f64,
}

pub fn score_skills<S: AsRef<str>>(skills: &[S], vocab: &Vocabulary) -> SkillScore {
    if skills.is_empty() {
        return SkillScore {
            points: 0,
            note: "No skills detected".to_string(),
            count: 0,
            weighted: 0.0,
        };
    }

    let mut seen = HashSet::new();
    let mut weighted = 0.0_f64;
    for skill in skills {
        let name = skill.as_ref();
        if !seen.insert(name.to_lowercase()) {
            continue;
        }
        weighted += vocab.category_of(name).weight().min(MAX_SKILL_WEIGHT);
    }

    let max = MAX_SKILL_POINTS as f64;
    let points = ((weighted / EXCELLENT_WEIGHTED_TOTAL) * max).min(max).round() as u32;

    SkillScore {
        points,
        note: format!("Weighted skills: {points}/{MAX_SKILL_POINTS} (raw={weighted:.1})"),
        count: seen.len(),
        weighted,
    }
}
