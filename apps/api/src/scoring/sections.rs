//! Combines contact, skills, experience, education and
//! content length into the final 0–100 score.
//!
//! | Section    | Max |
//! |------------|-----|
//! | Contact    | 10  |
//! | Skills     | 25  |
//! | Experience | 35  |
//! | Education  | 15  |
//! | Content    | 15  |
//!
//! Thin resumes (skills < 5 and real experience < 2) lose a further 10 points.

use serde::{Deserialize, Serialize};

use crate::models::resume::ParsedResume;
use crate::scoring::skills::SkillScore;

pub const WEAK_RESUME_PENALTY: u32 = 10;
const WEAK_SKILL_COUNT: usize = 5;
const WEAK_EXPERIENCE_COUNT: usize = 2;

/// Raw counts behind a score. Informational only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    /// Contact points actually awarded (0, 5 or 10).
    pub contact: u32,
    pub skills: usize,
    pub experience: usize,
    pub education: usize,
    pub word_count: u64,
    pub projects: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32,
    pub details: Vec<String>,
    pub penalties: Vec<String>,
    pub breakdown: Breakdown,
}

/// Accumulates points, details and penalties in section order.
#[derive(Default)]
struct Tally {
    total: u32,
    details: Vec<String>,
    penalties: Vec<String>,
}

impl Tally {
    fn award(&mut self, points: u32, detail: String) {
        self.total += points;
        self.details.push(detail);
    }

    fn penalize(&mut self, message: &str) {
        self.penalties.push(message.to_string());
    }
}

fn score_contact(resume: &ParsedResume, tally: &mut Tally) -> u32 {
    let email = resume.contact.has_email();
    let phone = resume.contact.has_phone();
    match (email, phone) {
        (true, true) => {
            tally.award(10, "✓ Contact information complete (10/10)".to_string());
            10
        }
        (true, false) | (false, true) => {
            let have = if email { "email" } else { "phone" };
            tally.award(5, format!("⚠ Partial contact information, {have} only (5/10)"));
            5
        }
        (false, false) => {
            tally.award(0, "✗ No contact information (0/10)".to_string());
            tally.penalize("Missing contact information");
            0
        }
    }
}

fn score_skill_section(skills: &SkillScore, tally: &mut Tally) {
    if skills.count == 0 {
        tally.award(0, format!("✗ {} (0/25)", skills.note));
        tally.penalize("No skills section found or no valid skills extracted");
    } else {
        let mark = if skills.points >= 15 { "✓" } else { "⚠" };
        tally.award(
            skills.points,
            format!("{mark} {} across {} skills", skills.note, skills.count),
        );
    }
    // Independent of the count check: an empty list also scores under 10.
    if skills.points < 10 {
        tally.penalize("Consider adding more relevant technical skills");
    }
}

fn score_experience(real: usize, tally: &mut Tally) {
    match real {
        0 => {
            tally.award(0, "✗ No work experience detected (0/35)".to_string());
            tally.penalize("No work experience found");
        }
        1 => {
            tally.award(8, "⚠ 1 experience entry (8/35)".to_string());
            tally.penalize("Limited work history");
        }
        2 => {
            tally.award(18, "⚠ 2 experience entries (18/35)".to_string());
            tally.penalize("Experience section could be more detailed");
        }
        3 => tally.award(28, "✓ 3 experience entries (28/35)".to_string()),
        n => tally.award(35, format!("✓ Strong experience: {n} entries (35/35)")),
    }
}

fn score_education(real: usize, tally: &mut Tally) {
    match real {
        0 => {
            tally.award(0, "✗ No education detected (0/15)".to_string());
            tally.penalize("No education section found");
        }
        1 => tally.award(10, "✓ 1 education entry (10/15)".to_string()),
        n => tally.award(15, format!("✓ Education well documented: {n} entries (15/15)")),
    }
}

fn score_content(word_count: u64, tally: &mut Tally) {
    if word_count >= 400 {
        tally.award(15, format!("✓ Good length: {word_count} words (15/15)"));
    } else if word_count >= 250 {
        tally.award(10, format!("⚠ Moderate length: {word_count} words (10/15)"));
        tally.penalize("Could provide more detail about experience");
    } else if word_count >= 150 {
        tally.award(5, format!("⚠ Short: {word_count} words (5/15)"));
        tally.penalize("Resume lacks sufficient detail");
    } else {
        tally.award(2, format!("✗ Very short: {word_count} words (2/15)"));
        tally.penalize("Resume is critically short");
    }
}

/// Aggregates section scores. `skills` must come from the same resume's
/// canonicalized skill list.
pub fn aggregate(resume: &ParsedResume, skills: &SkillScore) -> ScoreResult {
    let mut tally = Tally::default();
    let real_experience = resume.real_experience();
    let real_education = resume.real_education();

    let contact = score_contact(resume, &mut tally);
    score_skill_section(skills, &mut tally);
    score_experience(real_experience, &mut tally);
    score_education(real_education, &mut tally);
    score_content(resume.word_count, &mut tally);

    let mut score = tally.total.min(100);
    if skills.count < WEAK_SKILL_COUNT && real_experience < WEAK_EXPERIENCE_COUNT {
        score = score.saturating_sub(WEAK_RESUME_PENALTY);
        tally.penalize("Overall resume needs significant improvement (-10 points)");
    }

    ScoreResult {
        score,
        details: tally.details,
        penalties: tally.penalties,
        breakdown: Breakdown {
            contact,
            skills: skills.count,
            experience: real_experience,
            education: real_education,
            word_count: resume.word_count,
            projects: resume.real_projects(),
        },
    }
}
