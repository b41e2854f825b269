use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreGrade {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreGrade {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => ScoreGrade::Excellent,
            s if s >= 60 => ScoreGrade::Good,
            _ => ScoreGrade::NeedsImprovement,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreGrade::Excellent => "Excellent",
            ScoreGrade::Good => "Good",
            ScoreGrade::NeedsImprovement => "Needs Improvement",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            ScoreGrade::Excellent => {
                "Great start! Your resume is well-optimized for ATS systems with strong formatting and content."
            }
            ScoreGrade::Good => {
                "Good foundation! There is room to improve your resume's impact and ATS compatibility."
            }
            ScoreGrade::NeedsImprovement => {
                "Consider adding more specific achievements and optimizing your resume for better ATS compatibility."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(ScoreGrade::from_score(100), ScoreGrade::Excellent);
        assert_eq!(ScoreGrade::from_score(80), ScoreGrade::Excellent);
        assert_eq!(ScoreGrade::from_score(79), ScoreGrade::Good);
        assert_eq!(ScoreGrade::from_score(60), ScoreGrade::Good);
        assert_eq!(ScoreGrade::from_score(59), ScoreGrade::NeedsImprovement);
        assert_eq!(ScoreGrade::from_score(0), ScoreGrade::NeedsImprovement);
    }

    #[test]
    fn test_grade_serde() {
        let json = serde_json::to_string(&ScoreGrade::NeedsImprovement).unwrap();
        assert_eq!(json, r#""needs_improvement""#);
        assert_eq!(ScoreGrade::Good.label(), "Good");
    }
}
