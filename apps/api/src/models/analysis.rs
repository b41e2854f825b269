use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::scoring::sections::{Breakdown, ScoreResult};

/// Record handed to the persistence collaborator after a resume is scored.
/// Field names follow the `resumes` collection the dashboard reads back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAnalysis {
    /// The parsed resume the score was computed from.
    pub analysis: Value,
    pub score: u32,
    /// Human-readable details, in section order.
    pub score_breakdown: Vec<String>,
    pub penalties: Vec<String>,
    pub breakdown_counts: Breakdown,
    pub parse_duration_ms: Option<u64>,
    pub created_at: DateTime<Utc>,
}

impl StoredAnalysis {
    pub fn new(
        analysis: Value,
        result: &ScoreResult,
        parse_duration_ms: Option<u64>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            analysis,
            score: result.score,
            score_breakdown: result.details.clone(),
            penalties: result.penalties.clone(),
            breakdown_counts: result.breakdown.clone(),
            parse_duration_ms,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_record_uses_collection_field_names() {
        let result = ScoreResult {
            score: 72,
            details: vec!["✓ Contact information complete (10/10)".to_string()],
            penalties: vec!["Limited work history".to_string()],
            breakdown: Breakdown {
                contact: 10,
                word_count: 420,
                ..Default::default()
            },
        };
        let created_at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let record = StoredAnalysis::new(json!({"skills": []}), &result, Some(850), created_at);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["score"], 72);
        assert_eq!(json["scoreBreakdown"][0], "✓ Contact information complete (10/10)");
        assert_eq!(json["penalties"][0], "Limited work history");
        assert_eq!(json["breakdownCounts"]["wordCount"], 420);
        assert_eq!(json["parseDurationMs"], 850);
        assert_eq!(json["createdAt"], "2025-03-01T12:00:00Z");
        assert_eq!(json["analysis"], json!({"skills": []}));
    }

    #[test]
    fn test_missing_parse_duration_serializes_null() {
        let record = StoredAnalysis::new(Value::Null, &ScoreResult::default(), None, Utc::now());
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["parseDurationMs"].is_null());
    }
}
