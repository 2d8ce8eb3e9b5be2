// WHY: output-facing shapes; field names follow the JSON contract consumed by clients

use serde::{Deserialize, Serialize};

use crate::detectors::CandidateMatch;

/// A deduplicated match as reported to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalMatch {
    pub id: String,
    pub text: String,
    pub match_percentage: f64,
    pub source: String,
    pub url: String,
}

impl From<&CandidateMatch<'_>> for FinalMatch {
    fn from(candidate: &CandidateMatch<'_>) -> Self {
        Self {
            id: candidate.id.clone(),
            text: candidate.source_text.clone(),
            match_percentage: round_to_hundredths(candidate.match_percent),
            source: candidate.passage.source_name.clone(),
            url: candidate.passage.source_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlagiarismReport {
    /// Input text with highlight markup around matched passages
    pub text: String,
    pub total_match_percentage: u32,
    pub matches: Vec<FinalMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParaphraseReport {
    /// Rewritten text with changed words wrapped in highlight markup
    pub text: String,
    pub uniqueness_score: u32,
    pub readability_score: u32,
    pub words_changed: u32,
    pub words_changed_percent: u32,
}

pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
