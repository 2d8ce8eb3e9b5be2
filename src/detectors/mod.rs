// WHY: the three matching strategies share one interface so the engine can run them in any
// order or in parallel and still hand the aggregator a canonical candidate list

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::corpus::{ReferenceCorpus, ReferencePassage};
use crate::segmenter::Sentence;

pub mod exact;
pub mod fingerprint;
pub mod synonym;

pub use exact::ExactSubstringDetector;
pub use fingerprint::FingerprintDetector;
pub use synonym::{SynonymDetector, SynonymGroup, SynonymNormalizer, SynonymTable};

/// Which strategy produced a candidate. Declaration order is the canonical aggregation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectorKind {
    Exact,
    Fingerprint,
    Synonym,
}

impl DetectorKind {
    pub const CANONICAL_ORDER: [DetectorKind; 3] = [Self::Exact, Self::Fingerprint, Self::Synonym];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Fingerprint => "fingerprint",
            Self::Synonym => "synonym",
        }
    }
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unverified detection result from a single strategy. `source_text` is the sentence exactly
/// as it appears in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateMatch<'c> {
    pub id: String,
    pub source_text: String,
    pub match_percent: f64,
    pub passage: &'c ReferencePassage,
    pub detector: DetectorKind,
}

impl<'c> CandidateMatch<'c> {
    pub fn new(
        detector: DetectorKind,
        sentence: &Sentence,
        passage: &'c ReferencePassage,
        match_percent: f64,
    ) -> Self {
        Self {
            id: candidate_id(detector, sentence.index, &passage.id),
            source_text: sentence.raw.clone(),
            match_percent,
            passage,
            detector,
        }
    }
}

/// Name-based id: stable across runs for the same input, unique within one report
pub fn candidate_id(detector: DetectorKind, sentence_index: usize, passage_id: &str) -> String {
    let name = format!("{detector}:{sentence_index}:{passage_id}");
    Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()).to_string()
}

/// One plagiarism detection strategy
pub trait MatchDetector: Send + Sync {
    fn kind(&self) -> DetectorKind;

    /// Produce candidates for `sentences`, scanning `corpus` in its fixed order
    fn detect<'c>(&self, sentences: &[Sentence], corpus: &'c ReferenceCorpus) -> Vec<CandidateMatch<'c>>;
}
