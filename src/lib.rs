pub mod aggregator;
pub mod config;
pub mod corpus;
pub mod detectors;
pub mod engine;
pub mod error;
pub mod highlighter;
pub mod history;
pub mod paraphrase;
pub mod quota;
pub mod random;
pub mod reader;
pub mod report;
pub mod segmenter;
pub mod word_pattern;

// Re-export main types for convenient access
pub use config::{DetectionConfig, EngineConfig, ScoreRanges};
pub use corpus::{ReferenceCorpus, ReferencePassage};
pub use detectors::{CandidateMatch, DetectorKind, MatchDetector};
pub use engine::PlagiarismEngine;
pub use error::EngineError;
pub use highlighter::{highlight_matches, strip_highlights};
pub use paraphrase::{ParaphraseStyle, Paraphraser};
pub use random::{RandomSource, SeededRng};
pub use report::{FinalMatch, ParaphraseReport, PlagiarismReport};

// Re-export the collaborator interfaces used around the core
pub use history::{HistoryEntry, HistoryStore, JsonHistoryStore, MemoryHistoryStore, ProcessingKind};
pub use quota::{EntitlementGate, QuotaError, Tier, TierLimits};

/// Check `text` against the default reference corpus
pub fn check_plagiarism(text: &str) -> Result<PlagiarismReport, EngineError> {
    PlagiarismEngine::with_defaults()?.check(text)
}

/// Paraphrase `text` with the default dictionary
pub fn paraphrase(
    text: &str,
    style: ParaphraseStyle,
    rng: &mut dyn RandomSource,
) -> Result<ParaphraseReport, EngineError> {
    Paraphraser::new(&EngineConfig::default())?.paraphrase(text, style, rng)
}
