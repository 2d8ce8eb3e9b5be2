// WHY: every threshold and dictionary lives in one deserializable document so the
// detectors, the paraphraser and the CLI never carry diverging copies

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::info;

use crate::corpus::ReferenceCorpus;
use crate::detectors::synonym::SynonymTable;
use crate::error::EngineError;
use crate::paraphrase::dictionary::SubstitutionTable;
use crate::segmenter::SegmenterRules;

/// Thresholds shared by the detectors and the aggregator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Sentences shorter than this (in characters) are skipped by the exact detector
    pub exact_min_chars: usize,
    /// Sentences shorter than this (in characters) are skipped by the fingerprint detector
    pub fingerprint_min_chars: usize,
    /// Words per shingle
    pub shingle_width: usize,
    /// Shared-shingle fraction that must be exceeded to report a match
    pub fingerprint_threshold: f64,
    /// Normalized sentence length (in characters) that must be exceeded to report a synonym match
    pub synonym_min_normalized_chars: usize,
    /// Word-overlap ratio above which a candidate is treated as a duplicate of a kept match
    pub dedup_word_overlap: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            exact_min_chars: 10,
            fingerprint_min_chars: 15,
            shingle_width: 5,
            fingerprint_threshold: 0.5,
            synonym_min_normalized_chars: 20,
            dedup_word_overlap: 0.7,
        }
    }
}

/// Half-open ranges for the synthetic paraphrase scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreRanges {
    pub uniqueness_min: u32,
    pub uniqueness_max: u32,
    pub readability_min: u32,
    pub readability_max: u32,
}

impl Default for ScoreRanges {
    fn default() -> Self {
        Self {
            uniqueness_min: 70,
            uniqueness_max: 95,
            readability_min: 80,
            readability_max: 95,
        }
    }
}

/// Complete engine configuration; any field missing from a config file takes its default
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub detection: DetectionConfig,
    pub segmenter: SegmenterRules,
    pub corpus: ReferenceCorpus,
    pub synonyms: SynonymTable,
    pub substitutions: SubstitutionTable,
    pub scores: ScoreRanges,
}

impl EngineConfig {
    /// Load and validate a JSON config file
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_json(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        info!(
            passages = config.corpus.len(),
            synonym_groups = config.synonyms.groups().len(),
            substitutions = config.substitutions.entries().len(),
            "Loaded engine configuration from {}",
            path.display()
        );
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let d = &self.detection;
        if d.shingle_width == 0 {
            return Err(EngineError::InvalidConfig("shingle_width must be at least 1".into()));
        }
        for (name, value) in [
            ("fingerprint_threshold", d.fingerprint_threshold),
            ("dedup_word_overlap", d.dedup_word_overlap),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EngineError::InvalidConfig(format!("{name} must be within [0, 1], got {value}")));
            }
        }

        if self.segmenter.end_punctuation.is_empty() {
            return Err(EngineError::InvalidConfig("segmenter needs at least one end punctuation character".into()));
        }

        if let Some(group) = self.synonyms.groups().iter().find(|g| g.synonyms.is_empty()) {
            return Err(EngineError::InvalidConfig(format!(
                "synonym group {:?} has no synonyms",
                group.canonical
            )));
        }
        if let Some(entry) = self.substitutions.entries().iter().find(|e| e.alternatives.is_empty()) {
            return Err(EngineError::InvalidConfig(format!(
                "substitution {:?} has no alternatives",
                entry.word
            )));
        }

        let s = &self.scores;
        if s.uniqueness_min > s.uniqueness_max || s.readability_min > s.readability_max {
            return Err(EngineError::InvalidConfig("score range minimum exceeds maximum".into()));
        }
        Ok(())
    }
}
