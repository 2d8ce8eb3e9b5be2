// WHY: mapping synonyms onto one canonical term exposes copies that swapped vocabulary
// but kept sentence structure

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CandidateMatch, DetectorKind, MatchDetector};
use crate::config::DetectionConfig;
use crate::corpus::ReferenceCorpus;
use crate::error::EngineError;
use crate::segmenter::Sentence;
use crate::word_pattern::WordPattern;

/// A canonical term and the words that normalize onto it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymGroup {
    pub canonical: String,
    pub synonyms: Vec<String>,
}

impl SynonymGroup {
    pub fn new(canonical: &str, synonyms: &[&str]) -> Self {
        Self {
            canonical: canonical.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Ordered synonym groups. Groups apply in order, so a word listed in two groups maps to the
/// earlier canonical term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymTable {
    groups: Vec<SynonymGroup>,
}

impl SynonymTable {
    pub fn new(groups: Vec<SynonymGroup>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[SynonymGroup] {
        &self.groups
    }
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self::new(vec![
            SynonymGroup::new("significant", &["substantial", "considerable", "important", "major"]),
            SynonymGroup::new("alterations", &["changes", "modifications", "transformations"]),
            SynonymGroup::new("documented", &["recorded", "observed", "noted"]),
            SynonymGroup::new("species", &["organisms", "creatures", "lifeforms"]),
            SynonymGroup::new("potential", &["possible", "likely", "probable"]),
            SynonymGroup::new("extinction", &["disappearance", "eradication", "dying out"]),
            SynonymGroup::new("habitat", &["environment", "ecosystem", "natural home"]),
            SynonymGroup::new("loss", &["destruction", "degradation", "reduction"]),
            SynonymGroup::new("unprecedented", &["unparalleled", "extraordinary", "unmatched"]),
            SynonymGroup::new("primarily", &["mainly", "chiefly", "predominantly"]),
            SynonymGroup::new("accelerated", &["increased", "hastened", "expedited"]),
            SynonymGroup::new("urgent", &["pressing", "critical", "immediate"]),
            SynonymGroup::new("coordinated", &["collaborative", "unified", "joint"]),
            SynonymGroup::new("international", &["global", "worldwide", "multinational"]),
            SynonymGroup::new("technologies", &["innovations", "advancements", "developments"]),
            SynonymGroup::new("concerns", &["worries", "issues", "problems"]),
            SynonymGroup::new("dramatic", &["striking", "remarkable", "substantial"]),
            SynonymGroup::new("competitive", &["viable", "comparable", "efficient"]),
            SynonymGroup::new("transformed", &["changed", "altered", "modified"]),
            SynonymGroup::new("challenges", &["difficulties", "problems", "obstacles"]),
        ])
    }
}

/// Compiled form of a [`SynonymTable`]
pub struct SynonymNormalizer {
    rules: Vec<(String, Vec<WordPattern>)>,
}

impl SynonymNormalizer {
    pub fn new(table: &SynonymTable) -> Result<Self, EngineError> {
        let rules = table
            .groups()
            .iter()
            .map(|group| {
                let patterns = group
                    .synonyms
                    .iter()
                    .map(|s| WordPattern::new(s))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((group.canonical.clone(), patterns))
            })
            .collect::<Result<Vec<_>, EngineError>>()?;
        Ok(Self { rules })
    }

    /// Replace every whole-word synonym (any casing) with its canonical term.
    /// Text outside the replaced words keeps its casing.
    pub fn normalize(&self, text: &str) -> String {
        let mut normalized = text.to_string();
        for (canonical, patterns) in &self.rules {
            for pattern in patterns {
                if let Cow::Owned(replaced) = pattern.replace_all(&normalized, canonical) {
                    normalized = replaced;
                }
            }
        }
        normalized
    }
}

/// Containment of the normalized sentence in a normalized passage
pub struct SynonymDetector {
    normalizer: SynonymNormalizer,
    min_normalized_chars: usize,
    normalized_passages: Vec<(String, String)>,
}

impl SynonymDetector {
    pub fn new(
        corpus: &ReferenceCorpus,
        table: &SynonymTable,
        config: &DetectionConfig,
    ) -> Result<Self, EngineError> {
        let normalizer = SynonymNormalizer::new(table)?;
        let normalized_passages = corpus
            .iter()
            .map(|p| (p.id.clone(), normalizer.normalize(&p.text)))
            .collect();

        Ok(Self {
            normalizer,
            min_normalized_chars: config.synonym_min_normalized_chars,
            normalized_passages,
        })
    }

    fn normalized_passage<'a>(&'a self, position: usize, id: &str, text: &str) -> Cow<'a, str> {
        match self.normalized_passages.get(position) {
            Some((cached_id, normalized)) if cached_id == id => Cow::Borrowed(normalized.as_str()),
            _ => Cow::Owned(self.normalizer.normalize(text)),
        }
    }
}

impl MatchDetector for SynonymDetector {
    fn kind(&self) -> DetectorKind {
        DetectorKind::Synonym
    }

    fn detect<'c>(&self, sentences: &[Sentence], corpus: &'c ReferenceCorpus) -> Vec<CandidateMatch<'c>> {
        let mut matches = Vec::new();

        for sentence in sentences {
            let normalized = self.normalizer.normalize(&sentence.text);
            let normalized_len = normalized.chars().count();
            if normalized_len <= self.min_normalized_chars {
                continue;
            }

            for (position, passage) in corpus.iter().enumerate() {
                let normalized_passage = self.normalized_passage(position, &passage.id, &passage.text);
                if !normalized_passage.contains(normalized.as_str()) {
                    continue;
                }

                let passage_len = normalized_passage.chars().count();
                let percent = (normalized_len as f64 / passage_len as f64 * 100.0).min(100.0).round();
                matches.push(CandidateMatch::new(self.kind(), sentence, passage, percent));
                break;
            }
        }

        debug!("Synonym detector produced {} candidates", matches.len());
        matches
    }
}
