// WHY: word shingles catch sentences copied with small edits that break literal containment

use std::borrow::Cow;
use std::collections::HashSet;

use tracing::debug;

use super::{CandidateMatch, DetectorKind, MatchDetector};
use crate::config::DetectionConfig;
use crate::corpus::{ReferenceCorpus, ReferencePassage};
use crate::segmenter::Sentence;

/// Contiguous word n-grams of `width` words, lowercased, in text order (duplicates kept)
pub fn shingles(text: &str, width: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    if width == 0 || words.len() < width {
        return Vec::new();
    }
    words.windows(width).map(|w| w.join(" ")).collect()
}

/// Shingle-overlap detector with passage shingle sets built once at construction
pub struct FingerprintDetector {
    min_chars: usize,
    width: usize,
    threshold: f64,
    passage_shingles: Vec<(String, HashSet<String>)>,
}

impl FingerprintDetector {
    pub fn new(corpus: &ReferenceCorpus, config: &DetectionConfig) -> Self {
        let width = config.shingle_width;
        let passage_shingles = corpus
            .iter()
            .map(|p| (p.id.clone(), shingles(&p.text, width).into_iter().collect()))
            .collect();

        Self {
            min_chars: config.fingerprint_min_chars,
            width,
            threshold: config.fingerprint_threshold,
            passage_shingles,
        }
    }

    fn shingle_set(&self, position: usize, passage: &ReferencePassage) -> Cow<'_, HashSet<String>> {
        match self.passage_shingles.get(position) {
            Some((id, set)) if *id == passage.id => Cow::Borrowed(set),
            _ => Cow::Owned(shingles(&passage.text, self.width).into_iter().collect()),
        }
    }

    /// Fraction of the sentence's shingles present in the passage set; `None` when the
    /// sentence has fewer words than one shingle
    fn overlap(sentence_shingles: &[String], passage_set: &HashSet<String>) -> Option<f64> {
        if sentence_shingles.is_empty() {
            return None;
        }
        let shared = sentence_shingles.iter().filter(|s| passage_set.contains(*s)).count();
        Some(shared as f64 / sentence_shingles.len() as f64)
    }
}

impl MatchDetector for FingerprintDetector {
    fn kind(&self) -> DetectorKind {
        DetectorKind::Fingerprint
    }

    fn detect<'c>(&self, sentences: &[Sentence], corpus: &'c ReferenceCorpus) -> Vec<CandidateMatch<'c>> {
        let mut matches = Vec::new();

        for sentence in sentences {
            if sentence.char_len() < self.min_chars {
                continue;
            }
            let sentence_shingles = shingles(&sentence.text, self.width);

            for (position, passage) in corpus.iter().enumerate() {
                let set = self.shingle_set(position, passage);
                let Some(fraction) = Self::overlap(&sentence_shingles, &set) else {
                    continue;
                };
                if fraction > self.threshold {
                    let percent = (fraction * 100.0).round();
                    matches.push(CandidateMatch::new(self.kind(), sentence, passage, percent));
                    break;
                }
            }
        }

        debug!("Fingerprint detector produced {} candidates", matches.len());
        matches
    }
}
