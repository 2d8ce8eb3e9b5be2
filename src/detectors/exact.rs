use tracing::debug;

use super::{CandidateMatch, DetectorKind, MatchDetector};
use crate::corpus::ReferenceCorpus;
use crate::segmenter::Sentence;

/// Literal, case-sensitive containment of a whole sentence in a passage.
/// First containing passage wins; later passages are not consulted.
pub struct ExactSubstringDetector {
    min_chars: usize,
}

impl ExactSubstringDetector {
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }
}

impl MatchDetector for ExactSubstringDetector {
    fn kind(&self) -> DetectorKind {
        DetectorKind::Exact
    }

    fn detect<'c>(&self, sentences: &[Sentence], corpus: &'c ReferenceCorpus) -> Vec<CandidateMatch<'c>> {
        let mut matches = Vec::new();

        for sentence in sentences {
            let sentence_len = sentence.char_len();
            if sentence_len < self.min_chars {
                continue;
            }

            if let Some(passage) = corpus.iter().find(|p| p.text.contains(sentence.text.as_str())) {
                let passage_len = passage.text.chars().count();
                let percent = (sentence_len as f64 / passage_len as f64 * 100.0).round();
                matches.push(CandidateMatch::new(self.kind(), sentence, passage, percent));
            }
        }

        debug!("Exact detector produced {} candidates", matches.len());
        matches
    }
}
