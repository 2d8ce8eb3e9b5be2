// WHY: the detectors overlap heavily (the same sentence is often found by all three), so
// candidates are merged here before anything is reported or highlighted

use tracing::debug;

use crate::detectors::CandidateMatch;
use crate::report::FinalMatch;

/// Deduplicated matches plus the overall score
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub matches: Vec<FinalMatch>,
    pub total_match_percentage: u32,
}

/// Merges candidate lists from every detector
pub struct MatchAggregator {
    word_overlap_threshold: f64,
}

impl MatchAggregator {
    pub fn new(word_overlap_threshold: f64) -> Self {
        Self { word_overlap_threshold }
    }

    /// `candidates` must already be in canonical detector order: the greedy walk below
    /// is order-dependent and ties keep their input order.
    pub fn aggregate(&self, input: &str, candidates: &[CandidateMatch<'_>]) -> Aggregate {
        let kept = self.deduplicate(candidates);
        let total_match_percentage = character_weighted_score(input, &kept);

        debug!(
            candidates = candidates.len(),
            kept = kept.len(),
            total_match_percentage,
            "Aggregated candidate matches"
        );

        Aggregate {
            matches: kept.into_iter().map(FinalMatch::from).collect(),
            total_match_percentage,
        }
    }

    /// Longest-first greedy walk; a candidate is dropped when an already kept match contains
    /// its text, or contains more than the overlap threshold of its words
    pub fn deduplicate<'a, 'c>(&self, candidates: &'a [CandidateMatch<'c>]) -> Vec<&'a CandidateMatch<'c>> {
        let mut sorted: Vec<&CandidateMatch<'c>> = candidates.iter().collect();
        // stable: equal lengths keep canonical order
        sorted.sort_by_key(|c| std::cmp::Reverse(c.source_text.chars().count()));

        let mut kept: Vec<&CandidateMatch<'c>> = Vec::with_capacity(sorted.len());
        for candidate in sorted {
            match kept.iter().find(|existing| self.is_duplicate(candidate, existing)) {
                Some(existing) => debug!(
                    discarded = %candidate.detector,
                    kept_by = %existing.detector,
                    "Discarded duplicate candidate"
                ),
                None => kept.push(candidate),
            }
        }
        kept
    }

    fn is_duplicate(&self, candidate: &CandidateMatch<'_>, existing: &CandidateMatch<'_>) -> bool {
        let existing_text = existing.source_text.as_str();
        if existing_text.contains(candidate.source_text.as_str()) {
            return true;
        }

        let words: Vec<&str> = candidate.source_text.split_whitespace().collect();
        if words.is_empty() {
            return false;
        }
        let shared = words.iter().filter(|w| existing_text.contains(*w)).count();
        shared as f64 / words.len() as f64 > self.word_overlap_threshold
    }
}

/// `min(100, round(matched characters / input characters * 100))`
pub fn character_weighted_score(input: &str, kept: &[&CandidateMatch<'_>]) -> u32 {
    let input_chars = input.chars().count();
    if input_chars == 0 {
        return 0;
    }
    let matched_chars: usize = kept.iter().map(|m| m.source_text.chars().count()).sum();
    let percent = (matched_chars as f64 / input_chars as f64 * 100.0).round();
    percent.min(100.0) as u32
}
