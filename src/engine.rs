// WHY: detectors are built once per configuration and shared across requests; a check is a
// pure function of the input text and that read-only state

use tracing::{debug, info};

use crate::aggregator::MatchAggregator;
use crate::config::EngineConfig;
use crate::corpus::ReferenceCorpus;
use crate::detectors::{
    CandidateMatch, ExactSubstringDetector, FingerprintDetector, MatchDetector, SynonymDetector,
};
use crate::error::{require_text, EngineError};
use crate::highlighter::highlight_matches;
use crate::report::PlagiarismReport;
use crate::segmenter::{Segmenter, Sentence};

/// Plagiarism checker over a fixed reference corpus
pub struct PlagiarismEngine {
    segmenter: Segmenter,
    corpus: ReferenceCorpus,
    /// Kept in canonical order
    detectors: Vec<Box<dyn MatchDetector>>,
    aggregator: MatchAggregator,
}

impl PlagiarismEngine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let detection = &config.detection;
        let mut detectors: Vec<Box<dyn MatchDetector>> = vec![
            Box::new(ExactSubstringDetector::new(detection.exact_min_chars)),
            Box::new(FingerprintDetector::new(&config.corpus, detection)),
            Box::new(SynonymDetector::new(&config.corpus, &config.synonyms, detection)?),
        ];
        detectors.sort_by_key(|d| d.kind());

        info!(
            passages = config.corpus.len(),
            detectors = detectors.len(),
            "Initialized plagiarism engine"
        );

        Ok(Self {
            segmenter: Segmenter::new(&config.segmenter)?,
            aggregator: MatchAggregator::new(detection.dedup_word_overlap),
            corpus: config.corpus,
            detectors,
        })
    }

    pub fn with_defaults() -> Result<Self, EngineError> {
        Self::new(EngineConfig::default())
    }

    pub fn corpus(&self) -> &ReferenceCorpus {
        &self.corpus
    }

    /// Run every detector in canonical order and build the report
    pub fn check(&self, text: &str) -> Result<PlagiarismReport, EngineError> {
        require_text(text)?;
        let sentences = self.segmenter.split(text);

        let candidates: Vec<CandidateMatch<'_>> = self
            .detectors
            .iter()
            .flat_map(|detector| self.run_detector(detector.as_ref(), &sentences))
            .collect();

        Ok(self.build_report(text, &candidates))
    }

    /// Same report as [`check`](Self::check), with the detectors on scoped threads
    pub fn check_concurrent(&self, text: &str) -> Result<PlagiarismReport, EngineError> {
        require_text(text)?;
        let sentences = self.segmenter.split(text);

        let mut per_detector = std::thread::scope(|scope| {
            let handles: Vec<_> = self
                .detectors
                .iter()
                .map(|detector| {
                    let sentences = &sentences;
                    scope.spawn(move || (detector.kind(), self.run_detector(detector.as_ref(), sentences)))
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
                .collect::<Vec<_>>()
        });

        // completion order is arbitrary; the aggregator is not
        per_detector.sort_by_key(|(kind, _)| *kind);
        let candidates: Vec<CandidateMatch<'_>> =
            per_detector.into_iter().flat_map(|(_, found)| found).collect();

        Ok(self.build_report(text, &candidates))
    }

    fn run_detector<'c>(&'c self, detector: &dyn MatchDetector, sentences: &[Sentence]) -> Vec<CandidateMatch<'c>> {
        let found = detector.detect(sentences, &self.corpus);
        debug!(detector = %detector.kind(), candidates = found.len(), "Detector finished");
        found
    }

    fn build_report(&self, text: &str, candidates: &[CandidateMatch<'_>]) -> PlagiarismReport {
        let aggregate = self.aggregator.aggregate(text, candidates);
        let highlighted = highlight_matches(text, &aggregate.matches);

        info!(
            matches = aggregate.matches.len(),
            total_match_percentage = aggregate.total_match_percentage,
            "Plagiarism check complete"
        );

        PlagiarismReport {
            text: highlighted,
            total_match_percentage: aggregate.total_match_percentage,
            matches: aggregate.matches,
        }
    }
}
