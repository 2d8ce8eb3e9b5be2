// WHY: one segmentation pass feeds every detector so all strategies see identical sentences

use std::ops::Range;

use regex_automata::meta::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineError;

pub mod normalization;

pub use normalization::{normalize_sentence, normalize_sentence_into};

/// Configuration for sentence boundary detection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterRules {
    /// Characters that end a sentence when followed by whitespace
    pub end_punctuation: Vec<char>,
}

impl Default for SegmenterRules {
    fn default() -> Self {
        Self {
            end_punctuation: vec!['.', '!', '?'],
        }
    }
}

/// A sentence as cut from the input.
///
/// `text` is whitespace-collapsed and is what detectors compare. `raw` is the trimmed input
/// slice, byte for byte, and is what gets reported and highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub index: usize,
    pub text: String,
    pub raw: String,
}

impl Sentence {
    /// Length in characters, the unit every detector threshold is expressed in
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Splits raw text at whitespace that immediately follows terminal punctuation.
///
/// No abbreviation or decimal handling: `"Dr. Smith"` is two sentences. Callers depend
/// on that approximation, so it is kept as is.
pub struct Segmenter {
    boundary: Regex,
}

impl Segmenter {
    pub fn new(rules: &SegmenterRules) -> Result<Self, EngineError> {
        if rules.end_punctuation.is_empty() {
            return Err(EngineError::InvalidConfig(
                "segmenter needs at least one end punctuation character".into(),
            ));
        }

        let class: String = rules
            .end_punctuation
            .iter()
            .map(|c| format!("\\x{{{:X}}}", *c as u32))
            .collect();
        let pattern = format!("[{class}]\\s+");

        let boundary = Regex::new(&pattern).map_err(|e| EngineError::InvalidPattern {
            term: pattern.clone(),
            message: e.to_string(),
        })?;

        Ok(Self { boundary })
    }

    pub fn with_default_rules() -> Result<Self, EngineError> {
        Self::new(&SegmenterRules::default())
    }

    /// Segment `text` into non-empty sentences, in input order
    pub fn split(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for m in self.boundary.find_iter(text) {
            // boundary match is `<punct><whitespace+>`; the punctuation stays with the sentence
            let punct_len = text[m.start()..].chars().next().map_or(1, char::len_utf8);
            push_sentence(&mut sentences, text, start..m.start() + punct_len);
            start = m.end();
        }
        push_sentence(&mut sentences, text, start..text.len());

        debug!("Segmented {} characters into {} sentences", text.len(), sentences.len());
        sentences
    }
}

fn push_sentence(sentences: &mut Vec<Sentence>, text: &str, range: Range<usize>) {
    let raw = text[range].trim();
    if raw.is_empty() {
        return;
    }

    sentences.push(Sentence {
        index: sentences.len(),
        text: normalize_sentence(raw),
        raw: raw.to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        let segmenter = Segmenter::with_default_rules().unwrap();
        segmenter.split(text).into_iter().map(|s| s.text).collect()
    }

    #[test]
    fn test_basic_split() {
        assert_eq!(
            texts("Hello world. This is a test! How are you?"),
            vec!["Hello world.", "This is a test!", "How are you?"]
        );
    }

    #[test]
    fn test_no_split_without_following_whitespace() {
        assert_eq!(texts("Version 2.5 shipped.It works."), vec!["Version 2.5 shipped.It works."]);
    }

    #[test]
    fn test_abbreviations_are_not_special_cased() {
        assert_eq!(texts("Dr. Smith arrived."), vec!["Dr.", "Smith arrived."]);
    }

    #[test]
    fn test_whitespace_collapsed_and_empty_dropped() {
        let sentences = texts("  First\n line.   \n\n Second\tline.  ");
        assert_eq!(sentences, vec!["First line.", "Second line."]);
        assert!(texts("").is_empty());
        assert!(texts(" \n ").is_empty());
    }

    #[test]
    fn test_trailing_text_without_punctuation() {
        assert_eq!(texts("One. two without end"), vec!["One.", "two without end"]);
    }

    #[test]
    fn test_indices_and_raw_slices() {
        let segmenter = Segmenter::with_default_rules().unwrap();
        let text = "Alpha beta. Gamma delta?";
        let sentences = segmenter.split(text);

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].index, 0);
        assert_eq!(sentences[1].index, 1);
        assert_eq!(sentences[0].raw, "Alpha beta.");
        assert_eq!(sentences[1].raw, "Gamma delta?");
        assert_eq!(sentences[1].char_len(), 12);
    }

    #[test]
    fn test_raw_keeps_inner_whitespace() {
        let segmenter = Segmenter::with_default_rules().unwrap();
        let text = "  First\n  line here.   Second\tline.\n";
        let sentences = segmenter.split(text);

        assert_eq!(sentences[0].text, "First line here.");
        assert_eq!(sentences[0].raw, "First\n  line here.");
        assert_eq!(sentences[1].raw, "Second\tline.");
        assert!(sentences.iter().all(|s| text.contains(s.raw.as_str())));
    }

    #[test]
    fn test_restartable() {
        let segmenter = Segmenter::with_default_rules().unwrap();
        let text = "One here. Two here.";
        assert_eq!(segmenter.split(text), segmenter.split(text));
    }

    #[test]
    fn test_custom_rules() {
        let rules = SegmenterRules { end_punctuation: vec![';'] };
        let segmenter = Segmenter::new(&rules).unwrap();
        let sentences: Vec<_> = segmenter.split("a; b. c").into_iter().map(|s| s.text).collect();
        assert_eq!(sentences, vec!["a;", "b. c"]);

        let empty = SegmenterRules { end_punctuation: vec![] };
        assert!(Segmenter::new(&empty).is_err());
    }
}
