// WHY: dictionary substitution keyed by style; the only nondeterminism (creative style and
// the synthetic scores) flows through an injected RandomSource

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{EngineConfig, ScoreRanges};
use crate::error::{require_text, EngineError};
use crate::random::RandomSource;
use crate::report::ParaphraseReport;
use crate::word_pattern::WordPattern;

pub mod alignment;
pub mod dictionary;

pub use alignment::mark_changed_words;
pub use dictionary::{SubstitutionEntry, SubstitutionTable};

/// Rewrite style; decides which alternative replaces a dictionary word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParaphraseStyle {
    #[default]
    Standard,
    Fluent,
    Academic,
    Simple,
    Creative,
    Business,
}

impl ParaphraseStyle {
    pub const ALL: [ParaphraseStyle; 6] = [
        Self::Standard,
        Self::Fluent,
        Self::Academic,
        Self::Simple,
        Self::Creative,
        Self::Business,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Fluent => "fluent",
            Self::Academic => "academic",
            Self::Simple => "simple",
            Self::Creative => "creative",
            Self::Business => "business",
        }
    }

    /// Pick the replacement for `word` among `alternatives` (must be non-empty).
    /// Only `Creative` consumes randomness.
    pub fn choose<'a>(&self, word: &str, alternatives: &'a [String], rng: &mut dyn RandomSource) -> &'a str {
        let first = alternatives[0].as_str();
        let word_len = word.chars().count();

        let chosen = match self {
            Self::Academic => alternatives
                .iter()
                .fold(None::<&String>, |best, alt| match best {
                    Some(b) if b.chars().count() >= alt.chars().count() => Some(b),
                    _ => Some(alt),
                })
                .map(String::as_str),
            Self::Simple => alternatives
                .iter()
                .find(|alt| !alt.contains(' ') && alt.chars().count() <= word_len)
                .map(String::as_str),
            Self::Business => alternatives
                .iter()
                .find(|alt| alt.chars().count() >= 5)
                .map(String::as_str),
            Self::Fluent => alternatives.iter().find(|alt| !alt.contains('-')).map(String::as_str),
            Self::Creative => Some(alternatives[rng.pick(alternatives.len())].as_str()),
            Self::Standard => None,
        };
        chosen.unwrap_or(first)
    }
}

impl fmt::Display for ParaphraseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParaphraseStyle {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::UnsupportedStyle(s.to_string()))
    }
}

/// Compiled paraphrase dictionary
pub struct Paraphraser {
    entries: Vec<(SubstitutionEntry, WordPattern)>,
    scores: ScoreRanges,
}

impl Paraphraser {
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        let entries = config
            .substitutions
            .entries()
            .iter()
            .map(|entry| {
                if entry.alternatives.is_empty() {
                    return Err(EngineError::InvalidConfig(format!(
                        "substitution {:?} has no alternatives",
                        entry.word
                    )));
                }
                Ok((entry.clone(), WordPattern::new(&entry.word)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            entries,
            scores: config.scores.clone(),
        })
    }

    /// Apply every dictionary entry in order and return the substituted text plus the
    /// number of replaced occurrences (before/after match-count delta per entry)
    pub fn substitute(&self, text: &str, style: ParaphraseStyle, rng: &mut dyn RandomSource) -> (String, u32) {
        let mut processed = text.to_string();
        let mut words_changed = 0usize;

        for (entry, pattern) in &self.entries {
            if !pattern.is_match(&processed) {
                continue;
            }
            let replacement = style.choose(&entry.word, &entry.alternatives, rng);
            let before = pattern.count(&processed);
            processed = pattern.replace_preserving_case(&processed, replacement).into_owned();
            let after = pattern.count(&processed);
            words_changed += before.saturating_sub(after);

            debug!(word = %entry.word, replacement, occurrences = before, "Substituted dictionary word");
        }

        (processed, u32::try_from(words_changed).unwrap_or(u32::MAX))
    }

    pub fn paraphrase(
        &self,
        text: &str,
        style: ParaphraseStyle,
        rng: &mut dyn RandomSource,
    ) -> Result<ParaphraseReport, EngineError> {
        require_text(text)?;

        let (rewritten, words_changed) = self.substitute(text, style, rng);
        let highlighted = mark_changed_words(text, &rewritten);

        let total_words = text.split_whitespace().count().max(1);
        let words_changed_percent = (f64::from(words_changed) / total_words as f64 * 100.0).round() as u32;

        // placeholders, not derived from the text
        let uniqueness_score = rng.in_range(self.scores.uniqueness_min, self.scores.uniqueness_max);
        let readability_score = rng.in_range(self.scores.readability_min, self.scores.readability_max);

        info!(%style, words_changed, total_words, "Paraphrased text");

        Ok(ParaphraseReport {
            text: highlighted,
            uniqueness_score,
            readability_score,
            words_changed,
            words_changed_percent,
        })
    }
}
