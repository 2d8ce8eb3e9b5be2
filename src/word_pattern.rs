// WHY: whole-word, case-insensitive term matching shared by synonym normalization and
// paraphrase substitution

use std::borrow::Cow;

use regex::{Captures, Regex};

use crate::error::EngineError;

/// Compiled `\b<term>\b` matcher, case-insensitive, term matched literally
#[derive(Debug, Clone)]
pub struct WordPattern {
    regex: Regex,
}

impl WordPattern {
    pub fn new(term: &str) -> Result<Self, EngineError> {
        let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
        let regex = Regex::new(&pattern).map_err(|e| EngineError::InvalidPattern {
            term: term.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { regex })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }

    /// Replace every occurrence with `replacement` verbatim (no `$` expansion)
    pub fn replace_all<'t>(&self, text: &'t str, replacement: &str) -> Cow<'t, str> {
        self.regex.replace_all(text, regex::NoExpand(replacement))
    }

    /// Replace every occurrence, capitalizing `replacement` where the occurrence starts uppercase
    pub fn replace_preserving_case<'t>(&self, text: &'t str, replacement: &str) -> Cow<'t, str> {
        let capitalized = capitalize(replacement);
        self.regex.replace_all(text, |caps: &Captures<'_>| {
            let starts_upper = caps[0].chars().next().is_some_and(char::is_uppercase);
            if starts_upper {
                capitalized.clone()
            } else {
                replacement.to_string()
            }
        })
    }
}

/// Uppercase the first character, leave the rest untouched
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
