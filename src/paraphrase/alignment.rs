// WHY: marks changed words for display. This is a positional walk, not a sequence alignment:
// a substitution that changes the word count ("extinction" -> "dying out") shifts every
// later comparison by one and over-marks the rest of the text.

pub const CHANGED_CLASS: &str = "highlight-changed";

/// Compare `original` and `rewritten` word by word (index-synchronized) and wrap every
/// rewritten word that differs from its counterpart. Words are compared lowercased with
/// non-word characters removed; trailing rewritten words are emitted unmarked.
pub fn mark_changed_words(original: &str, rewritten: &str) -> String {
    let original_words: Vec<&str> = original.split_whitespace().collect();
    let new_words: Vec<&str> = rewritten.split_whitespace().collect();

    let mut out: Vec<String> = Vec::with_capacity(new_words.len());
    for (position, new_word) in new_words.iter().enumerate() {
        let changed = original_words
            .get(position)
            .is_some_and(|old| comparable(old) != comparable(new_word));
        if changed {
            out.push(format!(r#"<span class="{CHANGED_CLASS}">{new_word}</span>"#));
        } else {
            out.push(new_word.to_string());
        }
    }
    out.join(" ")
}

fn comparable(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_substituted_words() {
        let out = mark_changed_words("The impact was profound.", "The effect was deep.");
        assert_eq!(
            out,
            "The <span class=\"highlight-changed\">effect</span> was <span class=\"highlight-changed\">deep.</span>"
        );
    }

    #[test]
    fn test_case_and_punctuation_ignored() {
        assert_eq!(mark_changed_words("Hello, world!", "hello world"), "hello world");
    }

    #[test]
    fn test_word_count_change_desynchronizes() {
        // "extinction" -> "dying out": every later word is compared one position off
        let out = mark_changed_words("extinction due to", "dying out due to");
        assert_eq!(
            out,
            "<span class=\"highlight-changed\">dying</span> <span class=\"highlight-changed\">out</span> <span class=\"highlight-changed\">due</span> to"
        );
    }

    #[test]
    fn test_whitespace_collapsed_in_output() {
        assert_eq!(mark_changed_words("a  b\nc", "a  b\nc"), "a b c");
        assert_eq!(mark_changed_words("", ""), "");
    }
}
