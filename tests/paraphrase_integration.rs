// End-to-end paraphrase behavior through the public API
// WHY: style selection, counting and change markup are only meaningful together

use paracheck::paraphrase::alignment::CHANGED_CLASS;
use paracheck::{paraphrase, EngineConfig, ParaphraseStyle, Paraphraser, SeededRng};

#[path = "integration/fixtures/mod.rs"]
mod fixtures;
use fixtures::*;

fn rewritten_words(marked: &str) -> String {
    marked
        .replace(&format!("<span class=\"{CHANGED_CLASS}\">"), "")
        .replace("</span>", "")
}

#[test]
fn test_academic_prefers_longest_alternative() {
    let report = paraphrase("The impact was clear.", ParaphraseStyle::Academic, &mut SeededRng::new(1))
        .expect("Paraphrase should succeed");
    assert_eq!(rewritten_words(&report.text), "The consequence was clear.");
    assert_eq!(report.words_changed, 1);
}

#[test]
fn test_simple_prefers_short_single_words() {
    let report = paraphrase("The alterations were small.", ParaphraseStyle::Simple, &mut SeededRng::new(1))
        .expect("Paraphrase should succeed");
    assert_eq!(rewritten_words(&report.text), "The changes were small.");
}

#[test]
fn test_every_style_rewrites_the_source() {
    for style in ParaphraseStyle::ALL {
        let report = paraphrase(PARAPHRASE_SOURCE, style, &mut SeededRng::new(3)).expect("Paraphrase should succeed");
        assert!(report.words_changed > 0, "{style} changed nothing");
        assert!(report.words_changed_percent <= 100);
        assert!(report.text.contains(CHANGED_CLASS), "{style} marked nothing");
        assert!((70..95).contains(&report.uniqueness_score));
        assert!((80..95).contains(&report.readability_score));
    }
}

#[test]
fn test_seeded_runs_are_identical() {
    let paraphraser = Paraphraser::new(&EngineConfig::default()).expect("Paraphraser should build");
    for style in ParaphraseStyle::ALL {
        let first = paraphraser
            .paraphrase(PARAPHRASE_SOURCE, style, &mut SeededRng::new(2024))
            .expect("Paraphrase should succeed");
        let second = paraphraser
            .paraphrase(PARAPHRASE_SOURCE, style, &mut SeededRng::new(2024))
            .expect("Paraphrase should succeed");
        assert_eq!(first, second, "{style} is not reproducible");
    }
}

#[test]
fn test_sentence_start_keeps_capital() {
    let report = paraphrase("Impact matters.", ParaphraseStyle::Standard, &mut SeededRng::new(1))
        .expect("Paraphrase should succeed");
    assert_eq!(rewritten_words(&report.text), "Effect matters.");
}

#[test]
fn test_custom_dictionary_from_config() {
    let config = EngineConfig::from_json(
        r#"{ "substitutions": [ { "word": "quick", "alternatives": ["rapid", "speedy"] } ] }"#,
    )
    .expect("Config should parse");
    let paraphraser = Paraphraser::new(&config).expect("Paraphraser should build");

    let report = paraphraser
        .paraphrase("A quick impact.", ParaphraseStyle::Business, &mut SeededRng::new(1))
        .expect("Paraphrase should succeed");
    // only the configured dictionary applies
    assert_eq!(rewritten_words(&report.text), "A rapid impact.");
}

#[test]
fn test_unknown_style_and_empty_text() {
    let err = "lyrical".parse::<ParaphraseStyle>().expect_err("Unknown style must be rejected");
    assert!(err.is_invalid_input());

    let err = paraphrase("", ParaphraseStyle::Fluent, &mut SeededRng::new(1)).expect_err("Empty text must be rejected");
    assert!(err.is_invalid_input());
}
