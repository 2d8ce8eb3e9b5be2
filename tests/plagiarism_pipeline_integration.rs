// End-to-end plagiarism checks through the public API
// WHY: the report invariants only hold if segmentation, detection, aggregation and
// highlighting agree with each other

use paracheck::detectors::candidate_id;
use paracheck::reader;
use paracheck::{check_plagiarism, DetectorKind, EngineConfig, PlagiarismEngine};

#[path = "integration/fixtures/mod.rs"]
mod fixtures;
use fixtures::*;

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::{assert_report_invariants, sources, TestFixture};

#[test]
fn test_extended_sentence_attributed_to_climate_journal() {
    let report = check_plagiarism(EXTENDED_CLIMATE_SENTENCE).expect("Check should succeed");

    assert!(sources(&report).contains(&"Climate Research Journal"));
    assert!(report.matches.iter().all(|m| m.match_percentage > 0.0));
    assert!(report.total_match_percentage > 0);
    assert!(report.text.contains("class=\"highlight-plagiarism\""));
    assert_report_invariants(&report, EXTENDED_CLIMATE_SENTENCE);
}

#[test]
fn test_unrelated_text_has_no_matches() {
    let report = check_plagiarism(UNRELATED_TEXT).expect("Check should succeed");

    assert!(report.matches.is_empty());
    assert_eq!(report.total_match_percentage, 0);
    assert_eq!(report.text, UNRELATED_TEXT);
}

#[test]
fn test_mixed_document() {
    let report = check_plagiarism(MIXED_DOCUMENT).expect("Check should succeed");

    let found = sources(&report);
    assert_eq!(found.len(), 2, "Unexpected matches: {found:?}");
    for expected in MIXED_DOCUMENT_SOURCES {
        assert!(found.contains(&expected), "Missing {expected} in {found:?}");
    }
    assert!(report.total_match_percentage > 0 && report.total_match_percentage < 100);
    assert_report_invariants(&report, MIXED_DOCUMENT);
}

#[test]
fn test_short_sentence_never_reported() {
    let report = check_plagiarism(SHORT_SENTENCE).expect("Check should succeed");
    assert!(report.matches.is_empty());
    assert_eq!(report.total_match_percentage, 0);
}

#[test]
fn test_synonym_rewrite_detected() {
    let report = check_plagiarism(SYNONYM_REWRITE).expect("Check should succeed");

    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].source, "Renewable Energy Review");
    assert_eq!(report.matches[0].id, candidate_id(DetectorKind::Synonym, 0, "source5"));
    assert_eq!(report.matches[0].match_percentage, 100.0);
    assert_eq!(report.total_match_percentage, 100);
    assert_report_invariants(&report, SYNONYM_REWRITE);
}

#[test]
fn test_wrapped_sentence_is_highlighted_in_place() {
    let report = check_plagiarism(WRAPPED_PASSAGE).expect("Check should succeed");

    assert_eq!(sources(&report), vec!["Future of Work Institute"]);
    let matched = &report.matches[0].text;
    assert!(matched.starts_with("The global pandemic") && matched.contains(",\ncreating"));
    assert_eq!(report.text.matches("class=\"highlight-plagiarism\"").count(), 1);
    assert!(report.text.starts_with("Pasted notes.\n<span"));
    assert_report_invariants(&report, WRAPPED_PASSAGE);
}

#[test]
fn test_check_is_idempotent() {
    let engine = PlagiarismEngine::with_defaults().expect("Engine should build");
    let first = engine.check(MIXED_DOCUMENT).expect("Check should succeed");
    let second = engine.check(MIXED_DOCUMENT).expect("Check should succeed");
    assert_eq!(first, second);
}

#[test]
fn test_concurrent_and_sequential_reports_match() {
    let engine = PlagiarismEngine::with_defaults().expect("Engine should build");
    for input in [EXTENDED_CLIMATE_SENTENCE, MIXED_DOCUMENT, SYNONYM_REWRITE, UNRELATED_TEXT] {
        let sequential = engine.check(input).expect("Check should succeed");
        for _ in 0..5 {
            assert_eq!(engine.check_concurrent(input).expect("Check should succeed"), sequential);
        }
    }
}

#[test]
fn test_every_passage_verbatim_is_fully_matched() {
    let engine = PlagiarismEngine::with_defaults().expect("Engine should build");
    for passage in engine.corpus() {
        let report = engine.check(&passage.text).expect("Check should succeed");
        assert_eq!(report.matches.len(), 1, "Passage {}", passage.id);
        assert_eq!(report.matches[0].source, passage.source_name);
        assert_eq!(report.matches[0].url, passage.source_url);
        assert_eq!(report.total_match_percentage, 100);
        assert_report_invariants(&report, &passage.text);
    }
}

#[test]
fn test_empty_input_rejected() {
    for input in ["", "   ", "\n\t"] {
        let err = check_plagiarism(input).expect_err("Empty input must be rejected");
        assert!(err.is_invalid_input());
    }
}

#[tokio::test]
async fn test_check_document_read_from_disk() {
    let fixture = TestFixture::new();
    let path = fixture.create_file("essays/mixed.txt", MIXED_DOCUMENT);

    let content = reader::read_text_async(&path).await.expect("File reading should succeed");
    assert_eq!(content, MIXED_DOCUMENT);

    let report = check_plagiarism(&content).expect("Check should succeed");
    assert_report_invariants(&report, MIXED_DOCUMENT);
}

#[tokio::test]
async fn test_custom_corpus_from_config_file() {
    let fixture = TestFixture::new();
    let config_path = fixture.create_file("paracheck.json", CUSTOM_CONFIG_JSON);

    let config = EngineConfig::load(&config_path).await.expect("Config should load");
    assert_eq!(config.corpus.len(), 1);
    assert_eq!(config.detection.exact_min_chars, 12);
    // unspecified sections keep their defaults
    assert_eq!(config.detection.shingle_width, 5);

    let engine = PlagiarismEngine::new(config).expect("Engine should build");
    let report = engine.check(CUSTOM_SENTENCE).expect("Check should succeed");
    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].source, "Coastal History Quarterly");

    // the default corpus is not consulted
    let report = engine.check(EXTENDED_CLIMATE_SENTENCE).expect("Check should succeed");
    assert!(report.matches.is_empty());
}
