// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use paracheck::{strip_highlights, PlagiarismReport};

/// Test fixture helper for creating temporary documents and config files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self { temp_dir, root_path }
    }

    /// Write `content` to a file below the fixture root
    pub fn create_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    pub fn path<P: AsRef<Path>>(&self, relative_path: P) -> PathBuf {
        self.root_path.join(relative_path)
    }
}

/// Properties every plagiarism report must satisfy, whatever the input
pub fn assert_report_invariants(report: &PlagiarismReport, original: &str) {
    assert!(
        report.total_match_percentage <= 100,
        "Total {} out of range",
        report.total_match_percentage
    );
    assert_eq!(strip_highlights(&report.text), original, "Stripping markup must restore the input");

    for (i, a) in report.matches.iter().enumerate() {
        assert!(original.contains(a.text.as_str()), "Match text {:?} is not in the input", a.text);
        assert!((0.0..=100.0).contains(&a.match_percentage), "Match {} out of range", a.id);
        for b in report.matches.iter().skip(i + 1) {
            assert!(!a.text.contains(b.text.as_str()), "{:?} contains {:?}", a.text, b.text);
            assert!(!b.text.contains(a.text.as_str()), "{:?} contains {:?}", b.text, a.text);
            assert_ne!(a.id, b.id, "Match ids must be unique within a report");
        }
    }
}

pub fn sources(report: &PlagiarismReport) -> Vec<&str> {
    report.matches.iter().map(|m| m.source.as_str()).collect()
}
