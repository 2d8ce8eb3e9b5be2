// WHY: history is written after a report is produced and read only by the entitlement gate;
// the core never touches it

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, warn};

use crate::paraphrase::ParaphraseStyle;
use crate::report::{ParaphraseReport, PlagiarismReport};

pub type HistoryId = u64;

const TITLE_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingKind {
    Paraphrase,
    Plagiarism,
}

impl ProcessingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paraphrase => "paraphrase",
            Self::Plagiarism => "plagiarism",
        }
    }
}

impl std::fmt::Display for ProcessingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One processed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Assigned by the store on `record`
    #[serde(default)]
    pub id: HistoryId,
    pub user_id: Option<String>,
    pub title: String,
    pub original_text: String,
    pub processed_text: String,
    pub kind: ProcessingKind,
    pub style: Option<ParaphraseStyle>,
    pub plagiarism_percentage: Option<u32>,
    /// Unix seconds
    pub created_at: u64,
}

impl HistoryEntry {
    pub fn for_plagiarism(user_id: Option<&str>, original: &str, report: &PlagiarismReport) -> Self {
        Self {
            id: 0,
            user_id: user_id.map(str::to_string),
            title: title_for(original),
            original_text: original.to_string(),
            processed_text: report.text.clone(),
            kind: ProcessingKind::Plagiarism,
            style: None,
            plagiarism_percentage: Some(report.total_match_percentage),
            created_at: unix_now(),
        }
    }

    pub fn for_paraphrase(
        user_id: Option<&str>,
        original: &str,
        style: ParaphraseStyle,
        report: &ParaphraseReport,
    ) -> Self {
        Self {
            id: 0,
            user_id: user_id.map(str::to_string),
            title: title_for(original),
            original_text: original.to_string(),
            processed_text: report.text.clone(),
            kind: ProcessingKind::Paraphrase,
            style: Some(style),
            plagiarism_percentage: None,
            created_at: unix_now(),
        }
    }
}

/// First 50 characters of the input, always followed by "..."
pub fn title_for(text: &str) -> String {
    let mut title: String = text.chars().take(TITLE_CHARS).collect();
    title.push_str("...");
    title
}

fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Storage for processed requests
pub trait HistoryStore {
    /// Store `entry` and return its generated id
    fn record(&mut self, entry: HistoryEntry) -> HistoryId;

    /// Entries for `user_id`, newest first
    fn entries_for(&self, user_id: &str) -> Vec<&HistoryEntry>;

    fn usage_count(&self, user_id: &str, kind: ProcessingKind) -> usize {
        self.entries_for(user_id).iter().filter(|e| e.kind == kind).count()
    }
}

/// In-process history with sequential ids starting at 1
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MemoryHistoryStore {
    entries: Vec<HistoryEntry>,
    next_id: HistoryId,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn record(&mut self, mut entry: HistoryEntry) -> HistoryId {
        self.next_id = self.next_id.max(self.entries.iter().map(|e| e.id).max().unwrap_or(0)) + 1;
        entry.id = self.next_id;
        debug!(id = entry.id, kind = %entry.kind, "Recorded history entry");
        self.entries.push(entry);
        self.next_id
    }

    fn entries_for(&self, user_id: &str) -> Vec<&HistoryEntry> {
        let mut found: Vec<&HistoryEntry> = self
            .entries
            .iter()
            .filter(|e| e.user_id.as_deref() == Some(user_id))
            .collect();
        // ids break ties within the same second
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        found
    }
}

/// [`MemoryHistoryStore`] persisted as a pretty-printed JSON document
#[derive(Debug, Default, Clone)]
pub struct JsonHistoryStore {
    inner: MemoryHistoryStore,
}

impl JsonHistoryStore {
    /// Load from `path`; a missing file yields an empty store
    pub async fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No history file at {}, starting empty", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e).with_context(|| format!("Failed to read history {}", path.display())),
        };

        let inner: MemoryHistoryStore = serde_json::from_str(&content)
            .with_context(|| format!("Corrupt history file {}", path.display()))?;
        Ok(Self { inner })
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.inner)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write history {}", path.display()))?;
        if self.inner.is_empty() {
            warn!("Saved an empty history to {}", path.display());
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl HistoryStore for JsonHistoryStore {
    fn record(&mut self, entry: HistoryEntry) -> HistoryId {
        self.inner.record(entry)
    }

    fn entries_for(&self, user_id: &str) -> Vec<&HistoryEntry> {
        self.inner.entries_for(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn plagiarism_entry(user: &str, created_at: u64) -> HistoryEntry {
        let report = PlagiarismReport {
            text: "checked".into(),
            total_match_percentage: 40,
            matches: vec![],
        };
        let mut entry = HistoryEntry::for_plagiarism(Some(user), "checked", &report);
        entry.created_at = created_at;
        entry
    }

    #[test]
    fn test_title_truncation() {
        assert_eq!(title_for("short"), "short...");
        let long = "x".repeat(80);
        assert_eq!(title_for(&long), format!("{}...", "x".repeat(50)));
    }

    #[test]
    fn test_memory_store_ids_and_order() {
        let mut store = MemoryHistoryStore::new();
        assert_eq!(store.record(plagiarism_entry("alice", 100)), 1);
        assert_eq!(store.record(plagiarism_entry("alice", 300)), 2);
        assert_eq!(store.record(plagiarism_entry("bob", 200)), 3);

        let alice: Vec<HistoryId> = store.entries_for("alice").iter().map(|e| e.id).collect();
        assert_eq!(alice, vec![2, 1]);
        assert_eq!(store.usage_count("alice", ProcessingKind::Plagiarism), 2);
        assert_eq!(store.usage_count("alice", ProcessingKind::Paraphrase), 0);
        assert!(store.entries_for("carol").is_empty());
    }

    #[tokio::test]
    async fn test_json_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("history.json");

        let missing = JsonHistoryStore::load(&path).await.unwrap();
        assert!(missing.is_empty());

        let mut store = missing;
        store.record(plagiarism_entry("alice", 10));
        store.save(&path).await.unwrap();

        let mut loaded = JsonHistoryStore::load(&path).await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.entries_for("alice")[0].plagiarism_percentage, Some(40));
        // ids continue after reload
        assert_eq!(loaded.record(plagiarism_entry("alice", 11)), 2);
    }

    #[tokio::test]
    async fn test_corrupt_history_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.json");
        fs::write(&path, "not json").await.unwrap();
        assert!(JsonHistoryStore::load(&path).await.is_err());
    }
}
