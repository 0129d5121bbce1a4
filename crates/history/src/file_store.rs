//! JsonHistoryStore - Role history persisted to a JSON file

use crate::store::{HistoryStore, InMemoryHistoryStore};
use serde::{Deserialize, Serialize};
use shared::{Assignment, Result, Role, RoleHistory};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// On-disk layout
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryFile {
    updated_at: Option<String>,
    #[serde(default)]
    players: BTreeMap<String, Vec<Role>>,
}

/// File-backed history store
///
/// The file is read once on open and rewritten after every change.
#[derive(Debug)]
pub struct JsonHistoryStore {
    path: PathBuf,
    inner: InMemoryHistoryStore,
    updated_at: Option<String>,
}

impl JsonHistoryStore {
    /// Open a store; a missing file means empty history
    pub fn open(path: impl Into<PathBuf>, max_entries: Option<usize>) -> Result<Self> {
        let path = path.into();

        let file = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str::<HistoryFile>(&content)?
        } else {
            HistoryFile::default()
        };

        debug!(path = %path.display(), players = file.players.len(), "History loaded");

        let history: RoleHistory = file.players.into_iter().collect();
        Ok(Self {
            path,
            inner: InMemoryHistoryStore::from_history(history, max_entries),
            updated_at: file.updated_at,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// When the file was last written (RFC 3339)
    pub fn updated_at(&self) -> Option<&str> {
        self.updated_at.as_deref()
    }

    /// Write `next` to disk, then make it the current state
    ///
    /// A failed write leaves both the file and the in-memory history unchanged.
    fn commit(&mut self, next: InMemoryHistoryStore) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let updated_at = chrono::Utc::now().to_rfc3339();
        let file = HistoryFile {
            updated_at: Some(updated_at.clone()),
            players: next.snapshot()?.into_iter().collect(),
        };

        std::fs::write(&self.path, serde_json::to_string_pretty(&file)?)?;
        self.inner = next;
        self.updated_at = Some(updated_at);

        debug!(path = %self.path.display(), players = file.players.len(), "History saved");
        Ok(())
    }
}

impl HistoryStore for JsonHistoryStore {
    fn snapshot(&self) -> Result<RoleHistory> {
        self.inner.snapshot()
    }

    fn player_history(&self, player: &str) -> Result<Vec<Role>> {
        self.inner.player_history(player)
    }

    fn record(&mut self, assignments: &[Assignment]) -> Result<()> {
        let mut next = self.inner.clone();
        next.record(assignments)?;
        self.commit(next)
    }

    fn clear(&mut self) -> Result<()> {
        let mut next = self.inner.clone();
        next.clear()?;
        self.commit(next)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::CompError;

    fn assignment(player: &str, role: &str) -> Assignment {
        Assignment::new(player, Role::new(role))
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonHistoryStore::open(dir.path().join("history.json"), None).unwrap();

        assert!(store.is_empty());
        assert!(store.updated_at().is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_record_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.json");

        {
            let mut store = JsonHistoryStore::open(&path, None).unwrap();
            store
                .record(&[assignment("Alice", "Duelist"), assignment("Bob", "Sentinel")])
                .unwrap();
            store.record(&[assignment("Alice", "Controller")]).unwrap();
            assert!(store.updated_at().is_some());
        }

        let reopened = JsonHistoryStore::open(&path, None).unwrap();
        assert_eq!(reopened.len(), 2);
        assert_eq!(
            reopened.player_history("Alice").unwrap(),
            vec![Role::new("Duelist"), Role::new("Controller")]
        );
        assert!(reopened.updated_at().is_some());
    }

    #[test]
    fn test_file_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = JsonHistoryStore::open(&path, None).unwrap();
        store.record(&[assignment("Alice", "Initiator")]).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["players"]["Alice"][0], "Initiator");
        assert!(value["updatedAt"].is_string());
    }

    #[test]
    fn test_clear_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = JsonHistoryStore::open(&path, None).unwrap();
        store.record(&[assignment("Alice", "Duelist")]).unwrap();
        store.clear().unwrap();

        let reopened = JsonHistoryStore::open(&path, None).unwrap();
        assert!(reopened.is_empty());
    }

    #[test]
    fn test_limit_applied_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(
            &path,
            r#"{"players": {"Alice": ["Duelist", "Controller", "Initiator", "Sentinel", "Duelist"]}}"#,
        )
        .unwrap();

        let store = JsonHistoryStore::open(&path, Some(4)).unwrap();
        assert_eq!(store.player_history("Alice").unwrap().len(), 4);
        assert_eq!(store.player_history("Alice").unwrap()[0], Role::new("Controller"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            JsonHistoryStore::open(&path, None),
            Err(CompError::Json(_))
        ));
    }

    // ============== Failed Write Tests ==============

    #[test]
    fn test_failed_record_leaves_history_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let mut store = JsonHistoryStore::open(&path, None).unwrap();
        store.record(&[assignment("Alice", "Duelist")]).unwrap();

        // A directory in place of the file makes the next write fail
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        assert!(store.record(&[assignment("Alice", "Sentinel")]).is_err());
        assert_eq!(
            store.player_history("Alice").unwrap(),
            vec![Role::new("Duelist")]
        );

        assert!(store.clear().is_err());
        assert_eq!(store.len(), 1);
    }
}
