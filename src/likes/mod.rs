//! Client-local "liked products" set.
//!
//! Likes never reach the server: the storefront keeps a deduplicated set of
//! product ids in whatever persistence the embedding client provides. The
//! store takes its backend by injection so tests run against memory and the
//! desktop/storefront shell runs against a JSON file.

use std::collections::BTreeSet;
use std::io;
use std::path::PathBuf;

/// Persistence for the liked-ids set.
///
/// `load` returns `None` when there is no usable persisted state — missing
/// file, unreadable bytes, wrong shape. The store treats that as an empty
/// set; a corrupt likes file must never take the client down.
pub trait LikesBackend {
    fn load(&self) -> Option<Vec<i32>>;
    fn persist(&mut self, ids: &[i32]) -> io::Result<()>;
}

pub struct LikesStore<B> {
    backend: B,
    ids: BTreeSet<i32>,
}

impl<B: LikesBackend> LikesStore<B> {
    pub fn open(backend: B) -> Self {
        let ids = backend.load().unwrap_or_default().into_iter().collect();
        Self { backend, ids }
    }

    /// Flips membership for `id` and returns the new state
    /// (true = now liked).
    pub fn toggle(&mut self, id: i32) -> io::Result<bool> {
        let liked = if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        };

        let snapshot: Vec<i32> = self.ids.iter().copied().collect();
        self.backend.persist(&snapshot)?;

        Ok(liked)
    }

    pub fn contains(&self, id: i32) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> Vec<i32> {
        self.ids.iter().copied().collect()
    }
}

/// In-memory backend, used in tests and as a no-persistence fallback.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    ids: Vec<i32>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LikesBackend for MemoryBackend {
    fn load(&self) -> Option<Vec<i32>> {
        Some(self.ids.clone())
    }

    fn persist(&mut self, ids: &[i32]) -> io::Result<()> {
        self.ids = ids.to_vec();
        Ok(())
    }
}

/// File backend persisting the ids as a JSON array.
///
/// Loading is forgiving the way the storefront always was: non-numeric
/// entries are dropped, anything that is not a JSON array resets to empty.
#[derive(Debug)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LikesBackend for JsonFileBackend {
    fn load(&self) -> Option<Vec<i32>> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let value: serde_json::Value = serde_json::from_str(&raw).ok()?;

        let ids = value
            .as_array()?
            .iter()
            .filter_map(|entry| entry.as_i64())
            .filter_map(|id| i32::try_from(id).ok())
            .collect();

        Some(ids)
    }

    fn persist(&mut self, ids: &[i32]) -> io::Result<()> {
        let raw = serde_json::to_string(ids)?;
        std::fs::write(&self.path, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut store = LikesStore::open(MemoryBackend::new());

        assert!(store.toggle(7).unwrap());
        assert!(store.contains(7));

        assert!(!store.toggle(7).unwrap());
        assert!(!store.contains(7));
        assert!(store.ids().is_empty());
    }

    #[test]
    fn double_toggle_round_trips_to_the_original_state() {
        let mut store = LikesStore::open(MemoryBackend::new());
        store.toggle(1).unwrap();
        store.toggle(2).unwrap();
        let before = store.ids();

        store.toggle(9).unwrap();
        store.toggle(9).unwrap();

        assert_eq!(store.ids(), before);
    }

    #[test]
    fn ids_are_deduplicated() {
        let mut backend = MemoryBackend::new();
        backend.persist(&[3, 3, 5, 3]).unwrap();
        // a backend handing back duplicates still yields a set
        let store = LikesStore::open(backend);

        assert_eq!(store.ids(), vec![3, 5]);
    }

    #[test]
    fn file_backend_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("likes.json");

        let mut store = LikesStore::open(JsonFileBackend::new(&path));
        store.toggle(4).unwrap();
        store.toggle(11).unwrap();
        drop(store);

        let reopened = LikesStore::open(JsonFileBackend::new(&path));
        assert!(reopened.contains(4));
        assert!(reopened.contains(11));
        assert_eq!(reopened.ids(), vec![4, 11]);
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = LikesStore::open(JsonFileBackend::new(dir.path().join("absent.json")));

        assert!(store.ids().is_empty());
    }

    #[test]
    fn corrupt_file_resets_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("likes.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = LikesStore::open(JsonFileBackend::new(&path));

        assert!(store.ids().is_empty());
    }

    #[test]
    fn non_numeric_entries_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("likes.json");
        std::fs::write(&path, r#"[1, "deux", 3, null, 4.5]"#).unwrap();

        let store = LikesStore::open(JsonFileBackend::new(&path));

        assert_eq!(store.ids(), vec![1, 3]);
    }

    #[test]
    fn non_array_state_resets_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("likes.json");
        std::fs::write(&path, r#"{"liked": [1, 2]}"#).unwrap();

        let store = LikesStore::open(JsonFileBackend::new(&path));

        assert!(store.ids().is_empty());
    }
}
