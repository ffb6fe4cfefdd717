//! Persisted, ordered list of launchable shortcut paths.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{data_directory, SHORTCUTS_FILE};
use crate::error::StoreResult;

/// Ordered shortcut paths backed by a JSON array on disk.
///
/// Paths that no longer exist are dropped from memory at load time but stay
/// in the file until the next mutation rewrites it.
#[derive(Debug)]
pub struct ShortcutStore {
    path: PathBuf,
    entries: Vec<PathBuf>,
}

impl ShortcutStore {
    /// Open `shortcuts.json` in the application data directory.
    pub fn open_default() -> StoreResult<Self> {
        Ok(Self::load(data_directory()?.join(SHORTCUTS_FILE)))
    }

    /// Load the store backed by `path`. Missing or unusable data yields an
    /// empty list, never an error.
    pub fn load(path: PathBuf) -> Self {
        let entries = load_entries(&path);
        ShortcutStore { path, entries }
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Append `entry` and persist the list. Adding a path that is already
    /// present is a no-op and leaves the file untouched.
    ///
    /// The in-memory list is updated before the write, so a failed save
    /// leaves the UI ahead of the file.
    pub fn add(&mut self, entry: PathBuf) -> StoreResult<bool> {
        if self.entries.contains(&entry) {
            tracing::debug!(?entry, "shortcut already present");
            return Ok(false);
        }
        self.entries.push(entry);
        self.save()?;
        Ok(true)
    }

    /// Remove `entry` and persist the list. Removing an absent path is a
    /// no-op and leaves the file untouched.
    pub fn remove(&mut self, entry: &Path) -> StoreResult<bool> {
        let before = self.entries.len();
        self.entries.retain(|p| p != entry);
        if self.entries.len() == before {
            tracing::debug!(?entry, "shortcut not in list");
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Rewrite the backing file with the in-memory list, order preserved.
    fn save(&self) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

fn load_entries(path: &Path) -> Vec<PathBuf> {
    if !path.exists() {
        return Vec::new();
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            tracing::warn!(%err, ?path, "failed to read shortcut list");
            return Vec::new();
        }
    };

    let entries: Vec<PathBuf> = match serde_json::from_str(&contents) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(%err, ?path, "failed to parse shortcut list");
            return Vec::new();
        }
    };

    // Dead paths vanish from the UI here but stay on disk until the next
    // add/remove rewrites the file.
    entries.into_iter().filter(|entry| entry.exists()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "edgebar-shortcuts-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"").expect("create file");
        path
    }

    fn persisted(path: &Path) -> Vec<PathBuf> {
        serde_json::from_str(&fs::read_to_string(path).expect("read list")).expect("parse list")
    }

    #[test]
    fn missing_file_yields_empty_list() {
        let dir = scratch_dir("missing");
        let store = ShortcutStore::load(dir.join("shortcuts.json"));
        assert!(store.entries().is_empty());
    }

    #[test]
    fn corrupt_file_yields_empty_list() {
        let dir = scratch_dir("corrupt");
        let list = dir.join("shortcuts.json");
        fs::write(&list, "[[[").expect("write corrupt file");
        assert!(ShortcutStore::load(list).entries().is_empty());
    }

    #[test]
    fn dead_paths_are_filtered_preserving_order() {
        let dir = scratch_dir("filter");
        let a = touch(&dir, "a.exe");
        let gone = dir.join("gone.exe");
        let c = touch(&dir, "c.exe");
        let list = dir.join("shortcuts.json");
        fs::write(&list, serde_json::to_string(&[&a, &gone, &c]).unwrap()).unwrap();

        let store = ShortcutStore::load(list);
        assert_eq!(store.entries(), &[a, c]);
    }

    #[test]
    fn stale_entries_stay_on_disk_until_the_next_mutation() {
        let dir = scratch_dir("lazy-prune");
        let a = touch(&dir, "a.exe");
        let gone = dir.join("gone.exe");
        let list = dir.join("shortcuts.json");
        fs::write(&list, serde_json::to_string(&[&a, &gone]).unwrap()).unwrap();

        let mut store = ShortcutStore::load(list.clone());
        assert_eq!(store.entries().len(), 1);
        // Loading alone must not rewrite the file.
        assert_eq!(persisted(&list).len(), 2);

        let b = touch(&dir, "b.exe");
        assert!(store.add(b.clone()).expect("add"));
        // The first save drops the stale entry.
        assert_eq!(persisted(&list), vec![a, b]);
    }

    #[test]
    fn duplicate_add_is_a_no_op() {
        let dir = scratch_dir("dup");
        let a = touch(&dir, "a.exe");
        let list = dir.join("shortcuts.json");

        let mut store = ShortcutStore::load(list.clone());
        assert!(store.add(a.clone()).expect("first add"));
        let on_disk = fs::read_to_string(&list).expect("read list");

        assert!(!store.add(a).expect("second add"));
        assert_eq!(store.entries().len(), 1);
        assert_eq!(fs::read_to_string(&list).expect("reread list"), on_disk);
    }

    #[test]
    fn remove_absent_is_a_no_op() {
        let dir = scratch_dir("remove-absent");
        let a = touch(&dir, "a.exe");
        let mut store = ShortcutStore::load(dir.join("shortcuts.json"));
        store.add(a).expect("add");

        assert!(!store.remove(Path::new("/nowhere/else.exe")).expect("remove"));
        assert_eq!(store.entries().len(), 1);
    }

    #[test]
    fn remove_present_shrinks_the_persisted_list_by_one() {
        let dir = scratch_dir("remove");
        let a = touch(&dir, "a.exe");
        let b = touch(&dir, "b.exe");
        let list = dir.join("shortcuts.json");

        let mut store = ShortcutStore::load(list.clone());
        store.add(a.clone()).expect("add a");
        store.add(b.clone()).expect("add b");

        assert!(store.remove(&a).expect("remove a"));
        assert_eq!(store.entries(), &[b.clone()]);
        assert_eq!(persisted(&list), vec![b]);
    }
}
