//! Durable storage for the favorites set.
//!
//! The whole set is one JSON document under a single well-known path,
//! rewritten on every mutation and read once at startup. Anything
//! unreadable (missing file, corrupt JSON, a format from the future)
//! degrades to an empty set.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::FavoriteItem;

use super::error::FavoritesError;

/// Storage format version written by this build.
const CURRENT_VERSION: u32 = 1;

/// On-disk envelope around the favorites list.
#[derive(Debug, Serialize, Deserialize)]
struct StoredFavorites {
    version: u32,
    items: Vec<FavoriteItem>,
}

/// Either the current envelope or the bare list earlier builds wrote.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredDocument {
    Envelope(StoredFavorites),
    Legacy(Vec<FavoriteItem>),
}

/// The favorites file on disk.
#[derive(Debug, Clone)]
pub struct FavoritesFile {
    path: PathBuf,
}

impl FavoritesFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Try to load the stored set.
    ///
    /// Returns `None` when the file is missing, unparseable, or carries a
    /// version newer than this build understands.
    pub fn load(&self) -> Option<Vec<FavoriteItem>> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&contents).ok()? {
            StoredDocument::Envelope(stored) => {
                (stored.version <= CURRENT_VERSION).then_some(stored.items)
            }
            StoredDocument::Legacy(items) => Some(items),
        }
    }

    /// Write the whole set, creating parent directories if needed.
    pub fn save(&self, items: &[FavoriteItem]) -> Result<(), FavoritesError> {
        let stored = StoredFavorites {
            version: CURRENT_VERSION,
            items: items.to_vec(),
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(FavoritesError::Write)?;
        }

        let json = serde_json::to_string_pretty(&stored).map_err(FavoritesError::Serialize)?;
        std::fs::write(&self.path, json).map_err(FavoritesError::Write)?;

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntityKind;
    use tempfile::tempdir;

    fn item(id: &str, name: &str) -> FavoriteItem {
        FavoriteItem::new(id, EntityKind::BusStop, name)
    }

    #[test]
    fn save_and_load() {
        let dir = tempdir().unwrap();
        let file = FavoritesFile::new(dir.path().join("favorites.json"));

        let items = vec![item("bs_1", "강남역 5번 출구"), item("bs_4", "홍대입구역")];
        file.save(&items).unwrap();

        let loaded = file.load().unwrap();
        assert_eq!(loaded, items);
    }

    #[test]
    fn missing_file_loads_as_none() {
        let file = FavoritesFile::new("/nonexistent/path/favorites.json");
        assert!(file.load().is_none());
    }

    #[test]
    fn corrupt_file_loads_as_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, "{not json").unwrap();

        let file = FavoritesFile::new(&path);
        assert!(file.load().is_none());
    }

    #[test]
    fn legacy_bare_array_still_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(
            &path,
            r#"[{"id": "br_470", "type": "bus-route", "name": "470"}]"#,
        )
        .unwrap();

        let file = FavoritesFile::new(&path);
        let loaded = file.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "br_470");
    }

    #[test]
    fn future_version_loads_as_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, r#"{"version": 99, "items": []}"#).unwrap();

        let file = FavoritesFile::new(&path);
        assert!(file.load().is_none());
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dir").join("favorites.json");
        let file = FavoritesFile::new(&path);

        file.save(&[item("bs_1", "강남역 5번 출구")]).unwrap();
        assert!(path.exists());
    }
}
