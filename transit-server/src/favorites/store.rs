//! The user's favorites set.

use std::sync::Arc;

use tokio::sync::{RwLock, watch};
use tracing::{debug, warn};

use crate::domain::FavoriteItem;

use super::disk::FavoritesFile;

/// Process-wide favorites store.
///
/// Constructed once at startup and handed to whatever needs it; clones
/// share the same underlying set. Mutations hold the write guard across
/// both the in-memory change and the disk write, so read-modify-write
/// cycles never interleave. The whole set is persisted on every applied
/// mutation; a write failure leaves the in-memory state authoritative
/// and the file stale.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    inner: Arc<RwLock<Vec<FavoriteItem>>>,
    file: FavoritesFile,
    revision: Arc<watch::Sender<u64>>,
}

impl FavoritesStore {
    /// Open the store, loading whatever the file holds.
    ///
    /// Unreadable data starts the set empty rather than failing.
    pub fn open(file: FavoritesFile) -> Self {
        let items = file.load().unwrap_or_else(|| {
            debug!(path = ?file.path(), "no usable favorites file, starting empty");
            Vec::new()
        });

        let (revision, _) = watch::channel(0);
        Self {
            inner: Arc::new(RwLock::new(items)),
            file,
            revision: Arc::new(revision),
        }
    }

    /// Add a favorite.
    ///
    /// Upsert: an existing entry with the same id is replaced in place
    /// (keeping its position), so the set never holds duplicates even
    /// when callers skip the `is_favorite` check.
    pub async fn add(&self, item: FavoriteItem) {
        let mut items = self.inner.write().await;
        match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => items.push(item),
        }
        self.persist(&items);
    }

    /// Remove every entry with this id. Absent ids are a no-op.
    pub async fn remove(&self, id: &str) {
        let mut items = self.inner.write().await;
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() != before {
            self.persist(&items);
        }
    }

    pub async fn is_favorite(&self, id: &str) -> bool {
        let items = self.inner.read().await;
        items.iter().any(|item| item.id == id)
    }

    /// The current set, in insertion order.
    pub async fn all(&self) -> Vec<FavoriteItem> {
        let items = self.inner.read().await;
        items.clone()
    }

    pub async fn len(&self) -> usize {
        let items = self.inner.read().await;
        items.len()
    }

    pub async fn is_empty(&self) -> bool {
        let items = self.inner.read().await;
        items.is_empty()
    }

    /// Revision channel; the value bumps after every applied mutation.
    ///
    /// Consumers that need to react to favorites changes watch this
    /// instead of polling `all`.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn persist(&self, items: &[FavoriteItem]) {
        if let Err(error) = self.file.save(items) {
            warn!(%error, path = ?self.file.path(), "failed to persist favorites");
        }
        self.revision.send_modify(|rev| *rev += 1);
    }
}
