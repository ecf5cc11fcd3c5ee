//! Favorites persistence error types.

/// Errors writing the favorites file.
///
/// These are logged, never surfaced to the user: the in-memory set stays
/// authoritative and the file goes stale until the next successful
/// write.
#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    #[error("failed to serialize favorites: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write favorites file: {0}")]
    Write(#[source] std::io::Error),
}
