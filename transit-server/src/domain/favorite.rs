//! Favorite references to catalog entities.

use serde::{Deserialize, Serialize};

use super::EntityKind;

/// A user's persistent reference to a catalog entity, or to one direction
/// of a subway station.
///
/// Denormalized: `name` and `details` are snapshots taken at favorite
/// time, not live-refreshed. The favorites page re-fetches current
/// details by id. Immutable once stored; toggling removes and re-adds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl FavoriteItem {
    pub fn new(id: impl Into<String>, kind: EntityKind, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
