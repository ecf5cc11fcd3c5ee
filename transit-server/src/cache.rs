//! Short-lived caching of nearby candidate lookups.
//!
//! Nearby queries burst when a page refreshes or the user pans around.
//! Coordinate cells (~111 m per step) bound cache cardinality while a
//! short TTL keeps results fresh; arrival boards are fetched per request
//! and never cached, so estimates stay live.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::catalog::{Catalog, CatalogError, RoutesAndLines};
use crate::domain::{Coordinates, TransitEntity};

/// Cache key: quantised (lat, lon) cell, roughly 111 m per step.
type CellKey = (i32, i32);

/// Cached candidate set for one cell.
type CandidateEntry = Arc<Vec<TransitEntity>>;

/// Degrees-to-cell scale: 1/1000 of a degree per cell.
const CELL_SCALE: f64 = 1_000.0;

/// Configuration for the catalog cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached cells.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(30),
            max_capacity: 256,
        }
    }
}

/// Catalog with cached nearby lookups.
///
/// Everything except `nearby_candidates` passes straight through.
pub struct CachedCatalog {
    catalog: Catalog,
    candidates: MokaCache<CellKey, CandidateEntry>,
}

impl CachedCatalog {
    pub fn new(catalog: Catalog, config: &CacheConfig) -> Self {
        let candidates = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            catalog,
            candidates,
        }
    }

    fn cell(origin: Coordinates) -> CellKey {
        (
            (origin.lat * CELL_SCALE).round() as i32,
            (origin.lon * CELL_SCALE).round() as i32,
        )
    }

    /// Nearby candidates for `origin`, cached per coordinate cell.
    pub async fn nearby_candidates(
        &self,
        origin: Coordinates,
    ) -> Result<CandidateEntry, CatalogError> {
        let key = Self::cell(origin);

        if let Some(hit) = self.candidates.get(&key).await {
            return Ok(hit);
        }

        let fresh = Arc::new(self.catalog.nearby_candidates(origin).await?);
        self.candidates.insert(key, fresh.clone()).await;
        Ok(fresh)
    }

    pub async fn routes_and_lines(&self) -> Result<RoutesAndLines, CatalogError> {
        self.catalog.routes_and_lines().await
    }

    pub async fn resolve_by_ids(
        &self,
        ids: &[String],
    ) -> Result<Vec<TransitEntity>, CatalogError> {
        self.catalog.resolve_by_ids(ids).await
    }

    pub async fn search(&self, query: &str) -> Result<Vec<TransitEntity>, CatalogError> {
        self.catalog.search(query).await
    }

    pub async fn with_arrivals(
        &self,
        entity: TransitEntity,
    ) -> Result<TransitEntity, CatalogError> {
        self.catalog.with_arrivals(entity).await
    }

    /// Number of cached cells (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.candidates.entry_count()
    }
}
