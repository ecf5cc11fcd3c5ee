//! Transit catalog: the queryable set of stops, stations, routes and
//! lines, plus per-entity arrival boards.
//!
//! Two interchangeable sources implement the same operations: the
//! embedded [`FixtureCatalog`] and the [`RemoteCatalog`] HTTP client.
//! The set of sources is closed, so dispatch is an exhaustive enum
//! rather than a trait object.

mod client;
mod colors;
mod error;
mod fixture;
mod types;

pub use client::{RemoteCatalog, RemoteCatalogConfig};
pub use colors::{FALLBACK_COLOR, line_color};
pub use error::CatalogError;
pub use fixture::FixtureCatalog;

use serde::Serialize;

use crate::domain::{BusRoute, Coordinates, SubwayLine, TransitEntity};

/// Every route and line the catalog knows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoutesAndLines {
    pub routes: Vec<BusRoute>,
    pub lines: Vec<SubwayLine>,
}

/// A transit-data source.
#[derive(Debug, Clone)]
pub enum Catalog {
    Fixture(FixtureCatalog),
    Remote(RemoteCatalog),
}

impl Catalog {
    /// Stops and stations near `origin` with static attributes.
    ///
    /// The fixture serves its whole (city-sized) candidate set and lets
    /// the ranker sort it out; a remote provider pre-filters by origin.
    pub async fn nearby_candidates(
        &self,
        origin: Coordinates,
    ) -> Result<Vec<TransitEntity>, CatalogError> {
        match self {
            Catalog::Fixture(fixture) => Ok(fixture.nearby_candidates()),
            Catalog::Remote(remote) => remote.nearby_candidates(origin).await,
        }
    }

    pub async fn routes_and_lines(&self) -> Result<RoutesAndLines, CatalogError> {
        match self {
            Catalog::Fixture(fixture) => Ok(fixture.routes_and_lines()),
            Catalog::Remote(remote) => remote.routes_and_lines().await,
        }
    }

    /// Resolve ids to entities, silently omitting unknown ids.
    pub async fn resolve_by_ids(
        &self,
        ids: &[String],
    ) -> Result<Vec<TransitEntity>, CatalogError> {
        match self {
            Catalog::Fixture(fixture) => Ok(fixture.resolve_by_ids(ids)),
            Catalog::Remote(remote) => remote.resolve_by_ids(ids).await,
        }
    }

    pub async fn search(&self, query: &str) -> Result<Vec<TransitEntity>, CatalogError> {
        match self {
            Catalog::Fixture(fixture) => Ok(fixture.search(query)),
            Catalog::Remote(remote) => remote.search(query).await,
        }
    }

    /// Attach a fresh arrival board to one entity.
    pub async fn with_arrivals(
        &self,
        entity: TransitEntity,
    ) -> Result<TransitEntity, CatalogError> {
        match self {
            Catalog::Fixture(fixture) => Ok(fixture.with_arrivals(entity)),
            Catalog::Remote(remote) => remote.with_arrivals(entity).await,
        }
    }
}
