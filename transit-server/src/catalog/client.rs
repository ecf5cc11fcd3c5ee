//! Remote transit-data HTTP client.
//!
//! Async JSON client for a hosted transit-data provider. Handles
//! authentication, bounded concurrency, and conversion to domain types.
//! Latency is real-world-unbounded; everything here is a suspension
//! point for callers.

use std::sync::Arc;

use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;

use crate::domain::{Coordinates, TransitEntity};

use super::RoutesAndLines;
use super::error::CatalogError;
use super::types::{
    ArrivalsResponseDto, EntitiesResponseDto, NearbyResponseDto, RoutesResponseDto,
};

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the remote catalog client.
#[derive(Debug, Clone)]
pub struct RemoteCatalogConfig {
    /// Base URL of the provider
    pub base_url: String,
    /// API key for authentication
    pub api_key: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RemoteCatalogConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Remote transit-data client.
///
/// Uses a semaphore to limit concurrent requests and avoid rate
/// limiting.
#[derive(Debug, Clone)]
pub struct RemoteCatalog {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl RemoteCatalog {
    pub fn new(config: RemoteCatalogConfig) -> Result<Self, CatalogError> {
        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| CatalogError::Api {
            status: 0,
            message: "invalid API key format".to_string(),
        })?;
        headers.insert("x-api-key", api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Stops and stations around `origin`, static attributes only.
    pub async fn nearby_candidates(
        &self,
        origin: Coordinates,
    ) -> Result<Vec<TransitEntity>, CatalogError> {
        let response: NearbyResponseDto = self
            .get_json(
                "/nearby",
                &[
                    ("lat", origin.lat.to_string()),
                    ("lon", origin.lon.to_string()),
                ],
            )
            .await?;

        let now = Utc::now();
        let mut out = Vec::with_capacity(response.stops.len() + response.stations.len());
        out.extend(response.stops.into_iter().map(|dto| dto.into_domain(now)));
        out.extend(response.stations.into_iter().map(|dto| dto.into_domain(now)));
        Ok(out)
    }

    pub async fn routes_and_lines(&self) -> Result<RoutesAndLines, CatalogError> {
        let response: RoutesResponseDto = self.get_json("/routes", &[]).await?;
        Ok(RoutesAndLines {
            routes: response
                .routes
                .into_iter()
                .map(|dto| dto.into_bus_route())
                .collect(),
            lines: response
                .lines
                .into_iter()
                .map(|dto| dto.into_subway_line())
                .collect(),
        })
    }

    /// Resolve entity ids. The provider omits ids it does not know.
    pub async fn resolve_by_ids(
        &self,
        ids: &[String],
    ) -> Result<Vec<TransitEntity>, CatalogError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let response: EntitiesResponseDto = self
            .get_json("/resolve", &[("ids", ids.join(","))])
            .await?;

        let now = Utc::now();
        Ok(response
            .entities
            .into_iter()
            .map(|dto| dto.into_domain(now))
            .collect())
    }

    pub async fn search(&self, query: &str) -> Result<Vec<TransitEntity>, CatalogError> {
        let response: EntitiesResponseDto = self
            .get_json("/search", &[("q", query.to_string())])
            .await?;

        let now = Utc::now();
        Ok(response
            .entities
            .into_iter()
            .map(|dto| dto.into_domain(now))
            .collect())
    }

    /// Refresh one entity's arrival board in place.
    pub async fn with_arrivals(
        &self,
        mut entity: TransitEntity,
    ) -> Result<TransitEntity, CatalogError> {
        // Routes and lines have no boards; skip the round trip.
        if entity.coordinates().is_none() {
            return Ok(entity);
        }

        let response: ArrivalsResponseDto = self
            .get_json("/arrivals", &[("id", entity.id().to_string())])
            .await?;

        let now = Utc::now();
        match &mut entity {
            TransitEntity::BusStop(stop) => {
                stop.arrivals = response
                    .arrivals
                    .into_iter()
                    .map(|dto| dto.into_domain(now))
                    .collect();
            }
            TransitEntity::SubwayStation(station) => {
                station.upbound_arrivals = response
                    .upbound
                    .into_iter()
                    .map(|dto| dto.into_domain(now))
                    .collect();
                station.downbound_arrivals = response
                    .downbound
                    .into_iter()
                    .map(|dto| dto.into_domain(now))
                    .collect();
            }
            TransitEntity::BusRoute(_) | TransitEntity::SubwayLine(_) => {}
        }
        Ok(entity)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| CatalogError::Api {
                status: 0,
                message: "semaphore closed".to_string(),
            })?;

        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).query(query).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(CatalogError::Unauthorized);
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CatalogError::RateLimited);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| CatalogError::Json {
            message: e.to_string(),
        })
    }
}
