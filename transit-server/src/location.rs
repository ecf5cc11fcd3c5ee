//! Geolocation boundary: failure taxonomy and bounded acquisition wait.
//!
//! Acquiring a position fix is the platform's job; this module only
//! defines how failures are categorized and how long a caller is willing
//! to wait. Location failures block location-dependent features, never
//! favorites or text search, and nothing here retries; the user
//! re-triggers.

use std::future::Future;
use std::time::Duration;

use crate::domain::Coordinates;

/// Why a device position could not be obtained.
///
/// Messages are user-presentable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("location permission was denied; allow location access and try again")]
    PermissionDenied,
    #[error("current position is unavailable; check the GPS signal")]
    Unavailable,
    #[error("timed out waiting for a position fix")]
    Timeout,
    #[error("unknown location error: {0}")]
    Unknown(String),
}

/// Wait at most `wait` for `acquisition` to produce a position fix.
///
/// Elapsed waits become [`LocationError::Timeout`]; other failures pass
/// through unchanged.
pub async fn acquire_with_timeout<F>(
    acquisition: F,
    wait: Duration,
) -> Result<Coordinates, LocationError>
where
    F: Future<Output = Result<Coordinates, LocationError>>,
{
    match tokio::time::timeout(wait, acquisition).await {
        Ok(result) => result,
        Err(_) => Err(LocationError::Timeout),
    }
}
