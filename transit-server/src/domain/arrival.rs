//! Predicted vehicle arrivals.

use serde::{Deserialize, Serialize};

/// Travel direction of a subway service through a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// A single predicted arrival for a route/destination at a stop.
///
/// `time_minutes` is an estimate measured from "now"; it is never
/// negative. `next_arrival` is a follow-up estimate for a second vehicle
/// on the same line and is only ever set on the first record of an
/// ungrouped arrival list. Arrival lists are not guaranteed to be sorted
/// by time; display grouping reorders as needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arrival {
    pub route_name: String,
    pub destination: String,
    pub time_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_low_floor: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_arrival: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stations_before: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

impl Arrival {
    /// A bare arrival with only the required fields set.
    pub fn new(
        route_name: impl Into<String>,
        destination: impl Into<String>,
        time_minutes: u32,
    ) -> Self {
        Self {
            route_name: route_name.into(),
            destination: destination.into(),
            time_minutes,
            is_low_floor: None,
            next_arrival: None,
            stations_before: None,
            direction: None,
        }
    }
}
