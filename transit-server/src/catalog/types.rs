//! Wire types for the remote transit-data provider.
//!
//! The provider reports absolute expected times; the companion displays
//! minutes-from-now, so conversion to domain types happens here against
//! a caller-supplied "now". Overdue vehicles clamp to zero rather than
//! going negative.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::{Arrival, BusRoute, BusStop, Coordinates, Direction, SubwayLine, SubwayStation, TransitEntity};

use super::colors::line_color;

/// One predicted arrival as the provider reports it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrivalDto {
    pub route: String,
    pub destination: String,
    pub expected_at: DateTime<Utc>,
    #[serde(default)]
    pub low_floor: Option<bool>,
    #[serde(default)]
    pub next_expected_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub stops_away: Option<u32>,
    #[serde(default)]
    pub direction: Option<Direction>,
}

impl ArrivalDto {
    pub fn into_domain(self, now: DateTime<Utc>) -> Arrival {
        Arrival {
            route_name: self.route,
            destination: self.destination,
            time_minutes: minutes_from(now, self.expected_at),
            is_low_floor: self.low_floor,
            next_arrival: self.next_expected_at.map(|at| minutes_from(now, at)),
            stations_before: self.stops_away,
            direction: self.direction,
        }
    }
}

/// Whole minutes from `now` until `at`, clamped at zero.
fn minutes_from(now: DateTime<Utc>, at: DateTime<Utc>) -> u32 {
    (at - now).num_minutes().max(0) as u32
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopDto {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub arrivals: Vec<ArrivalDto>,
}

impl StopDto {
    pub fn into_domain(self, now: DateTime<Utc>) -> TransitEntity {
        TransitEntity::BusStop(BusStop {
            id: self.id,
            name: self.name,
            coordinates: Coordinates::new(self.lat, self.lon),
            distance: 0.0,
            arrivals: self.arrivals.into_iter().map(|a| a.into_domain(now)).collect(),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDto {
    pub id: String,
    pub name: String,
    pub line: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub exit_number: Option<u32>,
    #[serde(default)]
    pub upbound: Vec<ArrivalDto>,
    #[serde(default)]
    pub downbound: Vec<ArrivalDto>,
    #[serde(default)]
    pub upbound_id: Option<String>,
    #[serde(default)]
    pub downbound_id: Option<String>,
}

impl StationDto {
    pub fn into_domain(self, now: DateTime<Utc>) -> TransitEntity {
        // Colour is always resolved locally from the line table.
        let color = line_color(&self.line).to_string();
        TransitEntity::SubwayStation(SubwayStation {
            id: self.id,
            name: self.name,
            coordinates: Coordinates::new(self.lat, self.lon),
            distance: 0.0,
            upbound_arrivals: self.upbound.into_iter().map(|a| a.into_domain(now)).collect(),
            downbound_arrivals: self
                .downbound
                .into_iter()
                .map(|a| a.into_domain(now))
                .collect(),
            exit_number: self.exit_number,
            color: Some(color),
            upbound_id: self.upbound_id,
            downbound_id: self.downbound_id,
            line: self.line,
        })
    }
}

/// Route and line records share one wire shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDto {
    pub id: String,
    pub name: String,
    pub color: String,
    pub description: String,
}

impl RouteDto {
    pub fn into_bus_route(self) -> BusRoute {
        BusRoute {
            id: self.id,
            name: self.name,
            color: self.color,
            description: self.description,
        }
    }

    pub fn into_subway_line(self) -> SubwayLine {
        SubwayLine {
            id: self.id,
            name: self.name,
            color: self.color,
            description: self.description,
        }
    }
}

/// Any entity, tag-discriminated, as resolve/search endpoints return it.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum EntityDto {
    BusStop(StopDto),
    SubwayStation(StationDto),
    BusRoute(RouteDto),
    SubwayLine(RouteDto),
}

impl EntityDto {
    pub fn into_domain(self, now: DateTime<Utc>) -> TransitEntity {
        match self {
            EntityDto::BusStop(dto) => dto.into_domain(now),
            EntityDto::SubwayStation(dto) => dto.into_domain(now),
            EntityDto::BusRoute(dto) => TransitEntity::BusRoute(dto.into_bus_route()),
            EntityDto::SubwayLine(dto) => TransitEntity::SubwayLine(dto.into_subway_line()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NearbyResponseDto {
    #[serde(default)]
    pub stops: Vec<StopDto>,
    #[serde(default)]
    pub stations: Vec<StationDto>,
}

#[derive(Debug, Deserialize)]
pub struct RoutesResponseDto {
    #[serde(default)]
    pub routes: Vec<RouteDto>,
    #[serde(default)]
    pub lines: Vec<RouteDto>,
}

#[derive(Debug, Deserialize)]
pub struct EntitiesResponseDto {
    #[serde(default)]
    pub entities: Vec<EntityDto>,
}

/// Per-entity arrival refresh payload.
#[derive(Debug, Deserialize)]
pub struct ArrivalsResponseDto {
    #[serde(default)]
    pub arrivals: Vec<ArrivalDto>,
    #[serde(default)]
    pub upbound: Vec<ArrivalDto>,
    #[serde(default)]
    pub downbound: Vec<ArrivalDto>,
}
