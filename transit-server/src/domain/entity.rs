//! The closed set of transit entities.
//!
//! Four variants discriminated by a `type` tag on the wire. New kinds of
//! transit entity are rare, so this is a closed enum with exhaustive
//! matching rather than a trait hierarchy.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Arrival, Coordinates};

/// Discriminant of the four entity shapes; also the `type` field of a
/// stored favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    BusStop,
    SubwayStation,
    BusRoute,
    SubwayLine,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::BusStop => "bus-stop",
            EntityKind::SubwayStation => "subway-station",
            EntityKind::BusRoute => "bus-route",
            EntityKind::SubwayLine => "subway-line",
        };
        f.write_str(s)
    }
}

/// A bus stop with its current arrival board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusStop {
    pub id: String,
    pub name: String,
    pub coordinates: Coordinates,
    /// Metres from the reference point of the query that produced this
    /// entity; zero outside nearby contexts.
    pub distance: f64,
    #[serde(default)]
    pub arrivals: Vec<Arrival>,
}

/// A subway station with per-direction arrival boards.
///
/// `upbound_id`/`downbound_id` are synthetic ids that make each direction
/// independently favoritable. Their presence is catalog-data-dependent;
/// not every station supports direction-level favoriting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubwayStation {
    pub id: String,
    pub name: String,
    pub line: String,
    pub coordinates: Coordinates,
    pub distance: f64,
    #[serde(default)]
    pub upbound_arrivals: Vec<Arrival>,
    #[serde(default)]
    pub downbound_arrivals: Vec<Arrival>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upbound_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downbound_id: Option<String>,
}

/// A bus route (the line itself, not a stop on it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusRoute {
    pub id: String,
    pub name: String,
    pub color: String,
    pub description: String,
}

/// A subway line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubwayLine {
    pub id: String,
    pub name: String,
    pub color: String,
    pub description: String,
}

/// Any transit entity the catalog can return.
///
/// Serialized with an internal `type` tag matching [`EntityKind`].
/// Ids are globally unique and stable across catalog refreshes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TransitEntity {
    BusStop(BusStop),
    SubwayStation(SubwayStation),
    BusRoute(BusRoute),
    SubwayLine(SubwayLine),
}

impl TransitEntity {
    pub fn id(&self) -> &str {
        match self {
            TransitEntity::BusStop(s) => &s.id,
            TransitEntity::SubwayStation(s) => &s.id,
            TransitEntity::BusRoute(r) => &r.id,
            TransitEntity::SubwayLine(l) => &l.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TransitEntity::BusStop(s) => &s.name,
            TransitEntity::SubwayStation(s) => &s.name,
            TransitEntity::BusRoute(r) => &r.name,
            TransitEntity::SubwayLine(l) => &l.name,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            TransitEntity::BusStop(_) => EntityKind::BusStop,
            TransitEntity::SubwayStation(_) => EntityKind::SubwayStation,
            TransitEntity::BusRoute(_) => EntityKind::BusRoute,
            TransitEntity::SubwayLine(_) => EntityKind::SubwayLine,
        }
    }

    /// Map position, for the entity kinds that have one.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match self {
            TransitEntity::BusStop(s) => Some(s.coordinates),
            TransitEntity::SubwayStation(s) => Some(s.coordinates),
            TransitEntity::BusRoute(_) | TransitEntity::SubwayLine(_) => None,
        }
    }

    /// Distance from the reference point, for the kinds that carry one.
    pub fn distance(&self) -> Option<f64> {
        match self {
            TransitEntity::BusStop(s) => Some(s.distance),
            TransitEntity::SubwayStation(s) => Some(s.distance),
            TransitEntity::BusRoute(_) | TransitEntity::SubwayLine(_) => None,
        }
    }

    /// Overwrite the distance field. No-op for routes and lines.
    pub fn set_distance(&mut self, meters: f64) {
        match self {
            TransitEntity::BusStop(s) => s.distance = meters,
            TransitEntity::SubwayStation(s) => s.distance = meters,
            TransitEntity::BusRoute(_) | TransitEntity::SubwayLine(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stop() -> TransitEntity {
        TransitEntity::BusStop(BusStop {
            id: "bs_1".into(),
            name: "강남역 5번 출구".into(),
            coordinates: Coordinates::new(37.4979, 127.0276),
            distance: 0.0,
            arrivals: Vec::new(),
        })
    }

    #[test]
    fn tagged_json_shape() {
        let json = serde_json::to_value(sample_stop()).unwrap();
        assert_eq!(json["type"], "bus-stop");
        assert_eq!(json["id"], "bs_1");
        assert_eq!(json["coordinates"]["lat"], 37.4979);
    }

    #[test]
    fn tag_round_trips_each_variant() {
        let line = TransitEntity::SubwayLine(SubwayLine {
            id: "sl_2".into(),
            name: "2호선".into(),
            color: "#00A84D".into(),
            description: "시청 ↔ 시청 (순환)".into(),
        });
        let json = serde_json::to_string(&line).unwrap();
        let back: TransitEntity = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind(), EntityKind::SubwayLine);
        assert_eq!(back, line);
    }

    #[test]
    fn kind_display_matches_wire_tag() {
        assert_eq!(EntityKind::BusStop.to_string(), "bus-stop");
        assert_eq!(EntityKind::SubwayStation.to_string(), "subway-station");
        assert_eq!(
            serde_json::to_value(EntityKind::SubwayStation).unwrap(),
            "subway-station"
        );
    }

    #[test]
    fn routes_have_no_coordinates_or_distance() {
        let route = TransitEntity::BusRoute(BusRoute {
            id: "br_470".into(),
            name: "470".into(),
            color: "#0054A6".into(),
            description: "상암 ↔ 강남".into(),
        });
        assert_eq!(route.coordinates(), None);
        assert_eq!(route.distance(), None);

        let mut route = route;
        route.set_distance(123.0);
        assert_eq!(route.distance(), None);
    }

    #[test]
    fn set_distance_updates_stops() {
        let mut stop = sample_stop();
        stop.set_distance(250.5);
        assert_eq!(stop.distance(), Some(250.5));
    }
}
