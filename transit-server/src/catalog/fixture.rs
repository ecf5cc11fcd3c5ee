//! Built-in catalog with a small Seoul dataset.
//!
//! Stands in for the live transit-data provider during development and
//! tests: static stop/station/route/line attributes plus randomised
//! arrival estimates. Entity ids are stable; arrival boards change on
//! every refresh, like the real thing.

use rand::Rng;

use crate::domain::{
    Arrival, BusRoute, BusStop, Coordinates, Direction, SubwayLine, SubwayStation, TransitEntity,
};
use crate::search::search_entities;

use super::RoutesAndLines;
use super::colors::line_color;

struct StopSeed {
    id: &'static str,
    name: &'static str,
    lat: f64,
    lon: f64,
}

struct StationSeed {
    id: &'static str,
    name: &'static str,
    line: &'static str,
    lat: f64,
    lon: f64,
    exit_number: u32,
    /// Whether this station's feed publishes per-direction favorite ids.
    directional: bool,
}

struct RouteSeed {
    id: &'static str,
    name: &'static str,
    color: &'static str,
    description: &'static str,
}

const BUS_STOPS: &[StopSeed] = &[
    StopSeed { id: "bs_1", name: "강남역 5번 출구", lat: 37.4979, lon: 127.0276 },
    StopSeed { id: "bs_2", name: "신논현역", lat: 37.5049, lon: 127.0259 },
    StopSeed { id: "bs_3", name: "잠실역 1번 출구", lat: 37.5133, lon: 127.1001 },
    StopSeed { id: "bs_4", name: "홍대입구역", lat: 37.557, lon: 126.924 },
];

const SUBWAY_STATIONS: &[StationSeed] = &[
    StationSeed { id: "ss_1", name: "강남", line: "2", lat: 37.4981, lon: 127.0278, exit_number: 5, directional: true },
    StationSeed { id: "ss_2", name: "삼성", line: "2", lat: 37.5088, lon: 127.0631, exit_number: 3, directional: true },
    StationSeed { id: "ss_3", name: "시청", line: "1", lat: 37.5658, lon: 126.9780, exit_number: 1, directional: true },
    StationSeed { id: "ss_4", name: "홍대입구", line: "2", lat: 37.557, lon: 126.924, exit_number: 9, directional: true },
    StationSeed { id: "ss_5", name: "잠실", line: "2", lat: 37.5133, lon: 127.1001, exit_number: 1, directional: true },
    StationSeed { id: "ss_6", name: "종각", line: "1", lat: 37.5702, lon: 126.9827, exit_number: 3, directional: true },
    StationSeed { id: "ss_7", name: "압구정", line: "3", lat: 37.5272, lon: 127.0285, exit_number: 4, directional: false },
    StationSeed { id: "ss_8", name: "명동", line: "4", lat: 37.5636, lon: 126.9826, exit_number: 6, directional: false },
    StationSeed { id: "ss_9", name: "왕십리", line: "5", lat: 37.5612, lon: 127.0370, exit_number: 2, directional: false },
];

const BUS_ROUTES: &[RouteSeed] = &[
    RouteSeed { id: "br_470", name: "470", color: "#0054A6", description: "상암 ↔ 강남" },
    RouteSeed { id: "br_2224", name: "2224", color: "#5CB949", description: "성수 ↔ 건대입구" },
    RouteSeed { id: "br_9401", name: "9401", color: "#E60012", description: "구미 ↔ 서울역" },
    RouteSeed { id: "br_02", name: "02", color: "#F2C100", description: "남산 순환" },
];

const SUBWAY_LINES: &[RouteSeed] = &[
    RouteSeed { id: "sl_2", name: "2호선", color: "#00A84D", description: "시청 ↔ 시청 (순환)" },
    RouteSeed { id: "sl_9", name: "9호선", color: "#BDB092", description: "개화 ↔ 중앙보훈병원" },
    RouteSeed { id: "sl_bundang", name: "수인분당선", color: "#FABE00", description: "왕십리 ↔ 인천" },
];

const BUS_ROUTE_POOL: &[&str] = &["470", "140", "360", "740", "9401"];
const SUBWAY_DESTINATION_POOL: &[&str] = &["잠실행", "시청행", "왕십리행", "사당행"];
const BUS_TURNAROUND: &str = "회차지";

/// The embedded data source.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCatalog;

impl FixtureCatalog {
    /// Stops and stations with static attributes only; arrivals and
    /// distance are filled in by later stages.
    pub fn nearby_candidates(&self) -> Vec<TransitEntity> {
        let mut out = Vec::with_capacity(BUS_STOPS.len() + SUBWAY_STATIONS.len());
        out.extend(BUS_STOPS.iter().map(stop_entity));
        out.extend(SUBWAY_STATIONS.iter().map(station_entity));
        out
    }

    pub fn routes_and_lines(&self) -> RoutesAndLines {
        RoutesAndLines {
            routes: BUS_ROUTES.iter().map(bus_route).collect(),
            lines: SUBWAY_LINES.iter().map(subway_line).collect(),
        }
    }

    /// Resolve ids to entities with static attributes, preserving input
    /// order. Unknown ids are silently omitted.
    pub fn resolve_by_ids(&self, ids: &[String]) -> Vec<TransitEntity> {
        ids.iter().filter_map(|id| resolve_one(id)).collect()
    }

    pub fn search(&self, query: &str) -> Vec<TransitEntity> {
        // Category order here is the display order of search results.
        let mut entities = self.nearby_candidates();
        entities.extend(BUS_ROUTES.iter().map(|seed| TransitEntity::BusRoute(bus_route(seed))));
        entities.extend(SUBWAY_LINES.iter().map(|seed| TransitEntity::SubwayLine(subway_line(seed))));
        search_entities(query, &entities)
    }

    /// Fill in a fresh arrival board for one entity.
    ///
    /// A station resolved through a directional favorite id gets only
    /// that direction's board; routes and lines pass through unchanged.
    pub fn with_arrivals(&self, mut entity: TransitEntity) -> TransitEntity {
        let mut rng = rand::rng();
        match &mut entity {
            TransitEntity::BusStop(stop) => {
                stop.arrivals = synth_bus_arrivals(&mut rng);
            }
            TransitEntity::SubwayStation(station) => match direction_of_id(&station.id) {
                Some(Direction::Up) => {
                    station.upbound_arrivals = synth_subway_arrivals(&mut rng, Direction::Up);
                }
                Some(Direction::Down) => {
                    station.downbound_arrivals = synth_subway_arrivals(&mut rng, Direction::Down);
                }
                None => {
                    station.upbound_arrivals = synth_subway_arrivals(&mut rng, Direction::Up);
                    station.downbound_arrivals = synth_subway_arrivals(&mut rng, Direction::Down);
                }
            },
            TransitEntity::BusRoute(_) | TransitEntity::SubwayLine(_) => {}
        }
        entity
    }
}

fn resolve_one(id: &str) -> Option<TransitEntity> {
    if let Some((base, _direction)) = split_direction_id(id) {
        // Directional favorites resolve to the parent station, carrying
        // the direction id as their own so favorite cards line up.
        let seed = SUBWAY_STATIONS
            .iter()
            .find(|s| s.id == base && s.directional)?;
        let mut entity = station_entity(seed);
        if let TransitEntity::SubwayStation(station) = &mut entity {
            station.id = id.to_string();
        }
        return Some(entity);
    }

    if let Some(seed) = BUS_STOPS.iter().find(|s| s.id == id) {
        return Some(stop_entity(seed));
    }
    if let Some(seed) = SUBWAY_STATIONS.iter().find(|s| s.id == id) {
        return Some(station_entity(seed));
    }
    if let Some(seed) = BUS_ROUTES.iter().find(|s| s.id == id) {
        return Some(TransitEntity::BusRoute(bus_route(seed)));
    }
    if let Some(seed) = SUBWAY_LINES.iter().find(|s| s.id == id) {
        return Some(TransitEntity::SubwayLine(subway_line(seed)));
    }
    None
}

/// `"{station_id}:up"` / `"{station_id}:down"` → base id and direction.
fn split_direction_id(id: &str) -> Option<(&str, Direction)> {
    let (base, suffix) = id.rsplit_once(':')?;
    match suffix {
        "up" => Some((base, Direction::Up)),
        "down" => Some((base, Direction::Down)),
        _ => None,
    }
}

fn direction_of_id(id: &str) -> Option<Direction> {
    split_direction_id(id).map(|(_, direction)| direction)
}

fn stop_entity(seed: &StopSeed) -> TransitEntity {
    TransitEntity::BusStop(BusStop {
        id: seed.id.to_string(),
        name: seed.name.to_string(),
        coordinates: Coordinates::new(seed.lat, seed.lon),
        distance: 0.0,
        arrivals: Vec::new(),
    })
}

fn station_entity(seed: &StationSeed) -> TransitEntity {
    TransitEntity::SubwayStation(SubwayStation {
        id: seed.id.to_string(),
        name: seed.name.to_string(),
        line: seed.line.to_string(),
        coordinates: Coordinates::new(seed.lat, seed.lon),
        distance: 0.0,
        upbound_arrivals: Vec::new(),
        downbound_arrivals: Vec::new(),
        exit_number: Some(seed.exit_number),
        color: Some(line_color(seed.line).to_string()),
        upbound_id: seed.directional.then(|| format!("{}:up", seed.id)),
        downbound_id: seed.directional.then(|| format!("{}:down", seed.id)),
    })
}

fn bus_route(seed: &RouteSeed) -> BusRoute {
    BusRoute {
        id: seed.id.to_string(),
        name: seed.name.to_string(),
        color: seed.color.to_string(),
        description: seed.description.to_string(),
    }
}

fn subway_line(seed: &RouteSeed) -> SubwayLine {
    SubwayLine {
        id: seed.id.to_string(),
        name: seed.name.to_string(),
        color: seed.color.to_string(),
        description: seed.description.to_string(),
    }
}

fn synth_bus_arrivals(rng: &mut impl Rng) -> Vec<Arrival> {
    let count = rng.random_range(1..=2);
    (0..count)
        .map(|index| {
            let route = BUS_ROUTE_POOL[rng.random_range(0..BUS_ROUTE_POOL.len())];
            let time_minutes = rng.random_range(1..=15);
            Arrival {
                route_name: route.to_string(),
                destination: BUS_TURNAROUND.to_string(),
                time_minutes,
                is_low_floor: Some(rng.random_bool(0.5)),
                // Only the head of the list carries the follow-up estimate.
                next_arrival: (index == 0).then(|| time_minutes + rng.random_range(3..=12)),
                stations_before: None,
                direction: None,
            }
        })
        .collect()
}

fn synth_subway_arrivals(rng: &mut impl Rng, direction: Direction) -> Vec<Arrival> {
    let count = rng.random_range(1..=2);
    (0..count)
        .map(|_| {
            let route = SUBWAY_DESTINATION_POOL[rng.random_range(0..SUBWAY_DESTINATION_POOL.len())];
            let destination =
                SUBWAY_DESTINATION_POOL[rng.random_range(0..SUBWAY_DESTINATION_POOL.len())];
            let time_minutes = rng.random_range(1..=15);
            Arrival {
                route_name: route.to_string(),
                destination: destination.to_string(),
                time_minutes,
                is_low_floor: None,
                next_arrival: None,
                // Roughly two minutes per station out.
                stations_before: Some((time_minutes / 2).max(1)),
                direction: Some(direction),
            }
        })
        .collect()
}
