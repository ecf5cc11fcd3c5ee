//! Free-text search over catalog entities.

use crate::domain::TransitEntity;

/// Match `query` against entity display names, case-insensitively.
///
/// Subway stations additionally match when the query is a substring of
/// their line identifier. There is no scoring: results keep the input
/// order, and the catalog feeds entities in category order (bus stops,
/// subway stations, bus routes, subway lines), which is the display
/// contract.
///
/// An empty or whitespace-only query returns nothing without scanning.
/// Matched stops and stations come back identity-only: zero distance,
/// empty arrival boards. Arrival detail is a separate fetch when the
/// user drills in.
pub fn search_entities(query: &str, entities: &[TransitEntity]) -> Vec<TransitEntity> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    entities
        .iter()
        .filter(|entity| matches(entity, &needle))
        .map(identity_of)
        .collect()
}

fn matches(entity: &TransitEntity, needle: &str) -> bool {
    if entity.name().to_lowercase().contains(needle) {
        return true;
    }
    match entity {
        TransitEntity::SubwayStation(station) => station.line.to_lowercase().contains(needle),
        _ => false,
    }
}

/// Strip query-context data: search results identify entities, nothing
/// more.
fn identity_of(entity: &TransitEntity) -> TransitEntity {
    let mut result = entity.clone();
    match &mut result {
        TransitEntity::BusStop(stop) => {
            stop.distance = 0.0;
            stop.arrivals.clear();
        }
        TransitEntity::SubwayStation(station) => {
            station.distance = 0.0;
            station.upbound_arrivals.clear();
            station.downbound_arrivals.clear();
        }
        TransitEntity::BusRoute(_) | TransitEntity::SubwayLine(_) => {}
    }
    result
}
