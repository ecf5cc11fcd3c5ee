//! Distance ranking of nearby candidates.

use tracing::trace;

use crate::domain::{Coordinates, TransitEntity};

/// How many nearby results a page shows.
pub const DEFAULT_NEARBY_LIMIT: usize = 5;

/// Rank candidates by distance from `origin`, ascending, truncated to
/// `limit`.
///
/// Distances are recomputed here from scratch; the candidates'
/// `distance` field is an output slot, not an input.
/// The sort is stable, so equidistant candidates keep catalog iteration
/// order. Candidates without a map position (routes, lines) cannot be
/// ranked and are dropped.
pub fn rank_nearby(
    origin: Coordinates,
    candidates: Vec<TransitEntity>,
    limit: usize,
) -> Vec<TransitEntity> {
    let mut ranked: Vec<TransitEntity> = candidates
        .into_iter()
        .filter_map(|mut entity| {
            let coords = entity.coordinates()?;
            entity.set_distance(origin.distance_m(coords));
            Some(entity)
        })
        .collect();

    ranked.sort_by(|a, b| {
        let da = a.distance().unwrap_or(f64::INFINITY);
        let db = b.distance().unwrap_or(f64::INFINITY);
        da.total_cmp(&db)
    });

    trace!(candidates = ranked.len(), limit, "ranked nearby candidates");
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BusRoute, BusStop};

    fn stop(id: &str, lat: f64, lon: f64) -> TransitEntity {
        TransitEntity::BusStop(BusStop {
            id: id.into(),
            name: format!("stop {id}"),
            coordinates: Coordinates::new(lat, lon),
            distance: 0.0,
            arrivals: Vec::new(),
        })
    }

    #[test]
    fn closer_candidates_rank_first() {
        let origin = Coordinates::new(37.50, 127.00);
        let near = stop("near", 37.501, 127.001);
        let far = stop("far", 37.52, 127.05);

        let ranked = rank_nearby(origin, vec![far, near], DEFAULT_NEARBY_LIMIT);
        assert_eq!(ranked[0].id(), "near");
        assert_eq!(ranked[1].id(), "far");
    }

    #[test]
    fn truncates_to_limit() {
        let origin = Coordinates::new(37.50, 127.00);
        let candidates: Vec<TransitEntity> = (0..9)
            .map(|i| stop(&format!("s{i}"), 37.50 + f64::from(i) * 0.001, 127.00))
            .collect();

        let ranked = rank_nearby(origin, candidates, DEFAULT_NEARBY_LIMIT);
        assert_eq!(ranked.len(), DEFAULT_NEARBY_LIMIT);
    }

    #[test]
    fn short_input_is_returned_whole_and_sorted() {
        let origin = Coordinates::new(37.50, 127.00);
        let candidates = vec![
            stop("b", 37.503, 127.00),
            stop("a", 37.501, 127.00),
            stop("c", 37.505, 127.00),
        ];

        let ranked = rank_nearby(origin, candidates, DEFAULT_NEARBY_LIMIT);
        let ids: Vec<&str> = ranked.iter().map(TransitEntity::id).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn input_distance_is_ignored() {
        let origin = Coordinates::new(37.50, 127.00);
        let mut poisoned = stop("poisoned", 37.52, 127.05);
        // A stale distance claiming this far stop is adjacent.
        poisoned.set_distance(1.0);
        let near = stop("near", 37.501, 127.001);

        let ranked = rank_nearby(origin, vec![poisoned, near], DEFAULT_NEARBY_LIMIT);
        assert_eq!(ranked[0].id(), "near");
        assert!(ranked[1].distance().unwrap() > 1_000.0);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let origin = Coordinates::new(37.50, 127.00);
        // Mirror-image offsets: identical distance.
        let first = stop("first", 37.501, 127.00);
        let second = stop("second", 37.499, 127.00);

        let ranked = rank_nearby(origin, vec![first, second], DEFAULT_NEARBY_LIMIT);
        assert_eq!(ranked[0].id(), "first");
        assert_eq!(ranked[1].id(), "second");
    }

    #[test]
    fn entities_without_coordinates_are_dropped() {
        let origin = Coordinates::new(37.50, 127.00);
        let route = TransitEntity::BusRoute(BusRoute {
            id: "br_470".into(),
            name: "470".into(),
            color: "#0054A6".into(),
            description: "상암 ↔ 강남".into(),
        });

        let ranked = rank_nearby(origin, vec![route, stop("s", 37.501, 127.0)], 5);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id(), "s");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::BusStop;
    use proptest::prelude::*;

    fn stop_at(lat: f64, lon: f64, index: usize) -> TransitEntity {
        TransitEntity::BusStop(BusStop {
            id: format!("s{index}"),
            name: format!("stop {index}"),
            coordinates: Coordinates::new(lat, lon),
            distance: 0.0,
            arrivals: Vec::new(),
        })
    }

    fn point() -> impl Strategy<Value = (f64, f64)> {
        (37.0..38.0f64, 126.5..127.5f64)
    }

    proptest! {
        /// Never more than the limit; all of a short input survives.
        #[test]
        fn output_length_is_bounded(points in proptest::collection::vec(point(), 0..12)) {
            let origin = Coordinates::new(37.5, 127.0);
            let n = points.len();
            let candidates: Vec<TransitEntity> = points
                .into_iter()
                .enumerate()
                .map(|(i, (lat, lon))| stop_at(lat, lon, i))
                .collect();

            let ranked = rank_nearby(origin, candidates, DEFAULT_NEARBY_LIMIT);
            prop_assert_eq!(ranked.len(), n.min(DEFAULT_NEARBY_LIMIT));
        }

        /// Output is sorted ascending by true distance from the origin.
        #[test]
        fn output_is_distance_sorted(
            (olat, olon) in point(),
            points in proptest::collection::vec(point(), 0..12),
        ) {
            let origin = Coordinates::new(olat, olon);
            let candidates: Vec<TransitEntity> = points
                .into_iter()
                .enumerate()
                .map(|(i, (lat, lon))| stop_at(lat, lon, i))
                .collect();

            let ranked = rank_nearby(origin, candidates, DEFAULT_NEARBY_LIMIT);
            for pair in ranked.windows(2) {
                let d0 = origin.distance_m(pair[0].coordinates().unwrap());
                let d1 = origin.distance_m(pair[1].coordinates().unwrap());
                prop_assert!(d0 <= d1);
            }
        }
    }
}
