//! Data transfer objects for web requests and responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::board::{ArrivalGroup, group_arrivals};
use crate::catalog::{CatalogError, FALLBACK_COLOR};
use crate::domain::{Coordinates, FavoriteItem, TransitEntity};

/// Query for nearby stops and stations.
#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    pub lat: f64,
    pub lon: f64,
}

/// Query for free-text search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

/// One grouped display row: a route/destination pair's next arrival.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupView {
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
    pub following: Option<FollowingView>,
}

/// The arrival after the next one in the same group.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowingView {
    pub time_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stations_before: Option<u32>,
}

impl GroupView {
    fn from_group(group: &ArrivalGroup) -> Self {
        Self {
            route_name: group.next.route_name.clone(),
            destination: group.next.destination.clone(),
            time_minutes: group.next.time_minutes,
            is_low_floor: group.next.is_low_floor,
            next_arrival: group.next.next_arrival,
            stations_before: group.next.stations_before,
            following: group.following.as_ref().map(|f| FollowingView {
                time_minutes: f.time_minutes,
                stations_before: f.stations_before,
            }),
        }
    }
}

/// A bus stop with its grouped board.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopView {
    pub id: String,
    pub name: String,
    pub coordinates: Coordinates,
    pub distance: f64,
    pub groups: Vec<GroupView>,
}

/// A subway station with per-direction grouped boards.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationView {
    pub id: String,
    pub name: String,
    pub line: String,
    pub coordinates: Coordinates,
    pub distance: f64,
    /// Always resolved; unknown lines render neutral gray.
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upbound_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downbound_id: Option<String>,
    pub upbound: Vec<GroupView>,
    pub downbound: Vec<GroupView>,
}

/// A route or line in a listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteView {
    pub id: String,
    pub name: String,
    pub color: String,
    pub description: String,
}

/// Any entity, display-ready.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum EntityView {
    BusStop(StopView),
    SubwayStation(StationView),
    BusRoute(RouteView),
    SubwayLine(RouteView),
}

impl EntityView {
    /// Build the display model: arrival lists become grouped boards.
    pub fn from_entity(entity: &TransitEntity) -> Self {
        match entity {
            TransitEntity::BusStop(stop) => EntityView::BusStop(StopView {
                id: stop.id.clone(),
                name: stop.name.clone(),
                coordinates: stop.coordinates,
                distance: stop.distance,
                groups: group_arrivals(&stop.arrivals)
                    .iter()
                    .map(GroupView::from_group)
                    .collect(),
            }),
            TransitEntity::SubwayStation(station) => EntityView::SubwayStation(StationView {
                id: station.id.clone(),
                name: station.name.clone(),
                line: station.line.clone(),
                coordinates: station.coordinates,
                distance: station.distance,
                color: station
                    .color
                    .clone()
                    .unwrap_or_else(|| FALLBACK_COLOR.to_string()),
                exit_number: station.exit_number,
                upbound_id: station.upbound_id.clone(),
                downbound_id: station.downbound_id.clone(),
                upbound: group_arrivals(&station.upbound_arrivals)
                    .iter()
                    .map(GroupView::from_group)
                    .collect(),
                downbound: group_arrivals(&station.downbound_arrivals)
                    .iter()
                    .map(GroupView::from_group)
                    .collect(),
            }),
            TransitEntity::BusRoute(route) => EntityView::BusRoute(RouteView {
                id: route.id.clone(),
                name: route.name.clone(),
                color: route.color.clone(),
                description: route.description.clone(),
            }),
            TransitEntity::SubwayLine(line) => EntityView::SubwayLine(RouteView {
                id: line.id.clone(),
                name: line.name.clone(),
                color: line.color.clone(),
                description: line.description.clone(),
            }),
        }
    }
}

/// Response for nearby lookups.
#[derive(Debug, Serialize)]
pub struct NearbyResponse {
    pub stops: Vec<EntityView>,
}

/// Response for search.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<EntityView>,
}

/// Response for the favorites listing.
#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub favorites: Vec<FavoriteItem>,
}

/// Response for a favorite toggle.
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    /// Whether the item is a favorite after the toggle.
    pub favorite: bool,
}

/// Response for the favorites detail refresh.
#[derive(Debug, Serialize)]
pub struct DetailsResponse {
    pub details: Vec<EntityView>,
}

/// Errors surfaced by the HTTP layer.
#[derive(Debug)]
pub enum AppError {
    /// Malformed request input
    BadRequest { message: String },

    /// The transit-data provider failed
    Upstream { message: String },
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        AppError::Upstream {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Arrival, SubwayStation};

    #[test]
    fn stop_view_groups_its_board() {
        let mut head = Arrival::new("470", "회차지", 3);
        head.next_arrival = Some(9);
        let stop = TransitEntity::BusStop(crate::domain::BusStop {
            id: "bs_1".into(),
            name: "강남역 5번 출구".into(),
            coordinates: Coordinates::new(37.4979, 127.0276),
            distance: 120.0,
            arrivals: vec![
                head,
                Arrival::new("470", "회차지", 12),
                Arrival::new("140", "회차지", 5),
            ],
        });

        let EntityView::BusStop(view) = EntityView::from_entity(&stop) else {
            panic!("expected a stop view");
        };
        assert_eq!(view.groups.len(), 2);
        assert_eq!(view.groups[0].route_name, "470");
        assert_eq!(view.groups[0].next_arrival, Some(9));
        assert_eq!(view.groups[0].following.as_ref().unwrap().time_minutes, 12);
        assert_eq!(view.groups[1].route_name, "140");
        assert!(view.groups[1].following.is_none());
    }

    #[test]
    fn station_view_falls_back_to_gray() {
        let station = TransitEntity::SubwayStation(SubwayStation {
            id: "ss_x".into(),
            name: "어딘가".into(),
            line: "99".into(),
            coordinates: Coordinates::new(37.5, 127.0),
            distance: 0.0,
            upbound_arrivals: Vec::new(),
            downbound_arrivals: Vec::new(),
            exit_number: None,
            color: None,
            upbound_id: None,
            downbound_id: None,
        });

        let EntityView::SubwayStation(view) = EntityView::from_entity(&station) else {
            panic!("expected a station view");
        };
        assert_eq!(view.color, "#666666");
    }

    #[test]
    fn view_json_carries_the_type_tag() {
        let route = TransitEntity::BusRoute(crate::domain::BusRoute {
            id: "br_470".into(),
            name: "470".into(),
            color: "#0054A6".into(),
            description: "상암 ↔ 강남".into(),
        });

        let json = serde_json::to_value(EntityView::from_entity(&route)).unwrap();
        assert_eq!(json["type"], "bus-route");
        assert_eq!(json["color"], "#0054A6");
    }
}
