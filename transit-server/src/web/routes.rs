//! HTTP route handlers.

use axum::http::StatusCode;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, post},
};
use futures::future;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::catalog::RoutesAndLines;
use crate::domain::{Coordinates, FavoriteItem, TransitEntity};
use crate::nearby::{DEFAULT_NEARBY_LIMIT, rank_nearby};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/nearby", get(nearby))
        .route("/api/search", get(search))
        .route("/api/routes", get(routes))
        .route("/api/favorites", get(list_favorites).post(add_favorite))
        .route("/api/favorites/toggle", post(toggle_favorite))
        .route("/api/favorites/details", get(favorite_details))
        .route("/api/favorites/:id", delete(remove_favorite))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Nearby stops and stations, closest first, with live boards.
async fn nearby(
    State(state): State<AppState>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<NearbyResponse>, AppError> {
    if !query.lat.is_finite() || !query.lon.is_finite() {
        return Err(AppError::BadRequest {
            message: "lat and lon must be finite numbers".to_string(),
        });
    }
    let origin = Coordinates::new(query.lat, query.lon);

    let candidates = state.catalog.nearby_candidates(origin).await?;
    let ranked = rank_nearby(origin, (*candidates).clone(), DEFAULT_NEARBY_LIMIT);

    let stops = attach_boards(&state, ranked).await;
    Ok(Json(NearbyResponse { stops }))
}

/// Free-text search over the whole catalog.
async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    // Blank input answers immediately, without a catalog call.
    if query.q.trim().is_empty() {
        return Ok(Json(SearchResponse {
            results: Vec::new(),
        }));
    }

    let matches = state.catalog.search(&query.q).await?;
    let results = matches.iter().map(EntityView::from_entity).collect();
    Ok(Json(SearchResponse { results }))
}

/// All routes and lines.
async fn routes(State(state): State<AppState>) -> Result<Json<RoutesAndLines>, AppError> {
    let listing = state.catalog.routes_and_lines().await?;
    Ok(Json(listing))
}

/// The stored favorites, as saved (names are favorite-time snapshots).
async fn list_favorites(State(state): State<AppState>) -> Json<FavoritesResponse> {
    Json(FavoritesResponse {
        favorites: state.favorites.all().await,
    })
}

/// Add (or overwrite) a favorite.
async fn add_favorite(
    State(state): State<AppState>,
    Json(item): Json<FavoriteItem>,
) -> StatusCode {
    state.favorites.add(item).await;
    StatusCode::NO_CONTENT
}

/// Remove a favorite. Removing an absent id succeeds.
async fn remove_favorite(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    state.favorites.remove(&id).await;
    StatusCode::NO_CONTENT
}

/// Toggle a favorite: composed from is_favorite + remove/add.
async fn toggle_favorite(
    State(state): State<AppState>,
    Json(item): Json<FavoriteItem>,
) -> Json<ToggleResponse> {
    let favorites = &state.favorites;
    let favorite = if favorites.is_favorite(&item.id).await {
        favorites.remove(&item.id).await;
        false
    } else {
        favorites.add(item).await;
        true
    };
    Json(ToggleResponse { favorite })
}

/// Live details for the stored favorites.
///
/// Re-resolves the stored ids against the catalog; ids the catalog no
/// longer knows simply drop out.
async fn favorite_details(
    State(state): State<AppState>,
) -> Result<Json<DetailsResponse>, AppError> {
    let ids: Vec<String> = state
        .favorites
        .all()
        .await
        .into_iter()
        .map(|favorite| favorite.id)
        .collect();

    if ids.is_empty() {
        return Ok(Json(DetailsResponse {
            details: Vec::new(),
        }));
    }

    let entities = state.catalog.resolve_by_ids(&ids).await?;
    let details = attach_boards(&state, entities).await;
    Ok(Json(DetailsResponse { details }))
}

/// Fetch boards for each entity concurrently and build views.
///
/// An entity whose board fetch fails is dropped rather than failing the
/// whole page.
async fn attach_boards(state: &AppState, entities: Vec<TransitEntity>) -> Vec<EntityView> {
    let boards = future::join_all(
        entities
            .into_iter()
            .map(|entity| state.catalog.with_arrivals(entity)),
    )
    .await;

    boards
        .into_iter()
        .filter_map(|result| match result {
            Ok(entity) => Some(EntityView::from_entity(&entity)),
            Err(error) => {
                warn!(%error, "dropping entity whose arrivals were unavailable");
                None
            }
        })
        .collect()
}
