use std::net::SocketAddr;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use transit_server::cache::{CacheConfig, CachedCatalog};
use transit_server::catalog::{Catalog, FixtureCatalog, RemoteCatalog, RemoteCatalogConfig};
use transit_server::favorites::{FavoritesFile, FavoritesStore};
use transit_server::web::{AppState, create_router};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    // Pick the data source: a remote provider when configured, the
    // built-in fixture otherwise.
    let catalog = match std::env::var("TRANSIT_DATA_URL") {
        Ok(base_url) => {
            let api_key = std::env::var("TRANSIT_API_KEY").unwrap_or_else(|_| {
                eprintln!("Warning: TRANSIT_API_KEY not set. Provider calls may be rejected.");
                String::new()
            });
            println!("Using remote transit data from {base_url}");
            let config = RemoteCatalogConfig::new(base_url, api_key);
            let remote = RemoteCatalog::new(config).expect("Failed to create catalog client");
            Catalog::Remote(remote)
        }
        Err(_) => {
            println!("TRANSIT_DATA_URL not set; using the built-in fixture catalog");
            Catalog::Fixture(FixtureCatalog)
        }
    };

    let favorites_path =
        std::env::var("FAVORITES_PATH").unwrap_or_else(|_| "favorites.json".to_string());
    let favorites = FavoritesStore::open(FavoritesFile::new(&favorites_path));
    println!(
        "Favorites stored in {favorites_path} ({} saved)",
        favorites.len().await
    );

    let cached = CachedCatalog::new(catalog, &CacheConfig::default());
    let state = AppState::new(cached, favorites);
    let app = create_router(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

    println!("Transit companion listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET    /health                 - Health check");
    println!("  GET    /api/nearby?lat=&lon=   - Nearby stops and stations");
    println!("  GET    /api/search?q=          - Search stops, stations, routes, lines");
    println!("  GET    /api/routes             - All routes and lines");
    println!("  GET    /api/favorites          - Stored favorites");
    println!("  POST   /api/favorites          - Add a favorite");
    println!("  DELETE /api/favorites/:id      - Remove a favorite");
    println!("  POST   /api/favorites/toggle   - Toggle a favorite");
    println!("  GET    /api/favorites/details  - Live details for favorites");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
