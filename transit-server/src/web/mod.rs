//! Web layer: the HTTP JSON API.

pub mod dto;
mod routes;
mod state;

pub use dto::AppError;
pub use routes::create_router;
pub use state::AppState;
