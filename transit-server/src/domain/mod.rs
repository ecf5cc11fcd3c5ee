//! Core domain types for the transit companion.
//!
//! Value types shared by every component: coordinates, arrival events,
//! the closed set of transit entities, and favorite references. All of
//! them serialize to the JSON shapes the mobile client consumes.

mod arrival;
mod coords;
mod entity;
mod favorite;

pub use arrival::{Arrival, Direction};
pub use coords::Coordinates;
pub use entity::{BusRoute, BusStop, EntityKind, SubwayLine, SubwayStation, TransitEntity};
pub use favorite::FavoriteItem;
