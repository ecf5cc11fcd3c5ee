//! Transit companion server.
//!
//! Nearby bus stops and subway stations with live-style arrival boards,
//! favorites with directional sub-favorites, and free-text search over
//! the transit catalog.

pub mod board;
pub mod cache;
pub mod catalog;
pub mod debounce;
pub mod domain;
pub mod favorites;
pub mod location;
pub mod nearby;
pub mod search;
pub mod web;
