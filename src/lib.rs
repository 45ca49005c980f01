//! Pokédex browser backed by PokeAPI.
//!
//! The library half holds everything the terminal is not needed for:
//! the HTTP client ([`fetch::PokeClient`]), the typed payloads and view
//! models ([`models`]), the error taxonomy ([`error`]), the per-screen
//! load state machine ([`screen`]), and display formatting ([`utils`]).
//! The binary wires these to a ratatui event loop.

pub mod error;
pub mod fetch;
pub mod models;
pub mod screen;
pub mod ui;
pub mod utils;
