//! # ShinyDex Rust Backend
//!
//! Backend for a personal shiny Pokémon collection tracker.
//!
//! This crate stores per-user collections of caught shinies and derives the
//! dashboard statistics shown to the user: type frequencies, generation
//! completion, duplicate detection, origin-game rarity and level/move
//! averages. The backend exposes a REST API via Axum for the web frontend.
//!
//! ## Features
//!
//! - **Collection storage**: Per-user owned-creature records behind a
//!   repository abstraction
//! - **Analytics**: Pure aggregation of a record list into dashboard
//!   statistics
//! - **Reference data**: Static national-dex generation ranges
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes and the DTO surface for API responses
//! - [`models`]: Domain models and the record ingestion boundary
//! - [`db`]: Repository pattern and persistence layer
//! - [`services`]: High-level business logic (analytics aggregation)
//! - [`routes`]: Route-specific data types
//! - `http`: Axum-based HTTP server and request handlers

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
