//! Rendezvous - GraphQL API for users, events, locations and participants
//!
//! All data lives in an in-memory [`db::Database`]; every operation is
//! exposed through the GraphQL schema built by [`graphql::build_schema`].

pub mod api;
pub mod app;
pub mod config;
pub mod db;
pub mod graphql;
pub mod services;

pub use app::{AppState, build_app};
