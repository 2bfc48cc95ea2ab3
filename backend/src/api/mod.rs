//! HTTP route definitions
//!
//! The primary API is GraphQL at /graphql (queries, mutations, playground)
//! and /graphql/ws (subscriptions). Health probes live at the root.

pub mod graphql;
pub mod health;
