//! GraphQL API with subscriptions for real-time updates
//!
//! Queries and mutations are split per entity under `queries/` and
//! `mutations/` and merged into the roots in `schema.rs`. Resolvers read the
//! [`Database`](crate::db::Database) and the
//! [`NotificationService`](crate::services::NotificationService) from the
//! schema context.

pub mod helpers;
pub mod mutations;
pub mod queries;
mod schema;
mod subscriptions;
pub mod types;

pub use schema::{MutationRoot, QueryRoot, RendezvousSchema, build_schema};
pub use subscriptions::SubscriptionRoot;
