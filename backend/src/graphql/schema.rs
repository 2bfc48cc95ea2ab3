//! GraphQL schema definition with queries, mutations, and subscriptions

use std::sync::Arc;

use async_graphql::{MergedObject, Schema};

use crate::db::Database;
use crate::services::NotificationService;

use super::mutations::{EventMutations, LocationMutations, ParticipantMutations, UserMutations};
use super::queries::{EventQueries, LocationQueries, ParticipantQueries, UserQueries};
use super::subscriptions::SubscriptionRoot;

/// The GraphQL schema type
pub type RendezvousSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

#[derive(MergedObject, Default)]
pub struct QueryRoot(UserQueries, EventQueries, LocationQueries, ParticipantQueries);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    UserMutations,
    EventMutations,
    LocationMutations,
    ParticipantMutations,
);

/// Build the GraphQL schema over a store and its notification hub
pub fn build_schema(db: Database, notifications: Arc<NotificationService>) -> RendezvousSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), SubscriptionRoot)
        .data(db)
        .data(notifications)
        .finish()
}
