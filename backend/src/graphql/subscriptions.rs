//! GraphQL subscriptions for real-time updates
//!
//! Each subscription listens on one topic of the [`NotificationService`]
//! and forwards matching records unchanged. Subscribers only see changes
//! made after they subscribed.

use std::sync::Arc;

use async_graphql::{Context, Subscription};
use futures::Stream;
use tokio::sync::broadcast;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

use crate::services::{ChangeKind, EntityKind, NotificationService, Payload, StoreEvent, Topic};

use super::types::{Event, Location, Participant, User};

fn subscribe(ctx: &Context<'_>) -> broadcast::Receiver<StoreEvent> {
    ctx.data_unchecked::<Arc<NotificationService>>().subscribe()
}

/// Payloads published on `topic` after `receiver` was created
fn topic_stream(
    receiver: broadcast::Receiver<StoreEvent>,
    topic: Topic,
) -> impl Stream<Item = Payload> {
    tracing::debug!(%topic, "Subscriber attached");

    BroadcastStream::new(receiver).filter_map(move |result| match result {
        Ok(event) if event.topic() == topic => Some(event.payload),
        Ok(_) => None,
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            tracing::warn!(%topic, skipped, "Subscriber lagged, events dropped");
            None
        }
    })
}

fn users(payload: Payload) -> Option<User> {
    match payload {
        Payload::User(record) => Some(User::from(record)),
        _ => None,
    }
}

fn events(payload: Payload) -> Option<Event> {
    match payload {
        Payload::Event(record) => Some(Event::from(record)),
        _ => None,
    }
}

fn locations(payload: Payload) -> Option<Location> {
    match payload {
        Payload::Location(record) => Some(Location::from(record)),
        _ => None,
    }
}

fn participants(payload: Payload) -> Option<Participant> {
    match payload {
        Payload::Participant(record) => Some(Participant::from(record)),
        _ => None,
    }
}

pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    async fn user_created<'ctx>(
        &self,
        ctx: &Context<'ctx>,
    ) -> impl Stream<Item = User> + 'ctx {
        topic_stream(subscribe(ctx), Topic::new(EntityKind::User, ChangeKind::Created))
            .filter_map(users)
    }

    async fn user_updated<'ctx>(
        &self,
        ctx: &Context<'ctx>,
    ) -> impl Stream<Item = User> + 'ctx {
        topic_stream(subscribe(ctx), Topic::new(EntityKind::User, ChangeKind::Updated))
            .filter_map(users)
    }

    async fn user_deleted<'ctx>(
        &self,
        ctx: &Context<'ctx>,
    ) -> impl Stream<Item = User> + 'ctx {
        topic_stream(subscribe(ctx), Topic::new(EntityKind::User, ChangeKind::Deleted))
            .filter_map(users)
    }

    async fn event_created<'ctx>(
        &self,
        ctx: &Context<'ctx>,
    ) -> impl Stream<Item = Event> + 'ctx {
        topic_stream(subscribe(ctx), Topic::new(EntityKind::Event, ChangeKind::Created))
            .filter_map(events)
    }

    async fn event_updated<'ctx>(
        &self,
        ctx: &Context<'ctx>,
    ) -> impl Stream<Item = Event> + 'ctx {
        topic_stream(subscribe(ctx), Topic::new(EntityKind::Event, ChangeKind::Updated))
            .filter_map(events)
    }

    async fn event_deleted<'ctx>(
        &self,
        ctx: &Context<'ctx>,
    ) -> impl Stream<Item = Event> + 'ctx {
        topic_stream(subscribe(ctx), Topic::new(EntityKind::Event, ChangeKind::Deleted))
            .filter_map(events)
    }

    async fn location_created<'ctx>(
        &self,
        ctx: &Context<'ctx>,
    ) -> impl Stream<Item = Location> + 'ctx {
        topic_stream(subscribe(ctx), Topic::new(EntityKind::Location, ChangeKind::Created))
            .filter_map(locations)
    }

    async fn location_updated<'ctx>(
        &self,
        ctx: &Context<'ctx>,
    ) -> impl Stream<Item = Location> + 'ctx {
        topic_stream(subscribe(ctx), Topic::new(EntityKind::Location, ChangeKind::Updated))
            .filter_map(locations)
    }

    async fn location_deleted<'ctx>(
        &self,
        ctx: &Context<'ctx>,
    ) -> impl Stream<Item = Location> + 'ctx {
        topic_stream(subscribe(ctx), Topic::new(EntityKind::Location, ChangeKind::Deleted))
            .filter_map(locations)
    }

    async fn participant_created<'ctx>(
        &self,
        ctx: &Context<'ctx>,
    ) -> impl Stream<Item = Participant> + 'ctx {
        topic_stream(subscribe(ctx), Topic::new(EntityKind::Participant, ChangeKind::Created))
            .filter_map(participants)
    }

    async fn participant_updated<'ctx>(
        &self,
        ctx: &Context<'ctx>,
    ) -> impl Stream<Item = Participant> + 'ctx {
        topic_stream(subscribe(ctx), Topic::new(EntityKind::Participant, ChangeKind::Updated))
            .filter_map(participants)
    }

    async fn participant_deleted<'ctx>(
        &self,
        ctx: &Context<'ctx>,
    ) -> impl Stream<Item = Participant> + 'ctx {
        topic_stream(subscribe(ctx), Topic::new(EntityKind::Participant, ChangeKind::Deleted))
            .filter_map(participants)
    }
}
