//! Change notifications for GraphQL subscriptions
//!
//! Mutations publish a [`StoreEvent`] after every successful write and
//! subscription resolvers listen for the [`Topic`] they serve. Delivery is
//! in-process and at-most-once: a subscriber only sees events published
//! after it subscribed, and publishing with no subscribers is a no-op.

use std::fmt;

use tokio::sync::broadcast;
use tracing::debug;

use crate::db::{EventRecord, LocationRecord, ParticipantRecord, UserRecord};

/// Which collection an event concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Event,
    Location,
    Participant,
}

impl EntityKind {
    fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Event => "event",
            EntityKind::Location => "location",
            EntityKind::Participant => "participant",
        }
    }
}

/// What happened to the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Created,
    Updated,
    Deleted,
}

impl ChangeKind {
    fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Created => "Created",
            ChangeKind::Updated => "Updated",
            ChangeKind::Deleted => "Deleted",
        }
    }
}

/// A named notification channel, e.g. `userCreated`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Topic {
    pub entity: EntityKind,
    pub change: ChangeKind,
}

impl Topic {
    pub const fn new(entity: EntityKind, change: ChangeKind) -> Self {
        Self { entity, change }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.entity.as_str(), self.change.as_str())
    }
}

/// The record carried by a [`StoreEvent`]
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    User(UserRecord),
    Event(EventRecord),
    Location(LocationRecord),
    Participant(ParticipantRecord),
}

impl Payload {
    pub fn entity(&self) -> EntityKind {
        match self {
            Payload::User(_) => EntityKind::User,
            Payload::Event(_) => EntityKind::Event,
            Payload::Location(_) => EntityKind::Location,
            Payload::Participant(_) => EntityKind::Participant,
        }
    }
}

impl From<UserRecord> for Payload {
    fn from(record: UserRecord) -> Self {
        Payload::User(record)
    }
}

impl From<EventRecord> for Payload {
    fn from(record: EventRecord) -> Self {
        Payload::Event(record)
    }
}

impl From<LocationRecord> for Payload {
    fn from(record: LocationRecord) -> Self {
        Payload::Location(record)
    }
}

impl From<ParticipantRecord> for Payload {
    fn from(record: ParticipantRecord) -> Self {
        Payload::Participant(record)
    }
}

/// Event broadcast when a record is created, updated or deleted
#[derive(Debug, Clone, PartialEq)]
pub struct StoreEvent {
    pub change: ChangeKind,
    pub payload: Payload,
}

impl StoreEvent {
    pub fn topic(&self) -> Topic {
        Topic::new(self.payload.entity(), self.change)
    }
}

/// Upper bound for the broadcast buffer; the channel allocates every slot up front
pub const MAX_CHANNEL_CAPACITY: usize = 1 << 16;

/// Notification service configuration
#[derive(Debug, Clone)]
pub struct NotificationServiceConfig {
    /// Broadcast channel capacity
    pub channel_capacity: usize,
}

impl Default for NotificationServiceConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 256,
        }
    }
}

/// Publish/subscribe hub for store changes
pub struct NotificationService {
    event_tx: broadcast::Sender<StoreEvent>,
}

impl NotificationService {
    pub fn new(config: NotificationServiceConfig) -> Self {
        let capacity = config.channel_capacity.clamp(1, MAX_CHANNEL_CAPACITY);
        let (event_tx, _) = broadcast::channel(capacity);
        Self { event_tx }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::new(NotificationServiceConfig::default())
    }

    /// Subscribe to every store event published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.event_tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.event_tx.receiver_count()
    }

    /// Publish a change, returning how many subscribers received it
    pub fn publish(&self, change: ChangeKind, payload: impl Into<Payload>) -> usize {
        let event = StoreEvent {
            change,
            payload: payload.into(),
        };
        let topic = event.topic();

        // A send error only means nobody is listening right now
        let delivered = self.event_tx.send(event).unwrap_or(0);
        debug!(%topic, delivered, "Published store event");
        delivered
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::with_defaults()
    }
}
