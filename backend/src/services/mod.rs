//! Process-level services shared by the HTTP and GraphQL layers

pub mod logging;
pub mod notifications;

pub use logging::{LogFormat, init_tracing};
pub use notifications::{
    ChangeKind, EntityKind, MAX_CHANNEL_CAPACITY, NotificationService, NotificationServiceConfig,
    Payload, StoreEvent, Topic,
};
