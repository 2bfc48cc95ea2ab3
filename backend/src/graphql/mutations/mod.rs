pub mod events;
pub mod locations;
pub mod participants;
pub mod users;

pub use events::EventMutations;
pub use locations::LocationMutations;
pub use participants::ParticipantMutations;
pub use users::UserMutations;

pub(crate) mod prelude {
    pub(crate) use std::sync::Arc;

    pub(crate) use async_graphql::{Context, ID, Object, Result};
    pub(crate) use tracing::info;

    pub(crate) use crate::db::Database;
    pub(crate) use crate::graphql::helpers::*;
    pub(crate) use crate::graphql::types::*;
    pub(crate) use crate::services::{ChangeKind, NotificationService};
}
