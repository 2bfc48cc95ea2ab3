pub mod events;
pub mod locations;
pub mod participants;
pub mod users;

pub use events::EventQueries;
pub use locations::LocationQueries;
pub use participants::ParticipantQueries;
pub use users::UserQueries;

pub(crate) mod prelude {
    pub(crate) use async_graphql::{Context, ID, Object, Result};

    pub(crate) use crate::db::Database;
    pub(crate) use crate::graphql::helpers::*;
    pub(crate) use crate::graphql::types::*;
}
