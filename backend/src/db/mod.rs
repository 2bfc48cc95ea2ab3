//! In-memory data store
//!
//! Four ordered collections (users, events, locations, participants) live
//! behind a single [`Database`] handle. The handle is cheap to clone and is
//! handed to the GraphQL schema as context data, so every resolver and
//! mutation works against an explicit store rather than process globals.

pub mod events;
pub mod locations;
pub mod participants;
pub mod seed;
pub mod table;
pub mod users;

use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

pub use events::{CreateEvent, EventRecord, UpdateEvent};
pub use locations::{CreateLocation, LocationRecord, UpdateLocation};
pub use participants::{CreateParticipant, ParticipantRecord, UpdateParticipant};
pub use seed::Seed;
pub use table::{Entity, Repository, Table};
pub use users::{CreateUser, UpdateUser, UserRecord};

/// Errors returned by store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// The four collections owned by a [`Database`]
#[derive(Debug, Default)]
pub struct Tables {
    pub users: Table<UserRecord>,
    pub events: Table<EventRecord>,
    pub locations: Table<LocationRecord>,
    pub participants: Table<ParticipantRecord>,
}

/// Collection sizes, used by the readiness probe
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub users: usize,
    pub events: usize,
    pub locations: usize,
    pub participants: usize,
}

/// Shared handle to the in-memory store
#[derive(Clone, Default)]
pub struct Database {
    tables: Arc<RwLock<Tables>>,
}

impl Database {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated from seed data
    pub fn from_seed(seed: Seed) -> anyhow::Result<Self> {
        seed.validate()?;

        let tables = Tables {
            users: Table::from_rows(seed.users),
            events: Table::from_rows(seed.events),
            locations: Table::from_rows(seed.locations),
            participants: Table::from_rows(seed.participants),
        };

        Ok(Self {
            tables: Arc::new(RwLock::new(tables)),
        })
    }

    /// Get a users repository
    pub fn users(&self) -> Repository<UserRecord> {
        Repository::new(self.tables.clone())
    }

    /// Get an events repository
    pub fn events(&self) -> Repository<EventRecord> {
        Repository::new(self.tables.clone())
    }

    /// Get a locations repository
    pub fn locations(&self) -> Repository<LocationRecord> {
        Repository::new(self.tables.clone())
    }

    /// Get a participants repository
    pub fn participants(&self) -> Repository<ParticipantRecord> {
        Repository::new(self.tables.clone())
    }

    pub fn stats(&self) -> StoreStats {
        let tables = self.tables.read();
        StoreStats {
            users: tables.users.len(),
            events: tables.events.len(),
            locations: tables.locations.len(),
            participants: tables.participants.len(),
        }
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("stats", &self.stats())
            .finish()
    }
}
