//! Startup seed data.
//!
//! A seed file is a JSON object with optional `users`, `events`,
//! `locations` and `participants` arrays. Records use the same field names
//! as the GraphQL schema and carry their own ids.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::info;

use super::table::Entity;
use super::{EventRecord, LocationRecord, ParticipantRecord, UserRecord};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub users: Vec<UserRecord>,
    pub events: Vec<EventRecord>,
    pub locations: Vec<LocationRecord>,
    pub participants: Vec<ParticipantRecord>,
}

impl Seed {
    /// Read and validate a seed file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;

        let seed = Self::from_json(&contents)
            .with_context(|| format!("Invalid seed file {}", path.display()))?;

        info!(
            path = %path.display(),
            users = seed.users.len(),
            events = seed.events.len(),
            locations = seed.locations.len(),
            participants = seed.participants.len(),
            "Seed data loaded"
        );

        Ok(seed)
    }

    /// Parse seed JSON, rejecting duplicate ids within a collection
    pub fn from_json(json: &str) -> Result<Self> {
        let seed: Seed = serde_json::from_str(json)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Every id must be unique within its collection
    pub fn validate(&self) -> Result<()> {
        ensure_unique_ids(&self.users)?;
        ensure_unique_ids(&self.events)?;
        ensure_unique_ids(&self.locations)?;
        ensure_unique_ids(&self.participants)?;
        Ok(())
    }
}

fn ensure_unique_ids<T: Entity>(rows: &[T]) -> Result<()> {
    let mut seen = HashSet::new();
    for row in rows {
        if !seen.insert(row.id()) {
            bail!("Duplicate {} id in seed data: {}", T::NAME, row.id());
        }
    }
    Ok(())
}
