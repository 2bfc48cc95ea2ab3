//! Participant records
//!
//! A participant joins a user to an event. Deleting either side leaves the
//! participant in place.

use serde::{Deserialize, Serialize};

use super::Tables;
use super::table::{Entity, Repository, Table};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub event_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct CreateParticipant {
    pub user_id: Option<String>,
    pub event_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateParticipant {
    pub user_id: Option<String>,
    pub event_id: Option<String>,
}

impl Entity for ParticipantRecord {
    const NAME: &'static str = "Participant";

    type Create = CreateParticipant;
    type Update = UpdateParticipant;

    fn id(&self) -> &str {
        &self.id
    }

    fn create(id: String, input: CreateParticipant) -> Self {
        Self {
            id,
            user_id: input.user_id.unwrap_or_default(),
            event_id: input.event_id.unwrap_or_default(),
        }
    }

    fn apply(&mut self, patch: UpdateParticipant) {
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
        if let Some(event_id) = patch.event_id {
            self.event_id = event_id;
        }
    }

    fn table(tables: &Tables) -> &Table<Self> {
        &tables.participants
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.participants
    }
}

impl Repository<ParticipantRecord> {
    /// Participants attending the given event
    pub fn list_by_event(&self, event_id: &str) -> Vec<ParticipantRecord> {
        self.filter(|participant| participant.event_id == event_id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::db::{CreateEvent, CreateUser, Database};

    #[test]
    fn test_list_by_event_joins_on_event_id() {
        let db = Database::new();
        let organizer = db.users().create(CreateUser::default());
        let event = db.events().create(CreateEvent {
            user_id: Some(organizer.id.clone()),
            ..Default::default()
        });

        let attending = db.participants().create(CreateParticipant {
            user_id: Some("guest".to_string()),
            event_id: Some(event.id.clone()),
        });
        // Same user as the organizer but a different event
        db.participants().create(CreateParticipant {
            user_id: Some(organizer.id.clone()),
            event_id: Some("other".to_string()),
        });

        assert_eq!(db.participants().list_by_event(&event.id), vec![attending]);
    }

    #[test]
    fn test_deleting_event_does_not_cascade() {
        let db = Database::new();
        let event = db.events().create(CreateEvent::default());
        db.participants().create(CreateParticipant {
            user_id: Some("u1".to_string()),
            event_id: Some(event.id.clone()),
        });

        db.events().delete(&event.id).unwrap();

        assert_eq!(db.participants().list_by_event(&event.id).len(), 1);
    }
}
