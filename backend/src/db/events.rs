//! Event records
//!
//! An event is organized by a user (`user_id`) and held at a location
//! (`location_id`). Neither reference is validated, so either may dangle
//! once the referenced record is deleted.

use serde::{Deserialize, Serialize};

use super::Tables;
use super::table::{Entity, Repository, Table};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "desc")]
    pub description: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, rename = "from")]
    pub start_time: String,
    #[serde(default, rename = "to")]
    pub end_time: String,
    #[serde(default)]
    pub location_id: String,
    #[serde(default)]
    pub user_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct CreateEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location_id: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location_id: Option<String>,
    pub user_id: Option<String>,
}

impl Entity for EventRecord {
    const NAME: &'static str = "Event";

    type Create = CreateEvent;
    type Update = UpdateEvent;

    fn id(&self) -> &str {
        &self.id
    }

    fn create(id: String, input: CreateEvent) -> Self {
        Self {
            id,
            title: input.title.unwrap_or_default(),
            description: input.description.unwrap_or_default(),
            date: input.date.unwrap_or_default(),
            start_time: input.start_time.unwrap_or_default(),
            end_time: input.end_time.unwrap_or_default(),
            location_id: input.location_id.unwrap_or_default(),
            user_id: input.user_id.unwrap_or_default(),
        }
    }

    fn apply(&mut self, patch: UpdateEvent) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(start_time) = patch.start_time {
            self.start_time = start_time;
        }
        if let Some(end_time) = patch.end_time {
            self.end_time = end_time;
        }
        if let Some(location_id) = patch.location_id {
            self.location_id = location_id;
        }
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
    }

    fn table(tables: &Tables) -> &Table<Self> {
        &tables.events
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.events
    }
}

impl Repository<EventRecord> {
    /// Events organized by the given user
    pub fn list_by_user(&self, user_id: &str) -> Vec<EventRecord> {
        self.filter(|event| event.user_id == user_id)
    }

    /// Events held at the given location
    pub fn list_by_location(&self, location_id: &str) -> Vec<EventRecord> {
        self.filter(|event| event.location_id == location_id)
    }
}
