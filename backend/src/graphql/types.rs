//! GraphQL object and input types
//!
//! Field names follow the published schema verbatim (`desc`, `from`, `to`,
//! `location_id`, ...), so several Rust fields carry an explicit
//! `#[graphql(name = ...)]`.

use async_graphql::{ComplexObject, Context, ID, InputObject, SimpleObject};

use crate::db::{
    CreateEvent, CreateLocation, CreateParticipant, CreateUser, Database, EventRecord,
    LocationRecord, ParticipantRecord, UpdateEvent, UpdateLocation, UpdateParticipant, UpdateUser,
    UserRecord,
};

// ============================================================================
// Users
// ============================================================================

#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(complex)]
pub struct User {
    pub id: ID,
    pub username: String,
    pub email: String,
}

#[ComplexObject]
impl User {
    /// Events organized by this user
    async fn events(&self, ctx: &Context<'_>) -> Vec<Event> {
        let db = ctx.data_unchecked::<Database>();
        db.events()
            .list_by_user(&self.id)
            .into_iter()
            .map(Event::from)
            .collect()
    }
}

impl From<UserRecord> for User {
    fn from(r: UserRecord) -> Self {
        Self {
            id: ID(r.id),
            username: r.username,
            email: r.email,
        }
    }
}

#[derive(Debug, Default, InputObject)]
pub struct AddUserInput {
    pub username: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Default, InputObject)]
pub struct UpdateUserInput {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl From<AddUserInput> for CreateUser {
    fn from(input: AddUserInput) -> Self {
        Self {
            username: input.username,
            email: input.email,
        }
    }
}

impl From<UpdateUserInput> for UpdateUser {
    fn from(input: UpdateUserInput) -> Self {
        Self {
            username: input.username,
            email: input.email,
        }
    }
}

// ============================================================================
// Events
// ============================================================================

#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(complex)]
pub struct Event {
    pub id: ID,
    pub title: String,
    #[graphql(name = "desc")]
    pub description: String,
    pub date: String,
    #[graphql(name = "from")]
    pub start_time: String,
    #[graphql(name = "to")]
    pub end_time: String,
    #[graphql(name = "location_id")]
    pub location_id: ID,
    #[graphql(name = "user_id")]
    pub user_id: ID,
}

#[ComplexObject]
impl Event {
    /// The organizer, or null if the user no longer exists
    async fn user(&self, ctx: &Context<'_>) -> Option<User> {
        let db = ctx.data_unchecked::<Database>();
        db.users().get(&self.user_id).map(User::from)
    }

    /// Where the event is held, or null if the location no longer exists
    async fn location(&self, ctx: &Context<'_>) -> Option<Location> {
        let db = ctx.data_unchecked::<Database>();
        db.locations().get(&self.location_id).map(Location::from)
    }

    async fn participants(&self, ctx: &Context<'_>) -> Vec<Participant> {
        let db = ctx.data_unchecked::<Database>();
        db.participants()
            .list_by_event(&self.id)
            .into_iter()
            .map(Participant::from)
            .collect()
    }
}

impl From<EventRecord> for Event {
    fn from(r: EventRecord) -> Self {
        Self {
            id: ID(r.id),
            title: r.title,
            description: r.description,
            date: r.date,
            start_time: r.start_time,
            end_time: r.end_time,
            location_id: ID(r.location_id),
            user_id: ID(r.user_id),
        }
    }
}

#[derive(Debug, Default, InputObject)]
pub struct AddEventInput {
    pub title: Option<String>,
    #[graphql(name = "desc")]
    pub description: Option<String>,
    pub date: Option<String>,
    #[graphql(name = "from")]
    pub start_time: Option<String>,
    #[graphql(name = "to")]
    pub end_time: Option<String>,
    #[graphql(name = "location_id")]
    pub location_id: Option<ID>,
    #[graphql(name = "user_id")]
    pub user_id: Option<ID>,
}

#[derive(Debug, Default, InputObject)]
pub struct UpdateEventInput {
    pub title: Option<String>,
    #[graphql(name = "desc")]
    pub description: Option<String>,
    pub date: Option<String>,
    #[graphql(name = "from")]
    pub start_time: Option<String>,
    #[graphql(name = "to")]
    pub end_time: Option<String>,
    #[graphql(name = "location_id")]
    pub location_id: Option<ID>,
    #[graphql(name = "user_id")]
    pub user_id: Option<ID>,
}

impl From<AddEventInput> for CreateEvent {
    fn from(input: AddEventInput) -> Self {
        Self {
            title: input.title,
            description: input.description,
            date: input.date,
            start_time: input.start_time,
            end_time: input.end_time,
            location_id: input.location_id.map(|id| id.0),
            user_id: input.user_id.map(|id| id.0),
        }
    }
}

impl From<UpdateEventInput> for UpdateEvent {
    fn from(input: UpdateEventInput) -> Self {
        Self {
            title: input.title,
            description: input.description,
            date: input.date,
            start_time: input.start_time,
            end_time: input.end_time,
            location_id: input.location_id.map(|id| id.0),
            user_id: input.user_id.map(|id| id.0),
        }
    }
}

// ============================================================================
// Locations
// ============================================================================

#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(complex)]
pub struct Location {
    pub id: ID,
    pub name: String,
    #[graphql(name = "desc")]
    pub description: String,
    pub lat: f64,
    pub lng: f64,
}

#[ComplexObject]
impl Location {
    /// Events held at this location
    async fn events(&self, ctx: &Context<'_>) -> Vec<Event> {
        let db = ctx.data_unchecked::<Database>();
        db.events()
            .list_by_location(&self.id)
            .into_iter()
            .map(Event::from)
            .collect()
    }
}

impl From<LocationRecord> for Location {
    fn from(r: LocationRecord) -> Self {
        Self {
            id: ID(r.id),
            name: r.name,
            description: r.description,
            lat: r.lat,
            lng: r.lng,
        }
    }
}

#[derive(Debug, Default, InputObject)]
pub struct AddLocationInput {
    pub name: Option<String>,
    #[graphql(name = "desc")]
    pub description: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Default, InputObject)]
pub struct UpdateLocationInput {
    pub name: Option<String>,
    #[graphql(name = "desc")]
    pub description: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl From<AddLocationInput> for CreateLocation {
    fn from(input: AddLocationInput) -> Self {
        Self {
            name: input.name,
            description: input.description,
            lat: input.lat,
            lng: input.lng,
        }
    }
}

impl From<UpdateLocationInput> for UpdateLocation {
    fn from(input: UpdateLocationInput) -> Self {
        Self {
            name: input.name,
            description: input.description,
            lat: input.lat,
            lng: input.lng,
        }
    }
}

// ============================================================================
// Participants
// ============================================================================

#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(complex)]
pub struct Participant {
    pub id: ID,
    #[graphql(name = "user_id")]
    pub user_id: ID,
    #[graphql(name = "event_id")]
    pub event_id: ID,
}

#[ComplexObject]
impl Participant {
    async fn user(&self, ctx: &Context<'_>) -> Option<User> {
        let db = ctx.data_unchecked::<Database>();
        db.users().get(&self.user_id).map(User::from)
    }

    async fn event(&self, ctx: &Context<'_>) -> Option<Event> {
        let db = ctx.data_unchecked::<Database>();
        db.events().get(&self.event_id).map(Event::from)
    }
}

impl From<ParticipantRecord> for Participant {
    fn from(r: ParticipantRecord) -> Self {
        Self {
            id: ID(r.id),
            user_id: ID(r.user_id),
            event_id: ID(r.event_id),
        }
    }
}

#[derive(Debug, Default, InputObject)]
pub struct AddParticipantInput {
    #[graphql(name = "user_id")]
    pub user_id: Option<ID>,
    #[graphql(name = "event_id")]
    pub event_id: Option<ID>,
}

#[derive(Debug, Default, InputObject)]
pub struct UpdateParticipantInput {
    #[graphql(name = "user_id")]
    pub user_id: Option<ID>,
    #[graphql(name = "event_id")]
    pub event_id: Option<ID>,
}

impl From<AddParticipantInput> for CreateParticipant {
    fn from(input: AddParticipantInput) -> Self {
        Self {
            user_id: input.user_id.map(|id| id.0),
            event_id: input.event_id.map(|id| id.0),
        }
    }
}

impl From<UpdateParticipantInput> for UpdateParticipant {
    fn from(input: UpdateParticipantInput) -> Self {
        Self {
            user_id: input.user_id.map(|id| id.0),
            event_id: input.event_id.map(|id| id.0),
        }
    }
}
