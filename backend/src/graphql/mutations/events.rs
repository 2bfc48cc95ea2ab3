use super::prelude::*;

#[derive(Default)]
pub struct EventMutations;

#[Object]
impl EventMutations {
    /// Create an event. `location_id` and `user_id` are stored as given and not checked.
    async fn add_event(&self, ctx: &Context<'_>, input: AddEventInput) -> Result<Event> {
        let db = ctx.data_unchecked::<Database>();
        let notifications = ctx.data_unchecked::<Arc<NotificationService>>();

        let record = db.events().create(input.into());
        info!(entity = "Event", id = %record.id, user_id = %record.user_id, "Created event");
        notifications.publish(ChangeKind::Created, record.clone());

        Ok(Event::from(record))
    }

    /// Update the supplied fields of an event
    async fn update_event(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateEventInput,
    ) -> Result<Event> {
        let db = ctx.data_unchecked::<Database>();
        let notifications = ctx.data_unchecked::<Arc<NotificationService>>();

        let record = store_result(db.events().update(&id, input.into()))?;
        info!(entity = "Event", id = %record.id, "Updated event");
        notifications.publish(ChangeKind::Updated, record.clone());

        Ok(Event::from(record))
    }

    /// Delete an event, returning it as it was. Its participants are kept.
    async fn delete_event(&self, ctx: &Context<'_>, id: ID) -> Result<Event> {
        let db = ctx.data_unchecked::<Database>();
        let notifications = ctx.data_unchecked::<Arc<NotificationService>>();

        let record = store_result(db.events().delete(&id))?;
        info!(entity = "Event", id = %record.id, "Deleted event");
        notifications.publish(ChangeKind::Deleted, record.clone());

        Ok(Event::from(record))
    }

    /// Delete every event, returning how many were removed
    async fn delete_all_events(&self, ctx: &Context<'_>) -> Result<usize> {
        let db = ctx.data_unchecked::<Database>();
        let count = db.events().delete_all();
        info!(entity = "Event", count, "Deleted all events");
        Ok(count)
    }
}
