use super::prelude::*;

#[derive(Default)]
pub struct EventQueries;

#[Object]
impl EventQueries {
    /// Get all events
    async fn events(&self, ctx: &Context<'_>) -> Vec<Event> {
        let db = ctx.data_unchecked::<Database>();
        db.events().list().into_iter().map(Event::from).collect()
    }

    /// Get an event by ID
    async fn event(&self, ctx: &Context<'_>, id: ID) -> Result<Event> {
        let db = ctx.data_unchecked::<Database>();
        let record = store_result(db.events().require(&id))?;
        Ok(Event::from(record))
    }
}
