use super::prelude::*;

#[derive(Default)]
pub struct LocationQueries;

#[Object]
impl LocationQueries {
    /// Get all locations
    async fn locations(&self, ctx: &Context<'_>) -> Vec<Location> {
        let db = ctx.data_unchecked::<Database>();
        db.locations().list().into_iter().map(Location::from).collect()
    }

    /// Get a location by ID
    async fn location(&self, ctx: &Context<'_>, id: ID) -> Result<Location> {
        let db = ctx.data_unchecked::<Database>();
        let record = store_result(db.locations().require(&id))?;
        Ok(Location::from(record))
    }
}
