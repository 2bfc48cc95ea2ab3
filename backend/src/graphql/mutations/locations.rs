use super::prelude::*;

#[derive(Default)]
pub struct LocationMutations;

#[Object]
impl LocationMutations {
    /// Create a location; omitted coordinates default to 0
    async fn add_location(&self, ctx: &Context<'_>, input: AddLocationInput) -> Result<Location> {
        let db = ctx.data_unchecked::<Database>();
        let notifications = ctx.data_unchecked::<Arc<NotificationService>>();

        let record = db.locations().create(input.into());
        info!(entity = "Location", id = %record.id, name = %record.name, "Created location");
        notifications.publish(ChangeKind::Created, record.clone());

        Ok(Location::from(record))
    }

    async fn update_location(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateLocationInput,
    ) -> Result<Location> {
        let db = ctx.data_unchecked::<Database>();
        let notifications = ctx.data_unchecked::<Arc<NotificationService>>();

        let record = store_result(db.locations().update(&id, input.into()))?;
        info!(entity = "Location", id = %record.id, "Updated location");
        notifications.publish(ChangeKind::Updated, record.clone());

        Ok(Location::from(record))
    }

    async fn delete_location(&self, ctx: &Context<'_>, id: ID) -> Result<Location> {
        let db = ctx.data_unchecked::<Database>();
        let notifications = ctx.data_unchecked::<Arc<NotificationService>>();

        let record = store_result(db.locations().delete(&id))?;
        info!(entity = "Location", id = %record.id, "Deleted location");
        notifications.publish(ChangeKind::Deleted, record.clone());

        Ok(Location::from(record))
    }

    async fn delete_all_locations(&self, ctx: &Context<'_>) -> Result<usize> {
        let db = ctx.data_unchecked::<Database>();
        let count = db.locations().delete_all();
        info!(entity = "Location", count, "Deleted all locations");
        Ok(count)
    }
}
