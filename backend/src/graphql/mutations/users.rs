use super::prelude::*;

#[derive(Default)]
pub struct UserMutations;

#[Object]
impl UserMutations {
    /// Create a user; omitted fields default to empty strings
    async fn add_user(&self, ctx: &Context<'_>, input: AddUserInput) -> Result<User> {
        let db = ctx.data_unchecked::<Database>();
        let notifications = ctx.data_unchecked::<Arc<NotificationService>>();

        let record = db.users().create(input.into());
        info!(entity = "User", id = %record.id, "Created user");
        notifications.publish(ChangeKind::Created, record.clone());

        Ok(User::from(record))
    }

    /// Update the supplied fields of a user
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateUserInput,
    ) -> Result<User> {
        let db = ctx.data_unchecked::<Database>();
        let notifications = ctx.data_unchecked::<Arc<NotificationService>>();

        let record = store_result(db.users().update(&id, input.into()))?;
        info!(entity = "User", id = %record.id, "Updated user");
        notifications.publish(ChangeKind::Updated, record.clone());

        Ok(User::from(record))
    }

    /// Delete a user, returning it as it was. Their events and participations are kept.
    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> Result<User> {
        let db = ctx.data_unchecked::<Database>();
        let notifications = ctx.data_unchecked::<Arc<NotificationService>>();

        let record = store_result(db.users().delete(&id))?;
        info!(entity = "User", id = %record.id, "Deleted user");
        notifications.publish(ChangeKind::Deleted, record.clone());

        Ok(User::from(record))
    }

    /// Delete every user, returning how many were removed
    async fn delete_all_users(&self, ctx: &Context<'_>) -> Result<usize> {
        let db = ctx.data_unchecked::<Database>();
        let count = db.users().delete_all();
        info!(entity = "User", count, "Deleted all users");
        Ok(count)
    }
}
