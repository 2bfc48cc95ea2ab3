use super::prelude::*;

#[derive(Default)]
pub struct UserQueries;

#[Object]
impl UserQueries {
    /// Get all users
    async fn users(&self, ctx: &Context<'_>) -> Vec<User> {
        let db = ctx.data_unchecked::<Database>();
        db.users().list().into_iter().map(User::from).collect()
    }

    /// Get a user by ID
    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<User> {
        let db = ctx.data_unchecked::<Database>();
        let record = store_result(db.users().require(&id))?;
        Ok(User::from(record))
    }
}
