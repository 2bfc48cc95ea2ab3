use super::prelude::*;

#[derive(Default)]
pub struct ParticipantMutations;

#[Object]
impl ParticipantMutations {
    /// Register a user for an event
    async fn add_participant(
        &self,
        ctx: &Context<'_>,
        input: AddParticipantInput,
    ) -> Result<Participant> {
        let db = ctx.data_unchecked::<Database>();
        let notifications = ctx.data_unchecked::<Arc<NotificationService>>();

        let record = db.participants().create(input.into());
        info!(
            entity = "Participant",
            id = %record.id,
            user_id = %record.user_id,
            event_id = %record.event_id,
            "Created participant"
        );
        notifications.publish(ChangeKind::Created, record.clone());

        Ok(Participant::from(record))
    }

    async fn update_participant(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateParticipantInput,
    ) -> Result<Participant> {
        let db = ctx.data_unchecked::<Database>();
        let notifications = ctx.data_unchecked::<Arc<NotificationService>>();

        let record = store_result(db.participants().update(&id, input.into()))?;
        info!(entity = "Participant", id = %record.id, "Updated participant");
        notifications.publish(ChangeKind::Updated, record.clone());

        Ok(Participant::from(record))
    }

    async fn delete_participant(&self, ctx: &Context<'_>, id: ID) -> Result<Participant> {
        let db = ctx.data_unchecked::<Database>();
        let notifications = ctx.data_unchecked::<Arc<NotificationService>>();

        let record = store_result(db.participants().delete(&id))?;
        info!(entity = "Participant", id = %record.id, "Deleted participant");
        notifications.publish(ChangeKind::Deleted, record.clone());

        Ok(Participant::from(record))
    }

    async fn delete_all_participants(&self, ctx: &Context<'_>) -> Result<usize> {
        let db = ctx.data_unchecked::<Database>();
        let count = db.participants().delete_all();
        info!(entity = "Participant", count, "Deleted all participants");
        Ok(count)
    }
}
