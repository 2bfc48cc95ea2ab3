use super::prelude::*;

#[derive(Default)]
pub struct ParticipantQueries;

#[Object]
impl ParticipantQueries {
    /// Get all participants
    async fn participants(&self, ctx: &Context<'_>) -> Vec<Participant> {
        let db = ctx.data_unchecked::<Database>();
        db.participants()
            .list()
            .into_iter()
            .map(Participant::from)
            .collect()
    }

    /// Get a participant by ID
    async fn participant(&self, ctx: &Context<'_>, id: ID) -> Result<Participant> {
        let db = ctx.data_unchecked::<Database>();
        let record = store_result(db.participants().require(&id))?;
        Ok(Participant::from(record))
    }
}
