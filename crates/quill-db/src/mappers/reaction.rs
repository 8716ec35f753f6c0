//! Reaction entity <-> model mapper

use quill_core::{DomainError, Reaction, ReactionValue, Snowflake};

use crate::models::ReactionModel;

impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        Ok(Reaction {
            target_id: Snowflake::new(model.target_id),
            user_id: Snowflake::new(model.user_id),
            value: ReactionValue::from_i16(model.value)?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
