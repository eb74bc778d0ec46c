use thiserror::Error;

use crate::types::ParticipantId;

#[derive(Debug, Error)]
pub enum ParleyError {
    #[error("{name} does not have permission to create chat rooms!")]
    PermissionDenied { name: String },

    #[error("unknown participant: {0}")]
    UnknownParticipant(ParticipantId),

    #[error("unknown room: {0}")]
    UnknownRoom(String),
}
