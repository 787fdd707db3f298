//! 참가자 응답 DTO

use mongodb::bson::DateTime;
use serde::Serialize;

use crate::domain::entities::participants::{Participant, ParticipantRole};

/// 참가자 응답
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantResponse {
    pub id: String,
    pub meeting_id: String,
    pub user_id: String,
    pub role: ParticipantRole,
    pub is_muted: bool,
    pub camera_on: bool,
    pub hand_raised: bool,
    pub joined_at: DateTime,
}

impl From<Participant> for ParticipantResponse {
    fn from(participant: Participant) -> Self {
        Self {
            id: participant
                .id
                .map(|id| id.to_hex())
                .unwrap_or_default(),
            meeting_id: participant.meeting_id.to_hex(),
            user_id: participant.user_id.to_hex(),
            role: participant.role,
            is_muted: participant.is_muted,
            camera_on: participant.camera_on,
            hand_raised: participant.hand_raised,
            joined_at: participant.joined_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_participant_response_from_entity() {
        let meeting_id = ObjectId::new();
        let user_id = ObjectId::new();
        let mut participant = Participant::new(meeting_id, user_id, ParticipantRole::Attendee);
        participant.id = Some(ObjectId::new());

        let response = ParticipantResponse::from(participant);
        assert_eq!(response.meeting_id, meeting_id.to_hex());
        assert_eq!(response.user_id, user_id.to_hex());
        assert!(!response.is_muted);
        assert!(response.camera_on);
    }
}
