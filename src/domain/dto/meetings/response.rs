//! 미팅 응답 DTO

use mongodb::bson::DateTime;
use serde::Serialize;

use crate::domain::entities::meetings::Meeting;

/// 미팅 응답
#[derive(Debug, Clone, Serialize)]
pub struct MeetingResponse {
    pub id: String,
    pub host_id: String,
    pub title: String,
    /// 참가 초대에 사용하는 8자리 코드
    pub code: String,
    pub participant_count: usize,
    pub capacity: u32,
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Meeting> for MeetingResponse {
    fn from(meeting: Meeting) -> Self {
        Self {
            id: meeting.id_string().unwrap_or_default(),
            host_id: meeting.host_id.to_hex(),
            title: meeting.title,
            code: meeting.code,
            participant_count: meeting.participant_ids.len(),
            capacity: meeting.capacity,
            is_active: meeting.is_active,
            created_at: meeting.created_at,
            updated_at: meeting.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_meeting_response_counts_participants() {
        let host_id = ObjectId::new();
        let mut meeting = Meeting::new(host_id, "주간 회의".to_string(), 10);
        meeting.id = Some(ObjectId::new());
        meeting.participant_ids.push(ObjectId::new());

        let response = MeetingResponse::from(meeting);
        assert_eq!(response.participant_count, 2);
        assert_eq!(response.host_id, host_id.to_hex());
    }
}
