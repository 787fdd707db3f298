//! Participant Entity Implementation
//!
//! 회의 참가 기록 엔티티입니다. 사용자의 회의 내 역할과
//! 미디어 상태(음소거, 카메라, 손들기)를 관리합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 회의 내 역할
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantRole {
    /// 호스트 (회의 생성자)
    Host,
    /// 공동 호스트
    Cohost,
    /// 일반 참가자
    Attendee,
}

impl ParticipantRole {
    /// 문자열에서 ParticipantRole을 생성합니다.
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "host" => Ok(ParticipantRole::Host),
            "cohost" => Ok(ParticipantRole::Cohost),
            "attendee" => Ok(ParticipantRole::Attendee),
            _ => Err(format!("Unsupported participant role: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantRole::Host => "host",
            ParticipantRole::Cohost => "cohost",
            ParticipantRole::Attendee => "attendee",
        }
    }
}

/// 참가자 엔티티
///
/// 하나의 문서가 (회의, 사용자) 쌍 하나를 표현합니다.
/// 회의 문서의 `participant_ids` 목록과는 느슨하게만 동기화됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 참가 중인 회의 ID
    pub meeting_id: ObjectId,
    /// 참가한 사용자 ID
    pub user_id: ObjectId,
    /// 회의 내 역할
    pub role: ParticipantRole,
    /// 음소거 여부
    pub is_muted: bool,
    /// 카메라 켜짐 여부
    pub camera_on: bool,
    /// 손들기 여부
    pub hand_raised: bool,
    /// 참가 시간
    pub joined_at: DateTime,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Participant {
    /// 새 참가 기록 생성
    pub fn new(meeting_id: ObjectId, user_id: ObjectId, role: ParticipantRole) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            meeting_id,
            user_id,
            role,
            is_muted: false,
            camera_on: true,
            hand_raised: false,
            joined_at: now,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 호스트 권한을 가진 참가자인지 확인
    pub fn is_host(&self) -> bool {
        matches!(self.role, ParticipantRole::Host | ParticipantRole::Cohost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_participant_defaults() {
        let participant = Participant::new(ObjectId::new(), ObjectId::new(), ParticipantRole::Attendee);

        assert!(!participant.is_muted);
        assert!(participant.camera_on);
        assert!(!participant.hand_raised);
        assert!(!participant.is_host());
    }

    #[test]
    fn test_participant_role_from_string() {
        assert_eq!(ParticipantRole::from_str("host").unwrap(), ParticipantRole::Host);
        assert_eq!(ParticipantRole::from_str("COHOST").unwrap(), ParticipantRole::Cohost);
        assert_eq!(ParticipantRole::from_str("attendee").unwrap(), ParticipantRole::Attendee);
        assert!(ParticipantRole::from_str("viewer").is_err());
    }

    #[test]
    fn test_cohost_has_host_permission() {
        let participant = Participant::new(ObjectId::new(), ObjectId::new(), ParticipantRole::Cohost);
        assert!(participant.is_host());
    }
}
