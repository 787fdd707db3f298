//! Meeting Entity Implementation
//!
//! 화상 회의 엔티티입니다. 호스트, 참가 코드, 정원과 참가자 ID 목록을 관리합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 회의 엔티티
///
/// 참가자 ID 목록은 빠른 정원 확인을 위한 비정규화 필드이며,
/// 상세 참가 정보는 Participant 문서가 따로 가집니다.
/// 두 컬렉션 간의 일관성은 트랜잭션 없이 느슨하게 유지됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 회의를 생성한 사용자의 ID
    pub host_id: ObjectId,
    /// 회의 제목
    pub title: String,
    /// 참가 코드 (unique)
    pub code: String,
    /// 현재 참가 중인 사용자 ID 목록
    #[serde(default)]
    pub participant_ids: Vec<ObjectId>,
    /// 최대 정원
    pub capacity: u32,
    /// 진행 중 여부
    pub is_active: bool,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Meeting {
    /// 새 회의 생성
    ///
    /// 참가 코드는 자동 생성되며, 호스트는 참가자 목록에 포함된 상태로 시작합니다.
    pub fn new(host_id: ObjectId, title: String, capacity: u32) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            host_id,
            title,
            code: Self::generate_code(),
            participant_ids: vec![host_id],
            capacity,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// 참가 코드 생성
    ///
    /// UUID v4 앞 8자리를 사용합니다. 충돌 가능성은 코드의 유니크 인덱스로 방어합니다.
    pub fn generate_code() -> String {
        Uuid::new_v4().simple().to_string()[..8].to_string()
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 현재 참가자 수
    pub fn participant_count(&self) -> usize {
        self.participant_ids.len()
    }

    /// 정원이 가득 찼는지 확인
    pub fn is_full(&self) -> bool {
        self.participant_count() >= self.capacity as usize
    }

    /// 해당 사용자가 이미 참가 중인지 확인
    pub fn has_participant(&self, user_id: &ObjectId) -> bool {
        self.participant_ids.contains(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_meeting_includes_host() {
        let host_id = ObjectId::new();
        let meeting = Meeting::new(host_id, "주간 회의".to_string(), 5);

        assert!(meeting.is_active);
        assert_eq!(meeting.participant_count(), 1);
        assert!(meeting.has_participant(&host_id));
        assert!(!meeting.is_full());
    }

    #[test]
    fn test_generate_code_format() {
        let code = Meeting::generate_code();

        assert_eq!(code.len(), 8);
        assert!(code.chars().all(|c| c.is_ascii_hexdigit()));

        // 연속 생성 시 서로 다른 코드
        assert_ne!(code, Meeting::generate_code());
    }

    #[test]
    fn test_is_full_at_capacity() {
        let host_id = ObjectId::new();
        let mut meeting = Meeting::new(host_id, "소규모 회의".to_string(), 2);

        meeting.participant_ids.push(ObjectId::new());
        assert!(meeting.is_full());
    }
}
