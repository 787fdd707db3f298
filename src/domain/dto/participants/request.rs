//! 참가자 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// 참가자 상태 수정 요청
///
/// 제공된 필드만 반영됩니다. `role`은 "host" / "cohost" / "attendee" 중 하나입니다.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateParticipantRequest {
    pub is_muted: Option<bool>,
    pub camera_on: Option<bool>,
    pub hand_raised: Option<bool>,
    pub role: Option<String>,
}

impl UpdateParticipantRequest {
    pub fn has_changes(&self) -> bool {
        self.is_muted.is_some()
            || self.camera_on.is_some()
            || self.hand_raised.is_some()
            || self.role.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_participant_has_changes() {
        let empty: UpdateParticipantRequest = serde_json::from_str("{}").unwrap();
        assert!(!empty.has_changes());

        let mute: UpdateParticipantRequest =
            serde_json::from_str(r#"{"is_muted": true}"#).unwrap();
        assert!(mute.has_changes());
    }
}
