//! 미팅 요청 DTO

use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::config::data_config::MeetingConfig;
use crate::utils::string_utils::deserialize_optional_string;

/// 미팅 생성 요청
///
/// `capacity`를 생략하면 환경 설정의 기본 정원이 적용됩니다.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMeetingRequest {
    #[validate(length(min = 1, max = 100, message = "제목은 1-100자 사이여야 합니다"))]
    pub title: String,

    #[validate(custom(function = "validate_capacity"))]
    pub capacity: Option<u32>,
}

/// 미팅 수정 요청
///
/// 제공된 필드만 반영됩니다.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMeetingRequest {
    #[validate(length(min = 1, max = 100, message = "제목은 1-100자 사이여야 합니다"))]
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub title: Option<String>,

    #[validate(custom(function = "validate_capacity"))]
    pub capacity: Option<u32>,

    /// 미팅 활성 상태 (false로 설정하면 미팅 종료)
    pub is_active: Option<bool>,
}

impl UpdateMeetingRequest {
    pub fn has_changes(&self) -> bool {
        self.title.is_some() || self.capacity.is_some() || self.is_active.is_some()
    }
}

/// 정원 범위 검증
///
/// 허용 범위는 [`MeetingConfig`]의 정원 상수를 따릅니다.
fn validate_capacity(capacity: u32) -> Result<(), ValidationError> {
    if capacity < MeetingConfig::MIN_CAPACITY || capacity > MeetingConfig::MAX_CAPACITY {
        return Err(ValidationError::new("capacity_out_of_range").with_message(
            format!(
                "정원은 {}-{} 사이여야 합니다",
                MeetingConfig::MIN_CAPACITY,
                MeetingConfig::MAX_CAPACITY
            )
            .into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(capacity: Option<u32>) -> CreateMeetingRequest {
        CreateMeetingRequest {
            title: "주간 회의".to_string(),
            capacity,
        }
    }

    #[test]
    fn test_create_meeting_validation() {
        assert!(create_request(Some(10)).validate().is_ok());

        let empty_title = CreateMeetingRequest {
            title: "".to_string(),
            capacity: None,
        };
        assert!(empty_title.validate().is_err());

        assert!(create_request(Some(500)).validate().is_err());
    }

    #[test]
    fn test_capacity_follows_configured_bounds() {
        assert!(create_request(None).validate().is_ok());
        assert!(create_request(Some(MeetingConfig::MIN_CAPACITY)).validate().is_ok());
        assert!(create_request(Some(MeetingConfig::MAX_CAPACITY)).validate().is_ok());

        assert!(create_request(Some(MeetingConfig::MIN_CAPACITY - 1)).validate().is_err());
        assert!(create_request(Some(MeetingConfig::MAX_CAPACITY + 1)).validate().is_err());
    }

    #[test]
    fn test_update_meeting_capacity_validation() {
        let too_small: UpdateMeetingRequest =
            serde_json::from_str(r#"{"capacity": 1}"#).unwrap();
        assert!(too_small.validate().is_err());

        let in_range: UpdateMeetingRequest =
            serde_json::from_str(r#"{"capacity": 50}"#).unwrap();
        assert!(in_range.validate().is_ok());
    }

    #[test]
    fn test_update_meeting_has_changes() {
        let empty: UpdateMeetingRequest = serde_json::from_str("{}").unwrap();
        assert!(!empty.has_changes());

        let deactivate: UpdateMeetingRequest =
            serde_json::from_str(r#"{"is_active": false}"#).unwrap();
        assert!(deactivate.has_changes());
    }
}
