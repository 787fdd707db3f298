//! # 회의 관리 서비스 구현
//!
//! 회의 생성, 조회, 수정, 종료의 비즈니스 로직을 담당합니다.
//! 회의 생성 시 호스트의 참가 기록도 함께 만들어지며,
//! 회의 삭제 시 남아 있는 참가 기록을 정리합니다.

use std::sync::Arc;

use mongodb::bson::{doc, Bson, Document};
use singleton_macro::service;

use crate::{
    config::data_config::MeetingConfig,
    domain::{
        dto::meetings::{
            request::{CreateMeetingRequest, UpdateMeetingRequest},
            response::MeetingResponse,
        },
        entities::{
            meetings::Meeting,
            participants::{Participant, ParticipantRole},
        },
        models::auth::AuthenticatedUser,
    },
    errors::errors::AppError,
    repositories::{
        dao::{parse_object_id, CrudDao},
        meetings::meeting_repo::MeetingRepository,
        participants::participant_repo::ParticipantRepository,
    },
    utils::string_utils::validate_required_string,
};

/// 회의 관리 비즈니스 로직 서비스
#[service(name = "meeting")]
pub struct MeetingService {
    /// 회의 리포지토리 (자동 주입)
    meeting_repo: Arc<MeetingRepository>,

    /// 참가자 리포지토리 (자동 주입)
    ///
    /// 회의 생성 시 호스트 참가 기록 생성, 회의 삭제 시 참가 기록 정리에 사용합니다.
    participant_repo: Arc<ParticipantRepository>,
}

impl MeetingService {
    /// 새 회의 생성
    ///
    /// 정원을 생략하면 환경 설정의 기본 정원이 적용됩니다.
    /// 호스트는 참가자 목록에 포함된 상태로 시작하며,
    /// Host 역할의 참가 기록이 함께 생성됩니다.
    pub async fn create_meeting(
        &self,
        host: &AuthenticatedUser,
        request: CreateMeetingRequest,
    ) -> Result<MeetingResponse, AppError> {
        let host_id = parse_object_id(&host.user_id)?;
        let title = validate_required_string(&request.title, "title")?;
        let capacity = request.capacity.unwrap_or_else(MeetingConfig::default_capacity);

        let meeting = Meeting::new(host_id, title, capacity);
        let created = self.meeting_repo.create(meeting).await?;

        // 호스트 참가 기록 생성. 실패해도 회의 자체는 유효하므로 경고만 남긴다.
        if let Some(meeting_id) = created.id {
            let host_record = Participant::new(meeting_id, host_id, ParticipantRole::Host);
            if let Err(e) = self.participant_repo.create(host_record).await {
                log::warn!("호스트 참가 기록 생성 실패 (meeting: {}): {}", meeting_id.to_hex(), e);
            }
        }

        log::info!("✅ 새 회의 생성: {} (code: {})", created.title, created.code);

        Ok(MeetingResponse::from(created))
    }

    /// 전체 회의 목록 조회
    pub async fn list_meetings(&self) -> Result<Vec<MeetingResponse>, AppError> {
        let meetings = self.meeting_repo.find_all().await?;
        Ok(meetings.into_iter().map(MeetingResponse::from).collect())
    }

    /// 요청자가 호스트인 회의 목록 조회
    pub async fn list_my_meetings(
        &self,
        host: &AuthenticatedUser,
    ) -> Result<Vec<MeetingResponse>, AppError> {
        let host_id = parse_object_id(&host.user_id)?;
        let meetings = self.meeting_repo.find_by_host(&host_id).await?;

        Ok(meetings.into_iter().map(MeetingResponse::from).collect())
    }

    /// ID로 회의 조회
    pub async fn get_meeting(&self, id: &str) -> Result<MeetingResponse, AppError> {
        let meeting = self
            .meeting_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("회의를 찾을 수 없습니다".to_string()))?;

        Ok(MeetingResponse::from(meeting))
    }

    /// 참가 코드로 회의 조회
    pub async fn get_meeting_by_code(&self, code: &str) -> Result<MeetingResponse, AppError> {
        let meeting = self
            .meeting_repo
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound("회의를 찾을 수 없습니다".to_string()))?;

        Ok(MeetingResponse::from(meeting))
    }

    /// 회의 정보 수정 (호스트 전용)
    ///
    /// `is_active: false`로 설정하면 회의가 종료되어 신규 참가가 차단됩니다.
    pub async fn update_meeting(
        &self,
        id: &str,
        requester: &AuthenticatedUser,
        request: UpdateMeetingRequest,
    ) -> Result<MeetingResponse, AppError> {
        if !request.has_changes() {
            return Err(AppError::ValidationError(
                "수정할 필드가 없습니다".to_string(),
            ));
        }

        self.ensure_host(id, requester).await?;

        let update_doc = Self::build_update_doc(request);

        let updated = self
            .meeting_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("회의를 찾을 수 없습니다".to_string()))?;

        Ok(MeetingResponse::from(updated))
    }

    /// 회의 삭제 (호스트 전용)
    ///
    /// 남아 있는 참가 기록도 함께 정리합니다.
    pub async fn delete_meeting(
        &self,
        id: &str,
        requester: &AuthenticatedUser,
    ) -> Result<(), AppError> {
        let meeting = self.ensure_host(id, requester).await?;

        let deleted = self.meeting_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("회의를 찾을 수 없습니다".to_string()));
        }

        if let Some(meeting_id) = meeting.id {
            let removed = self.participant_repo.delete_by_meeting(&meeting_id).await?;
            log::info!("회의 삭제: {} (참가 기록 {}건 정리)", meeting.title, removed);
        }

        Ok(())
    }

    /// 요청자가 회의 호스트인지 확인
    async fn ensure_host(
        &self,
        id: &str,
        requester: &AuthenticatedUser,
    ) -> Result<Meeting, AppError> {
        let meeting = self
            .meeting_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("회의를 찾을 수 없습니다".to_string()))?;

        let requester_id = parse_object_id(&requester.user_id)?;

        if meeting.host_id != requester_id {
            return Err(AppError::AuthorizationError(
                "호스트만 수행할 수 있는 작업입니다".to_string(),
            ));
        }

        Ok(meeting)
    }

    fn build_update_doc(request: UpdateMeetingRequest) -> Document {
        let mut update_doc = doc! {};

        if let Some(title) = request.title {
            update_doc.insert("title", title);
        }
        if let Some(capacity) = request.capacity {
            update_doc.insert("capacity", Bson::Int64(capacity as i64));
        }
        if let Some(is_active) = request.is_active {
            update_doc.insert("is_active", is_active);
        }

        update_doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_update_doc_deactivation() {
        let request: UpdateMeetingRequest =
            serde_json::from_str(r#"{"is_active": false}"#).unwrap();

        let update_doc = MeetingService::build_update_doc(request);
        assert_eq!(update_doc.get_bool("is_active").unwrap(), false);
        assert!(!update_doc.contains_key("title"));
    }
}
