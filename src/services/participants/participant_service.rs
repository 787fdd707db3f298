//! # 참가자 관리 서비스 구현
//!
//! 회의 참가/퇴장과 참가자 상태(음소거, 카메라, 손들기, 역할) 변경을 담당합니다.
//!
//! ## 참가 규칙
//!
//! 1. 회의가 존재해야 한다 (없으면 404)
//! 2. 진행 중인 회의여야 한다 (종료된 회의는 409)
//! 3. 정원에 여유가 있어야 한다 (가득 차면 409)
//! 4. 이미 참가 중이면 다시 참가할 수 없다 (409)

use std::sync::Arc;

use mongodb::bson::{doc, Document};
use singleton_macro::service;

use crate::{
    domain::{
        dto::participants::{request::UpdateParticipantRequest, response::ParticipantResponse},
        entities::participants::{Participant, ParticipantRole},
        models::auth::AuthenticatedUser,
    },
    errors::errors::AppError,
    repositories::{
        dao::{parse_object_id, CrudDao},
        meetings::meeting_repo::MeetingRepository,
        participants::participant_repo::ParticipantRepository,
    },
};

/// 참가자 관리 비즈니스 로직 서비스
#[service(name = "participant")]
pub struct ParticipantService {
    /// 참가자 리포지토리 (자동 주입)
    participant_repo: Arc<ParticipantRepository>,

    /// 회의 리포지토리 (자동 주입)
    ///
    /// 참가 조건 확인과 회의 문서의 참가자 목록 동기화에 사용합니다.
    meeting_repo: Arc<MeetingRepository>,
}

impl ParticipantService {
    /// 회의 참가
    ///
    /// 참가 조건을 모두 통과하면 Attendee 역할의 참가 기록을 만들고
    /// 회의 문서의 참가자 목록에 추가합니다.
    pub async fn join_meeting(
        &self,
        meeting_id: &str,
        user: &AuthenticatedUser,
    ) -> Result<ParticipantResponse, AppError> {
        let meeting = self
            .meeting_repo
            .find_by_id(meeting_id)
            .await?
            .ok_or_else(|| AppError::NotFound("회의를 찾을 수 없습니다".to_string()))?;

        if !meeting.is_active {
            return Err(AppError::ConflictError(
                "종료된 회의에는 참가할 수 없습니다".to_string(),
            ));
        }

        if meeting.is_full() {
            return Err(AppError::ConflictError(
                "회의 정원이 가득 찼습니다".to_string(),
            ));
        }

        let user_id = parse_object_id(&user.user_id)?;
        let meeting_oid = parse_object_id(meeting_id)?;

        if meeting.has_participant(&user_id)
            || self
                .participant_repo
                .find_by_meeting_and_user(&meeting_oid, &user_id)
                .await?
                .is_some()
        {
            return Err(AppError::ConflictError(
                "이미 참가 중인 회의입니다".to_string(),
            ));
        }

        let participant = Participant::new(meeting_oid, user_id, ParticipantRole::Attendee);
        let created = self.participant_repo.create(participant).await?;

        self.meeting_repo
            .add_participant(meeting_id, &user_id)
            .await?;

        log::info!("회의 참가: {} → {}", user.user_id, meeting.title);

        Ok(ParticipantResponse::from(created))
    }

    /// 회의의 참가자 목록 조회
    pub async fn list_participants(
        &self,
        meeting_id: &str,
    ) -> Result<Vec<ParticipantResponse>, AppError> {
        let meeting_oid = parse_object_id(meeting_id)?;

        if self.meeting_repo.find_by_id(meeting_id).await?.is_none() {
            return Err(AppError::NotFound("회의를 찾을 수 없습니다".to_string()));
        }

        let participants = self.participant_repo.find_by_meeting(&meeting_oid).await?;

        Ok(participants
            .into_iter()
            .map(ParticipantResponse::from)
            .collect())
    }

    /// 참가자 상태 수정
    ///
    /// 미디어 상태(음소거, 카메라, 손들기)는 본인 또는 진행자(호스트/공동 호스트)가
    /// 변경할 수 있고, 역할 변경은 회의 호스트만 가능합니다.
    pub async fn update_participant(
        &self,
        participant_id: &str,
        requester: &AuthenticatedUser,
        request: UpdateParticipantRequest,
    ) -> Result<ParticipantResponse, AppError> {
        if !request.has_changes() {
            return Err(AppError::ValidationError(
                "수정할 필드가 없습니다".to_string(),
            ));
        }

        let participant = self
            .participant_repo
            .find_by_id(participant_id)
            .await?
            .ok_or_else(|| AppError::NotFound("참가자를 찾을 수 없습니다".to_string()))?;

        let requester_id = parse_object_id(&requester.user_id)?;
        let is_self = participant.user_id == requester_id;
        let is_meeting_host = self
            .requester_is_meeting_host(&participant.meeting_id, &requester_id)
            .await?;
        let is_moderator = is_meeting_host
            || self
                .requester_has_host_role(&participant.meeting_id, &requester_id)
                .await?;

        Self::authorize_update(is_self, is_moderator, is_meeting_host, request.role.is_some())?;

        let update_doc = Self::build_update_doc(request)?;

        let updated = self
            .participant_repo
            .update(participant_id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("참가자를 찾을 수 없습니다".to_string()))?;

        Ok(ParticipantResponse::from(updated))
    }

    /// 회의 퇴장
    ///
    /// 본인의 퇴장 또는 진행자(호스트/공동 호스트)의 강제 퇴장만 허용되며,
    /// 회의 문서의 참가자 목록에서도 제거합니다.
    pub async fn remove_participant(
        &self,
        participant_id: &str,
        requester: &AuthenticatedUser,
    ) -> Result<(), AppError> {
        let participant = self
            .participant_repo
            .find_by_id(participant_id)
            .await?
            .ok_or_else(|| AppError::NotFound("참가자를 찾을 수 없습니다".to_string()))?;

        let requester_id = parse_object_id(&requester.user_id)?;
        let is_self = participant.user_id == requester_id;

        let is_moderator = self
            .requester_is_meeting_host(&participant.meeting_id, &requester_id)
            .await?
            || self
                .requester_has_host_role(&participant.meeting_id, &requester_id)
                .await?;

        if !is_self && !is_moderator {
            return Err(AppError::AuthorizationError(
                "본인 또는 호스트만 퇴장시킬 수 있습니다".to_string(),
            ));
        }

        let deleted = self.participant_repo.delete(participant_id).await?;
        if !deleted {
            return Err(AppError::NotFound("참가자를 찾을 수 없습니다".to_string()));
        }

        self.meeting_repo
            .remove_participant(&participant.meeting_id.to_hex(), &participant.user_id)
            .await?;

        Ok(())
    }

    /// 요청자가 회의 문서상의 호스트인지 확인
    async fn requester_is_meeting_host(
        &self,
        meeting_id: &mongodb::bson::oid::ObjectId,
        requester_id: &mongodb::bson::oid::ObjectId,
    ) -> Result<bool, AppError> {
        let meeting = self.meeting_repo.find_by_id(&meeting_id.to_hex()).await?;

        Ok(meeting
            .map(|m| m.host_id == *requester_id)
            .unwrap_or(false))
    }

    /// 요청자의 참가 기록이 호스트 권한(호스트/공동 호스트)을 가지는지 확인
    async fn requester_has_host_role(
        &self,
        meeting_id: &mongodb::bson::oid::ObjectId,
        requester_id: &mongodb::bson::oid::ObjectId,
    ) -> Result<bool, AppError> {
        let record = self
            .participant_repo
            .find_by_meeting_and_user(meeting_id, requester_id)
            .await?;

        Ok(record.map(|p| p.is_host()).unwrap_or(false))
    }

    /// 참가자 수정 권한 판정
    ///
    /// - 미디어 상태: 본인 또는 진행자(호스트/공동 호스트)
    /// - 역할 변경: 회의 호스트만 (공동 호스트의 역할 부여/회수 방지)
    fn authorize_update(
        is_self: bool,
        is_moderator: bool,
        is_meeting_host: bool,
        changes_role: bool,
    ) -> Result<(), AppError> {
        if !is_self && !is_moderator {
            return Err(AppError::AuthorizationError(
                "본인 또는 호스트만 변경할 수 있습니다".to_string(),
            ));
        }

        if changes_role && !is_meeting_host {
            return Err(AppError::AuthorizationError(
                "역할 변경은 회의 호스트만 가능합니다".to_string(),
            ));
        }

        Ok(())
    }

    fn build_update_doc(request: UpdateParticipantRequest) -> Result<Document, AppError> {
        let mut update_doc = doc! {};

        if let Some(is_muted) = request.is_muted {
            update_doc.insert("is_muted", is_muted);
        }
        if let Some(camera_on) = request.camera_on {
            update_doc.insert("camera_on", camera_on);
        }
        if let Some(hand_raised) = request.hand_raised {
            update_doc.insert("hand_raised", hand_raised);
        }
        if let Some(role) = request.role {
            let role = ParticipantRole::from_str(&role).map_err(AppError::ValidationError)?;
            update_doc.insert("role", role.as_str());
        }

        Ok(update_doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_update_doc_media_state() {
        let request: UpdateParticipantRequest =
            serde_json::from_str(r#"{"is_muted": true, "hand_raised": true}"#).unwrap();

        let update_doc = ParticipantService::build_update_doc(request).unwrap();
        assert_eq!(update_doc.get_bool("is_muted").unwrap(), true);
        assert_eq!(update_doc.get_bool("hand_raised").unwrap(), true);
        assert!(!update_doc.contains_key("camera_on"));
    }

    #[test]
    fn test_build_update_doc_rejects_unknown_role() {
        let request: UpdateParticipantRequest =
            serde_json::from_str(r#"{"role": "moderator"}"#).unwrap();

        let result = ParticipantService::build_update_doc(request);
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_cohost_can_moderate_media_but_not_roles() {
        // 공동 호스트: 진행자 권한은 있으나 회의 호스트는 아님
        let media_change =
            ParticipantService::authorize_update(false, true, false, false);
        assert!(media_change.is_ok());

        let role_change = ParticipantService::authorize_update(false, true, false, true);
        assert!(matches!(role_change, Err(AppError::AuthorizationError(_))));
    }

    #[test]
    fn test_self_can_update_own_media_state() {
        assert!(ParticipantService::authorize_update(true, false, false, false).is_ok());

        // 본인이라도 역할은 스스로 바꿀 수 없음
        let self_role_change =
            ParticipantService::authorize_update(true, false, false, true);
        assert!(matches!(
            self_role_change,
            Err(AppError::AuthorizationError(_))
        ));
    }

    #[test]
    fn test_meeting_host_can_change_roles() {
        assert!(ParticipantService::authorize_update(false, true, true, true).is_ok());
    }

    #[test]
    fn test_stranger_cannot_update_participant() {
        let result = ParticipantService::authorize_update(false, false, false, false);
        assert!(matches!(result, Err(AppError::AuthorizationError(_))));
    }

    #[test]
    fn test_build_update_doc_normalizes_role_case() {
        let request: UpdateParticipantRequest =
            serde_json::from_str(r#"{"role": "COHOST"}"#).unwrap();

        let update_doc = ParticipantService::build_update_doc(request).unwrap();
        assert_eq!(update_doc.get_str("role").unwrap(), "cohost");
    }
}
