//! # 참가자 관리 HTTP 핸들러
//!
//! 회의 참가/퇴장과 참가자 상태 변경 엔드포인트를 처리합니다.
//! 모든 엔드포인트는 Bearer 토큰 인증이 필요합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/meetings/{id}/participants` | 참가자 목록 조회 | 200 OK |
//! | `POST` | `/meetings/{id}/participants` | 회의 참가 | 201 Created |
//! | `PUT` | `/participants/{id}` | 참가자 상태 수정 | 200 OK |
//! | `DELETE` | `/participants/{id}` | 회의 퇴장 | 204 No Content |

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::participants::request::UpdateParticipantRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::services::participants::participant_service::ParticipantService;

/// 참가자 목록 조회 핸들러
#[get("/{meeting_id}/participants")]
pub async fn list_participants(meeting_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = ParticipantService::instance();
    let participants = service.list_participants(&meeting_id).await?;

    Ok(HttpResponse::Ok().json(participants))
}

/// 회의 참가 핸들러
///
/// # 응답
///
/// - **201 Created**: 생성된 참가 기록
/// - **404 Not Found**: 존재하지 않는 회의
/// - **409 Conflict**: 종료된 회의, 정원 초과, 또는 중복 참가
#[post("/{meeting_id}/participants")]
pub async fn join_meeting(
    auth: AuthenticatedUser,
    meeting_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = ParticipantService::instance();
    let participant = service.join_meeting(&meeting_id, &auth).await?;

    Ok(HttpResponse::Created().json(participant))
}

/// 참가자 상태 수정 핸들러
///
/// 미디어 상태는 본인 또는 호스트, 역할 변경은 호스트만 가능합니다.
#[put("/{participant_id}")]
pub async fn update_participant(
    auth: AuthenticatedUser,
    participant_id: web::Path<String>,
    payload: web::Json<UpdateParticipantRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = ParticipantService::instance();
    let participant = service
        .update_participant(&participant_id, &auth, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(participant))
}

/// 회의 퇴장 핸들러
///
/// 본인의 퇴장 또는 호스트의 강제 퇴장을 처리합니다.
#[delete("/{participant_id}")]
pub async fn remove_participant(
    auth: AuthenticatedUser,
    participant_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = ParticipantService::instance();
    service.remove_participant(&participant_id, &auth).await?;

    Ok(HttpResponse::NoContent().finish())
}
