//! # 회의 관리 HTTP 핸들러
//!
//! 회의 CRUD와 코드 조회 엔드포인트를 처리합니다.
//! 모든 엔드포인트는 Bearer 토큰 인증이 필요합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/meetings` | 회의 목록 조회 | 200 OK |
//! | `POST` | `/meetings` | 회의 생성 | 201 Created |
//! | `GET` | `/meetings/mine` | 내가 호스트인 회의 목록 | 200 OK |
//! | `GET` | `/meetings/code/{code}` | 참가 코드로 조회 | 200 OK |
//! | `GET` | `/meetings/{id}` | 회의 조회 | 200 OK |
//! | `PUT` | `/meetings/{id}` | 회의 수정 (호스트 전용) | 200 OK |
//! | `DELETE` | `/meetings/{id}` | 회의 삭제 (호스트 전용) | 204 No Content |

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::meetings::request::{CreateMeetingRequest, UpdateMeetingRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::services::meetings::meeting_service::MeetingService;

/// 회의 목록 조회 핸들러
#[get("")]
pub async fn list_meetings() -> Result<HttpResponse, AppError> {
    let service = MeetingService::instance();
    let meetings = service.list_meetings().await?;

    Ok(HttpResponse::Ok().json(meetings))
}

/// 회의 생성 핸들러
///
/// 요청자가 호스트가 되며, 참가 코드가 자동으로 발급됩니다.
#[post("")]
pub async fn create_meeting(
    auth: AuthenticatedUser,
    payload: web::Json<CreateMeetingRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = MeetingService::instance();
    let meeting = service.create_meeting(&auth, payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(meeting))
}

/// 내가 호스트인 회의 목록 조회 핸들러
#[get("/mine")]
pub async fn list_my_meetings(auth: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let service = MeetingService::instance();
    let meetings = service.list_my_meetings(&auth).await?;

    Ok(HttpResponse::Ok().json(meetings))
}

/// 참가 코드로 회의 조회 핸들러
///
/// 초대 링크의 코드를 회의 정보로 변환할 때 사용합니다.
#[get("/code/{code}")]
pub async fn get_meeting_by_code(code: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = MeetingService::instance();
    let meeting = service.get_meeting_by_code(&code).await?;

    Ok(HttpResponse::Ok().json(meeting))
}

/// 회의 조회 핸들러
#[get("/{meeting_id}")]
pub async fn get_meeting(meeting_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = MeetingService::instance();
    let meeting = service.get_meeting(&meeting_id).await?;

    Ok(HttpResponse::Ok().json(meeting))
}

/// 회의 수정 핸들러 (호스트 전용)
///
/// `is_active: false`로 회의를 종료할 수 있습니다.
#[put("/{meeting_id}")]
pub async fn update_meeting(
    auth: AuthenticatedUser,
    meeting_id: web::Path<String>,
    payload: web::Json<UpdateMeetingRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = MeetingService::instance();
    let meeting = service
        .update_meeting(&meeting_id, &auth, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(meeting))
}

/// 회의 삭제 핸들러 (호스트 전용)
#[delete("/{meeting_id}")]
pub async fn delete_meeting(
    auth: AuthenticatedUser,
    meeting_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = MeetingService::instance();
    service.delete_meeting(&meeting_id, &auth).await?;

    Ok(HttpResponse::NoContent().finish())
}
