//! # 사용자 관리 HTTP 핸들러
//!
//! 사용자 프로필의 CRUD 엔드포인트를 처리합니다.
//! 모든 엔드포인트는 Bearer 토큰 인증이 필요합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/users` | 사용자 목록 조회 | 200 OK |
//! | `POST` | `/users` | 프로필 직접 생성 | 201 Created |
//! | `GET` | `/users/me` | 내 프로필 조회 | 200 OK |
//! | `GET` | `/users/{id}` | 사용자 조회 | 200 OK |
//! | `PUT` | `/users/{id}` | 사용자 수정 | 200 OK |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | 204 No Content |

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::services::users::user_service::UserService;

/// 사용자 목록 조회 핸들러
#[get("")]
pub async fn list_users() -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let users = service.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 생성 핸들러
///
/// 인증 제공자 계정 생성 없이 프로필 문서만 만듭니다.
/// 일반 가입 흐름은 `POST /users/register`를 사용하세요.
#[post("")]
pub async fn create_user(payload: web::Json<CreateUserRequest>) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 내 프로필 조회 핸들러
///
/// 미들웨어가 Bearer 토큰으로 확인한 본인 프로필을 반환합니다.
///
/// # 엔드포인트
///
/// `GET /users/me`
#[get("/me")]
pub async fn get_me(auth: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let user = service.get_user_by_id(&auth.user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /users/{user_id}`
///
/// # 응답
///
/// - **200 OK**: 사용자 정보
/// - **404 Not Found**: 존재하지 않는 사용자
/// - **400 Bad Request**: 잘못된 ID 형식
#[get("/{user_id}")]
pub async fn get_user(user_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let user = service.get_user_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 수정 핸들러
///
/// 제공된 필드만 반영됩니다.
#[put("/{user_id}")]
pub async fn update_user(
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let user = service.update_user(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 삭제 핸들러
#[delete("/{user_id}")]
pub async fn delete_user(user_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    service.delete_user(&user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
