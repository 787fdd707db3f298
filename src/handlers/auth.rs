//! # 인증 HTTP 핸들러
//!
//! 회원가입, 로그인, 소셜 로그인, 비밀번호 재설정 엔드포인트를 처리합니다.
//! 모두 공개 엔드포인트이며 Bearer 토큰이 필요하지 않습니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users/register` | 이메일/비밀번호 회원가입 | 201 Created |
//! | `POST` | `/users/login` | 로그인 (비밀번호 또는 토큰) | 200 OK |
//! | `POST` | `/users/social` | 소셜 로그인 | 200 OK |
//! | `POST` | `/users/password-reset` | 비밀번호 재설정 메일 요청 | 200 OK |

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::users::request::{
    LoginRequest, PasswordResetRequest, RegisterRequest, SocialLoginRequest,
};
use crate::errors::errors::AppError;
use crate::services::users::user_service::UserService;

/// 회원가입 핸들러
///
/// # 엔드포인트
///
/// `POST /users/register`
///
/// # 응답
///
/// - **201 Created**: 생성된 사용자 정보와 성공 메시지
/// - **409 Conflict**: 이미 등록된 이메일
/// - **400 Bad Request**: 입력 검증 실패
#[post("/register")]
pub async fn register(payload: web::Json<RegisterRequest>) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let response = service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 로그인 핸들러
///
/// 이메일/비밀번호 또는 ID 토큰 중 하나로 로그인합니다.
///
/// # 엔드포인트
///
/// `POST /users/login`
///
/// # 응답
///
/// - **200 OK**: 사용자 정보와 토큰 쌍
/// - **401 Unauthorized**: 잘못된 자격 증명
#[post("/login")]
pub async fn login(payload: web::Json<LoginRequest>) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let response = service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 소셜 로그인 핸들러
///
/// OAuth 공급자에서 발급받은 액세스 토큰으로 로그인합니다.
/// 처음 로그인하는 사용자는 프로필이 자동으로 생성됩니다.
///
/// # 엔드포인트
///
/// `POST /users/social`
#[post("/social")]
pub async fn social_login(
    payload: web::Json<SocialLoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let response = service.social_login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 비밀번호 재설정 요청 핸들러
///
/// 등록 여부와 관계없이 항상 같은 응답을 반환하여
/// 계정 존재 여부를 노출하지 않습니다.
///
/// # 엔드포인트
///
/// `POST /users/password-reset`
#[post("/password-reset")]
pub async fn request_password_reset(
    payload: web::Json<PasswordResetRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    service.request_password_reset(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "재설정 안내 메일이 발송되었습니다"
    })))
}
