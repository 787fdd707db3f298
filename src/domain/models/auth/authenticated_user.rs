//! 인증된 사용자 모델
//!
//! 인증 미들웨어가 Bearer 토큰 검증 후 요청 확장(extensions)에 저장하는
//! 경량 사용자 정보입니다. 핸들러에서는 `FromRequest` 추출기로 꺼내 사용합니다.

use actix_web::{dev::Payload, error::ErrorUnauthorized, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::{Deserialize, Serialize};

/// 인증된 사용자 정보
///
/// 토큰 검증과 프로필 조회가 끝난 후의 최소 식별 정보만 담습니다.
/// 전체 프로필이 필요하면 `user_id`로 UserService에서 조회합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 프로필 문서의 ID (hex 문자열)
    pub user_id: String,
    /// 인증 제공자에서의 계정 UID
    pub provider_uid: String,
    /// 사용자 이메일
    pub email: String,
}

impl AuthenticatedUser {
    pub fn new(user_id: String, provider_uid: String, email: String) -> Self {
        Self {
            user_id,
            provider_uid,
            email,
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    /// 요청 확장에서 인증된 사용자 정보를 추출합니다.
    ///
    /// AuthMiddleware가 먼저 실행되어 정보를 저장해 두어야 하며,
    /// 없는 경우 401 응답을 반환합니다.
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(ErrorUnauthorized("인증되지 않은 요청입니다"))),
        }
    }
}

/// 선택적 인증 사용자 추출기
///
/// 인증이 선택인 엔드포인트에서 사용합니다.
/// 토큰이 없거나 유효하지 않아도 요청은 통과하며 `None`이 됩니다.
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_user_new() {
        let user = AuthenticatedUser::new(
            "507f1f77bcf86cd799439011".to_string(),
            "uid-123".to_string(),
            "hong@example.com".to_string(),
        );

        assert_eq!(user.user_id, "507f1f77bcf86cd799439011");
        assert_eq!(user.provider_uid, "uid-123");
        assert_eq!(user.email, "hong@example.com");
    }
}
