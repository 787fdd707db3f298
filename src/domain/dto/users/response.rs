//! 사용자 응답 DTO

use mongodb::bson::DateTime;
use serde::Serialize;

use crate::domain::entities::users::{User, UserStatus};
use crate::config::identity_config::OAuthProvider;

/// 사용자 프로필 응답
///
/// 엔티티의 ObjectId는 16진수 문자열로 변환됩니다.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub age: Option<u32>,
    pub photo_url: Option<String>,
    pub oauth_providers: Vec<OAuthProvider>,
    pub status: UserStatus,
    pub last_login_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            age: user.age,
            photo_url: user.photo_url,
            oauth_providers: user.oauth_providers,
            status: user.status,
            last_login_at: user.last_login_at,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// 회원가입 응답
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: UserResponse,
    pub message: String,
}

/// 로그인 응답
///
/// 토큰은 외부 인증 제공자가 발급한 것을 그대로 전달합니다.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub token_type: String,
}

impl LoginResponse {
    pub fn new(user: UserResponse, access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            user,
            access_token,
            refresh_token,
            expires_in,
            token_type: "Bearer".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_user_response_from_entity() {
        let mut user = User::new_local(
            "길동".to_string(),
            "홍".to_string(),
            "hong@example.com".to_string(),
            "uid-123".to_string(),
            Some(29),
            None,
        );
        user.id = Some(ObjectId::new());

        let response = UserResponse::from(user.clone());
        assert_eq!(response.id, user.id.unwrap().to_hex());
        assert_eq!(response.email, "hong@example.com");
        assert!(response.oauth_providers.is_empty());
    }

    #[test]
    fn test_login_response_token_type() {
        let user = User::new_local(
            "길동".to_string(),
            "홍".to_string(),
            "hong@example.com".to_string(),
            "uid-123".to_string(),
            None,
            None,
        );
        let response = LoginResponse::new(
            UserResponse::from(user),
            "access".to_string(),
            "refresh".to_string(),
            3600,
        );

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 3600);
    }
}
