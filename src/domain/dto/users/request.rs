//! 사용자 요청 DTO
//!
//! 사용자 등록, 로그인, 프로필 관리 엔드포인트의 요청 본문을 정의합니다.
//! `validator` derive를 통한 선언적 입력 검증을 사용합니다.

use serde::Deserialize;
use validator::Validate;
use crate::utils::string_utils::deserialize_optional_string;

/// 회원가입 요청
///
/// 비밀번호는 외부 인증 제공자에만 전달되며, 서버에 저장되지 않습니다.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50, message = "성은 1-50자 사이여야 합니다"))]
    pub last_name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub password: String,

    #[validate(range(min = 1, max = 120, message = "나이는 1-120 사이여야 합니다"))]
    pub age: Option<u32>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub photo_url: Option<String>,
}

/// 로그인 요청
///
/// 두 가지 방식 중 하나를 사용합니다:
/// - `id_token`: 클라이언트가 이미 보유한 인증 제공자 ID 토큰으로 로그인
/// - `email` + `password`: 인증 제공자 비밀번호 로그인
///
/// 어느 쪽도 완전하지 않으면 서비스 계층에서 ValidationError가 발생합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    pub password: Option<String>,

    pub id_token: Option<String>,
}

impl LoginRequest {
    /// 토큰 로그인 요청인지 확인
    pub fn is_token_login(&self) -> bool {
        self.id_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// 이메일/비밀번호 로그인 요청인지 확인
    pub fn is_password_login(&self) -> bool {
        self.email.is_some() && self.password.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// 소셜 로그인 요청
///
/// 클라이언트가 OAuth 공급자에서 직접 발급받은 액세스 토큰을 전달합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct SocialLoginRequest {
    #[validate(length(min = 1, message = "공급자 이름은 필수입니다"))]
    pub provider: String,

    #[validate(length(min = 1, message = "액세스 토큰은 필수입니다"))]
    pub access_token: String,
}

/// 비밀번호 재설정 요청
#[derive(Debug, Deserialize, Validate)]
pub struct PasswordResetRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}

/// 사용자 생성 요청 (관리용 CRUD)
///
/// 인증 계정 생성 없이 프로필 문서만 생성합니다.
/// 일반 가입 흐름은 [`RegisterRequest`]를 사용하세요.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50, message = "성은 1-50자 사이여야 합니다"))]
    pub last_name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "인증 제공자 UID는 필수입니다"))]
    pub provider_uid: String,

    #[validate(range(min = 1, max = 120, message = "나이는 1-120 사이여야 합니다"))]
    pub age: Option<u32>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub photo_url: Option<String>,
}

/// 사용자 수정 요청
///
/// 모든 필드가 선택이며, 제공된 필드만 `$set`으로 반영됩니다.
/// 수정할 필드가 하나도 없으면 ValidationError가 발생합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 50, message = "성은 1-50자 사이여야 합니다"))]
    pub last_name: Option<String>,

    #[validate(range(min = 1, max = 120, message = "나이는 1-120 사이여야 합니다"))]
    pub age: Option<u32>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub photo_url: Option<String>,

    /// 접속 상태 ("online" 또는 "offline")
    pub status: Option<String>,
}

impl UpdateUserRequest {
    /// 수정할 필드가 하나라도 있는지 확인
    pub fn has_changes(&self) -> bool {
        self.first_name.is_some()
            || self.last_name.is_some()
            || self.age.is_some()
            || self.photo_url.is_some()
            || self.status.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            first_name: "길동".to_string(),
            last_name: "홍".to_string(),
            email: "hong@example.com".to_string(),
            password: "securepass1".to_string(),
            age: Some(29),
            photo_url: None,
        };
        assert!(valid.validate().is_ok());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            ..valid_request()
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterRequest {
            password: "short".to_string(),
            ..valid_request()
        };
        assert!(short_password.validate().is_err());
    }

    fn valid_request() -> RegisterRequest {
        RegisterRequest {
            first_name: "길동".to_string(),
            last_name: "홍".to_string(),
            email: "hong@example.com".to_string(),
            password: "securepass1".to_string(),
            age: None,
            photo_url: None,
        }
    }

    #[test]
    fn test_login_request_mode_detection() {
        let token_login = LoginRequest {
            email: None,
            password: None,
            id_token: Some("token-abc".to_string()),
        };
        assert!(token_login.is_token_login());
        assert!(!token_login.is_password_login());

        let password_login = LoginRequest {
            email: Some("hong@example.com".to_string()),
            password: Some("securepass1".to_string()),
            id_token: None,
        };
        assert!(password_login.is_password_login());
        assert!(!password_login.is_token_login());

        let empty = LoginRequest {
            email: None,
            password: None,
            id_token: None,
        };
        assert!(!empty.is_token_login());
        assert!(!empty.is_password_login());
    }

    #[test]
    fn test_update_request_has_changes() {
        let empty: UpdateUserRequest = serde_json::from_str("{}").unwrap();
        assert!(!empty.has_changes());

        let with_name: UpdateUserRequest =
            serde_json::from_str(r#"{"first_name": "길동"}"#).unwrap();
        assert!(with_name.has_changes());
    }
}
