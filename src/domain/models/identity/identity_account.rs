//! 인증 제공자 응답 모델
//!
//! 외부 인증 제공자 REST API의 응답 본문을 표현하는 역직렬화 전용 모델들입니다.
//! 필드 이름은 인증 제공자의 camelCase 규약을 따릅니다.

use serde::Deserialize;

/// 계정 생성 / 로그인 응답 (`accounts:signUp`, `accounts:signInWithPassword`, `accounts:signInWithIdp`)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityAccount {
    /// 인증 제공자에서의 계정 UID
    pub local_id: String,
    /// 계정 이메일
    #[serde(default)]
    pub email: String,
    /// 발급된 ID 토큰 (Bearer 토큰으로 사용)
    pub id_token: String,
    /// 리프레시 토큰
    #[serde(default)]
    pub refresh_token: String,
    /// ID 토큰 만료 시간 (초 단위 문자열, 예: "3600")
    #[serde(default)]
    pub expires_in: Option<String>,
    /// 표시 이름 (소셜 로그인 시 제공)
    #[serde(default)]
    pub display_name: Option<String>,
    /// 프로필 사진 URL (소셜 로그인 시 제공)
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl IdentityAccount {
    /// 만료 시간을 초 단위 정수로 반환합니다.
    ///
    /// 인증 제공자는 만료 시간을 문자열로 반환하므로 파싱하며,
    /// 누락되거나 파싱에 실패하면 기본값 3600초를 사용합니다.
    pub fn expires_in_seconds(&self) -> i64 {
        self.expires_in
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3600)
    }
}

/// 토큰 검증 응답 (`accounts:lookup`)
#[derive(Debug, Clone, Deserialize)]
pub struct LookupResponse {
    /// 토큰에 해당하는 계정 목록 (유효한 토큰이면 정확히 1개)
    #[serde(default)]
    pub users: Vec<IdentityUserInfo>,
}

/// `accounts:lookup` 응답의 계정 정보
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityUserInfo {
    /// 인증 제공자에서의 계정 UID
    pub local_id: String,
    /// 계정 이메일
    #[serde(default)]
    pub email: String,
    /// 이메일 인증 완료 여부
    #[serde(default)]
    pub email_verified: bool,
    /// 표시 이름
    #[serde(default)]
    pub display_name: Option<String>,
    /// 프로필 사진 URL
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// 비밀번호 재설정 링크 발급 응답 (`accounts:sendOobCode`)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OobCodeResponse {
    /// 발급된 재설정 링크
    #[serde(default)]
    pub oob_link: Option<String>,
    /// 대상 이메일
    #[serde(default)]
    pub email: Option<String>,
}

/// 인증 제공자 에러 응답 본문
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityErrorResponse {
    pub error: IdentityErrorBody,
}

/// 인증 제공자 에러 상세
///
/// `message`는 `EMAIL_EXISTS`, `INVALID_LOGIN_CREDENTIALS` 같은
/// 대문자 에러 코드 문자열입니다.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityErrorBody {
    #[serde(default)]
    pub code: Option<i64>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_account_deserialization() {
        let json = r#"{
            "localId": "uid-123",
            "email": "hong@example.com",
            "idToken": "token-abc",
            "refreshToken": "refresh-xyz",
            "expiresIn": "3600"
        }"#;

        let account: IdentityAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.local_id, "uid-123");
        assert_eq!(account.expires_in_seconds(), 3600);
        assert!(account.display_name.is_none());
    }

    #[test]
    fn test_expires_in_fallback() {
        let json = r#"{"localId": "uid-1", "idToken": "t"}"#;
        let account: IdentityAccount = serde_json::from_str(json).unwrap();

        assert_eq!(account.expires_in_seconds(), 3600);
    }

    #[test]
    fn test_lookup_response_deserialization() {
        let json = r#"{
            "users": [
                {"localId": "uid-9", "email": "a@b.com", "emailVerified": true}
            ]
        }"#;

        let lookup: LookupResponse = serde_json::from_str(json).unwrap();
        assert_eq!(lookup.users.len(), 1);
        assert!(lookup.users[0].email_verified);
    }

    #[test]
    fn test_error_response_deserialization() {
        let json = r#"{"error": {"code": 400, "message": "EMAIL_EXISTS"}}"#;
        let error: IdentityErrorResponse = serde_json::from_str(json).unwrap();

        assert_eq!(error.error.message, "EMAIL_EXISTS");
    }
}
