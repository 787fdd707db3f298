//! # Identity Provider Configuration Module
//!
//! 외부 인증 제공자(Identity Provider) 연동 설정을 관리하는 모듈입니다.
//! 계정 생성, 로그인, 토큰 검증은 모두 외부 인증 제공자의 REST API에 위임되며,
//! 이 모듈은 해당 API 호출에 필요한 설정값을 중앙에서 제공합니다.
//!
//! ## 지원하는 인증 방식
//!
//! 1. **이메일/패스워드 인증**: 인증 제공자의 `accounts:signUp` / `accounts:signInWithPassword`
//! 2. **소셜 로그인**: Google, GitHub, Facebook 계정을 통한 `accounts:signInWithIdp`
//! 3. **ID 토큰 검증**: `accounts:lookup`을 통한 Bearer 토큰 검증
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export IDENTITY_API_KEY="your-identity-api-key"
//! export IDENTITY_BASE_URI="https://identitytoolkit.googleapis.com/v1"
//! export IDENTITY_REQUEST_URI="http://localhost:8080"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{IdentityConfig, OAuthProvider};
//!
//! let url = format!(
//!     "{}/accounts:lookup?key={}",
//!     IdentityConfig::base_uri(),
//!     IdentityConfig::api_key()
//! );
//!
//! let provider = OAuthProvider::from_str("google")?;
//! assert_eq!(provider.provider_id(), "google.com");
//! ```

use std::env;

/// 외부 인증 제공자 REST API 설정을 관리하는 구조체
///
/// 인증 제공자 콘솔에서 발급받은 API 키와 엔드포인트 정보를 관리합니다.
/// 모든 인증 요청은 `{base_uri}/accounts:{operation}?key={api_key}` 형태로 전송됩니다.
///
/// ## 보안 고려사항
///
/// - `api_key`는 서버 사이드에서만 사용하며 로그에 출력하지 마세요
/// - 프로덕션에서는 HTTPS 엔드포인트만 사용하세요
pub struct IdentityConfig;

impl IdentityConfig {
    /// 인증 제공자 API 키를 반환합니다.
    ///
    /// 인증 제공자 콘솔에서 발급받은 프로젝트 API 키입니다.
    /// 모든 계정 관련 REST 호출의 쿼리 파라미터로 전달됩니다.
    ///
    /// # Panics
    ///
    /// `IDENTITY_API_KEY` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    ///
    /// # 환경 변수
    ///
    /// ```bash
    /// export IDENTITY_API_KEY="AIzaSy..."
    /// ```
    pub fn api_key() -> String {
        env::var("IDENTITY_API_KEY")
            .expect("IDENTITY_API_KEY must be set")
    }

    /// 인증 제공자 REST API의 베이스 URI를 반환합니다.
    ///
    /// 일반적으로 변경할 필요가 없으므로 기본값을 제공합니다.
    /// 통합 테스트에서 에뮬레이터 주소로 교체할 때 사용할 수 있습니다.
    ///
    /// # 기본값
    ///
    /// `https://identitytoolkit.googleapis.com/v1`
    pub fn base_uri() -> String {
        env::var("IDENTITY_BASE_URI")
            .unwrap_or_else(|_| "https://identitytoolkit.googleapis.com/v1".to_string())
    }

    /// 소셜 로그인 요청에 사용할 requestUri 값을 반환합니다.
    ///
    /// `accounts:signInWithIdp` 호출 시 인증 제공자가 요구하는
    /// 요청 출처 URI입니다. 실제 리디렉션은 발생하지 않습니다.
    ///
    /// # 기본값
    ///
    /// `http://localhost:8080` (개발 환경용)
    pub fn request_uri() -> String {
        env::var("IDENTITY_REQUEST_URI")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
    }
}

/// 지원하는 소셜 로그인 공급자를 나타내는 열거형
///
/// 다양한 OAuth 공급자를 추상화하여 통일된 인터페이스를 제공합니다.
/// 인증 제공자의 `providerId` 규약(`google.com` 등)과의 매핑을 담당합니다.
///
/// ## 직렬화 지원
///
/// `serde`를 통해 JSON 직렬화/역직렬화를 지원하므로,
/// 사용자 프로필의 공급자 목록 저장에 그대로 사용됩니다.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    /// Google 계정을 통한 소셜 로그인
    Google,

    /// GitHub 계정을 통한 소셜 로그인
    ///
    /// 개발자 대상 서비스에 적합한 GitHub 계정 기반 인증입니다.
    GitHub,

    /// Facebook 계정을 통한 소셜 로그인
    Facebook,
}

impl OAuthProvider {
    /// 문자열에서 OAuthProvider를 생성합니다.
    ///
    /// API 요청에서 문자열로 전달된 공급자 이름을
    /// 적절한 열거형 값으로 변환합니다.
    ///
    /// # 인자
    ///
    /// * `s` - 공급자 이름 (대소문자 무관)
    ///
    /// # 반환값
    ///
    /// * `Ok(OAuthProvider)` - 유효한 공급자인 경우
    /// * `Err(String)` - 지원하지 않는 공급자인 경우
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// use crate::config::OAuthProvider;
    ///
    /// let provider = OAuthProvider::from_str("google")?;
    /// assert_eq!(provider, OAuthProvider::Google);
    ///
    /// let invalid = OAuthProvider::from_str("twitter");
    /// assert!(invalid.is_err());
    /// ```
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "google" => Ok(OAuthProvider::Google),
            "github" => Ok(OAuthProvider::GitHub),
            "facebook" => Ok(OAuthProvider::Facebook),
            _ => Err(format!("Unsupported oauth provider: {}", s)),
        }
    }

    /// OAuthProvider를 문자열로 변환합니다.
    ///
    /// # 반환값
    ///
    /// 해당 공급자의 소문자 문자열 표현
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::GitHub => "github",
            OAuthProvider::Facebook => "facebook",
        }
    }

    /// 인증 제공자 API가 요구하는 providerId 값을 반환합니다.
    ///
    /// `accounts:signInWithIdp` 호출의 `postBody`에 포함됩니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// use crate::config::OAuthProvider;
    ///
    /// assert_eq!(OAuthProvider::Google.provider_id(), "google.com");
    /// ```
    pub fn provider_id(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google.com",
            OAuthProvider::GitHub => "github.com",
            OAuthProvider::Facebook => "facebook.com",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oauth_provider_from_string() {
        assert_eq!(OAuthProvider::from_str("google").unwrap(), OAuthProvider::Google);
        assert_eq!(OAuthProvider::from_str("github").unwrap(), OAuthProvider::GitHub);
        assert_eq!(OAuthProvider::from_str("facebook").unwrap(), OAuthProvider::Facebook);

        // 대소문자 무관 테스트
        assert_eq!(OAuthProvider::from_str("GOOGLE").unwrap(), OAuthProvider::Google);
        assert_eq!(OAuthProvider::from_str("GitHub").unwrap(), OAuthProvider::GitHub);

        // 지원하지 않는 공급자 테스트
        assert!(OAuthProvider::from_str("twitter").is_err());
        assert!(OAuthProvider::from_str("unknown").is_err());
    }

    #[test]
    fn test_oauth_provider_as_string() {
        assert_eq!(OAuthProvider::Google.as_str(), "google");
        assert_eq!(OAuthProvider::GitHub.as_str(), "github");
        assert_eq!(OAuthProvider::Facebook.as_str(), "facebook");
    }

    #[test]
    fn test_oauth_provider_id_mapping() {
        assert_eq!(OAuthProvider::Google.provider_id(), "google.com");
        assert_eq!(OAuthProvider::GitHub.provider_id(), "github.com");
        assert_eq!(OAuthProvider::Facebook.provider_id(), "facebook.com");
    }

    #[test]
    fn test_oauth_provider_roundtrip() {
        // 문자열 → OAuthProvider → 문자열 변환 테스트
        let providers = ["google", "github", "facebook"];

        for &provider_str in &providers {
            let provider = OAuthProvider::from_str(provider_str).unwrap();
            assert_eq!(provider.as_str(), provider_str);
        }
    }

    #[test]
    fn test_oauth_provider_serialization() {
        // JSON 직렬화/역직렬화 테스트
        let provider = OAuthProvider::Google;
        let json = serde_json::to_string(&provider).unwrap();
        assert_eq!(json, "\"google\"");

        let deserialized: OAuthProvider = serde_json::from_str(&json).unwrap();
        assert_eq!(provider, deserialized);
    }
}
