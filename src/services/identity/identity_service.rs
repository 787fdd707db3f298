//! # 외부 인증 제공자 클라이언트 서비스
//!
//! 인증 자격 증명의 전체 생명주기를 외부 인증 제공자 REST API에 위임합니다.
//! 비밀번호는 이 서버에 저장되지 않으며, 계정 생성·로그인·토큰 검증·삭제가
//! 모두 인증 제공자의 `accounts:*` 엔드포인트를 통해 처리됩니다.
//!
//! ## 사용하는 엔드포인트
//!
//! | 용도 | 엔드포인트 |
//! |------|------------|
//! | 계정 생성 | `accounts:signUp` |
//! | 비밀번호 로그인 | `accounts:signInWithPassword` |
//! | 토큰 검증 | `accounts:lookup` |
//! | 소셜 로그인 | `accounts:signInWithIdp` |
//! | 계정 삭제 | `accounts:delete` |
//! | 비밀번호 재설정 링크 | `accounts:sendOobCode` |
//!
//! ## 에러 코드 매핑
//!
//! 인증 제공자의 대문자 에러 코드를 도메인 에러로 변환합니다:
//!
//! - `EMAIL_EXISTS` → ConflictError (409)
//! - `INVALID_LOGIN_CREDENTIALS` 계열 → AuthenticationError (401)
//! - `WEAK_PASSWORD` → ValidationError (400)
//! - 그 외 → ExternalServiceError (500)

use serde_json::{json, Value};
use singleton_macro::service;

use crate::{
    config::identity_config::{IdentityConfig, OAuthProvider},
    domain::models::identity::{
        IdentityAccount, IdentityErrorResponse, IdentityUserInfo, LookupResponse, OobCodeResponse,
    },
    errors::errors::AppError,
};

/// 외부 인증 제공자 REST 클라이언트
///
/// 상태를 가지지 않으며, 요청마다 reqwest 클라이언트를 생성합니다.
#[service(name = "identity")]
pub struct IdentityService {}

impl IdentityService {
    fn endpoint(action: &str) -> String {
        format!(
            "{}/accounts:{}?key={}",
            IdentityConfig::base_uri(),
            action,
            IdentityConfig::api_key()
        )
    }

    /// 인증 제공자 에러 응답을 도메인 에러로 변환
    ///
    /// 에러 메시지는 `EMAIL_EXISTS:The email address is...` 처럼
    /// 코드 뒤에 설명이 붙을 수 있으므로 접두사로 매칭합니다.
    fn map_provider_error(body: &str) -> AppError {
        let code = serde_json::from_str::<IdentityErrorResponse>(body)
            .map(|e| e.error.message)
            .unwrap_or_default();

        let code_prefix = code.split(':').next().unwrap_or("").trim();

        match code_prefix {
            "EMAIL_EXISTS" => AppError::ConflictError("이미 등록된 이메일입니다".to_string()),
            "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
                AppError::AuthenticationError("잘못된 이메일 또는 비밀번호입니다".to_string())
            }
            "INVALID_ID_TOKEN" | "TOKEN_EXPIRED" | "USER_NOT_FOUND" => {
                AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
            }
            "USER_DISABLED" => {
                AppError::AuthenticationError("비활성화된 계정입니다".to_string())
            }
            "WEAK_PASSWORD" => {
                AppError::ValidationError("비밀번호가 너무 약합니다".to_string())
            }
            _ => AppError::ExternalServiceError(format!("인증 제공자 오류: {}", code)),
        }
    }

    async fn post(&self, action: &str, body: Value) -> Result<reqwest::Response, AppError> {
        let client = reqwest::Client::new();

        let response = client
            .post(Self::endpoint(action))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("인증 제공자 요청 실패: {}", e))
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Self::map_provider_error(&error_text));
        }

        Ok(response)
    }

    /// 이메일/비밀번호 계정 생성
    ///
    /// # 반환값
    ///
    /// * `Ok(IdentityAccount)` - 생성된 계정 (UID와 토큰 포함)
    /// * `Err(AppError::ConflictError)` - 이미 등록된 이메일
    pub async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<IdentityAccount, AppError> {
        let response = self
            .post(
                "signUp",
                json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        response.json::<IdentityAccount>().await.map_err(|e| {
            AppError::ExternalServiceError(format!("인증 제공자 응답 파싱 실패: {}", e))
        })
    }

    /// 이메일/비밀번호 로그인
    ///
    /// # 반환값
    ///
    /// * `Ok(IdentityAccount)` - 발급된 토큰 쌍을 포함한 계정 정보
    /// * `Err(AppError::AuthenticationError)` - 잘못된 자격 증명
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<IdentityAccount, AppError> {
        let response = self
            .post(
                "signInWithPassword",
                json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        response.json::<IdentityAccount>().await.map_err(|e| {
            AppError::ExternalServiceError(format!("인증 제공자 응답 파싱 실패: {}", e))
        })
    }

    /// ID 토큰 검증
    ///
    /// Bearer 토큰의 유효성을 인증 제공자에 확인하고
    /// 토큰 소유자의 계정 정보를 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(IdentityUserInfo)` - 토큰 소유자 정보
    /// * `Err(AppError::AuthenticationError)` - 만료되었거나 위조된 토큰
    pub async fn verify_id_token(&self, id_token: &str) -> Result<IdentityUserInfo, AppError> {
        let response = self
            .post("lookup", json!({ "idToken": id_token }))
            .await?;

        let lookup = response.json::<LookupResponse>().await.map_err(|e| {
            AppError::ExternalServiceError(format!("인증 제공자 응답 파싱 실패: {}", e))
        })?;

        lookup
            .users
            .into_iter()
            .next()
            .ok_or_else(|| AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()))
    }

    /// 소셜 공급자 액세스 토큰으로 로그인
    ///
    /// 클라이언트가 OAuth 공급자에서 직접 발급받은 액세스 토큰을
    /// 인증 제공자에 전달하여 계정을 생성하거나 로그인합니다.
    pub async fn sign_in_with_provider(
        &self,
        provider: &OAuthProvider,
        access_token: &str,
    ) -> Result<IdentityAccount, AppError> {
        let post_body = format!(
            "access_token={}&providerId={}",
            urlencoding::encode(access_token),
            provider.provider_id()
        );

        let response = self
            .post(
                "signInWithIdp",
                json!({
                    "postBody": post_body,
                    "requestUri": IdentityConfig::request_uri(),
                    "returnIdpCredential": true,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        response.json::<IdentityAccount>().await.map_err(|e| {
            AppError::ExternalServiceError(format!("인증 제공자 응답 파싱 실패: {}", e))
        })
    }

    /// 인증 제공자 계정 삭제
    ///
    /// 회원가입 도중 프로필 저장이 실패했을 때 고아 계정이 남지 않도록
    /// 보상 트랜잭션으로 호출됩니다.
    pub async fn delete_account(&self, id_token: &str) -> Result<(), AppError> {
        self.post("delete", json!({ "idToken": id_token })).await?;
        Ok(())
    }

    /// 비밀번호 재설정 링크 발급
    ///
    /// `returnOobLink` 옵션으로 인증 제공자가 메일을 직접 보내는 대신
    /// 재설정 링크만 돌려받아, 자체 메일 템플릿으로 발송합니다.
    pub async fn send_password_reset(&self, email: &str) -> Result<OobCodeResponse, AppError> {
        let response = self
            .post(
                "sendOobCode",
                json!({
                    "requestType": "PASSWORD_RESET",
                    "email": email,
                    "returnOobLink": true,
                }),
            )
            .await?;

        response.json::<OobCodeResponse>().await.map_err(|e| {
            AppError::ExternalServiceError(format!("인증 제공자 응답 파싱 실패: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_email_exists_to_conflict() {
        let body = r#"{"error": {"code": 400, "message": "EMAIL_EXISTS"}}"#;
        let error = IdentityService::map_provider_error(body);
        assert!(matches!(error, AppError::ConflictError(_)));
    }

    #[test]
    fn test_map_invalid_credentials_to_authentication() {
        let body = r#"{"error": {"code": 400, "message": "INVALID_LOGIN_CREDENTIALS"}}"#;
        let error = IdentityService::map_provider_error(body);
        assert!(matches!(error, AppError::AuthenticationError(_)));
    }

    #[test]
    fn test_map_error_with_description_suffix() {
        let body = r#"{"error": {"code": 400, "message": "WEAK_PASSWORD : Password should be at least 6 characters"}}"#;
        let error = IdentityService::map_provider_error(body);
        assert!(matches!(error, AppError::ValidationError(_)));
    }

    #[test]
    fn test_map_unknown_code_to_external_service() {
        let body = r#"{"error": {"code": 500, "message": "SOMETHING_UNEXPECTED"}}"#;
        let error = IdentityService::map_provider_error(body);
        assert!(matches!(error, AppError::ExternalServiceError(_)));
    }
}
