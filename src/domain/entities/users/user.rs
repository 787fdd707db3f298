//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 이메일/패스워드 가입과 소셜 로그인을 모두 지원하는 통합된 사용자 모델을 제공합니다.
//! 비밀번호는 외부 인증 제공자에만 저장되며, 이 엔티티에는 포함되지 않습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::OAuthProvider;

/// 사용자 접속 상태
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// 접속 중
    Online,
    /// 미접속
    Offline,
}

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 인증 자격 증명은 외부 인증 제공자가 관리하며, 이 문서는
/// `provider_uid`로 인증 제공자 계정과 연결된 프로필 정보만 담습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 이름
    pub first_name: String,
    /// 성
    pub last_name: String,
    /// 나이
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// 프로필 사진 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// 인증 제공자에서의 계정 UID
    pub provider_uid: String,
    /// 연결된 소셜 로그인 공급자 목록 (이메일/패스워드 전용 사용자는 빈 배열)
    #[serde(default)]
    pub oauth_providers: Vec<OAuthProvider>,
    /// 접속 상태
    pub status: UserStatus,
    /// 마지막 로그인 시간
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 이메일/패스워드 사용자 생성
    ///
    /// 인증 제공자에 계정이 생성된 후 호출되며, 발급받은 `provider_uid`로
    /// 프로필 문서를 초기화합니다.
    pub fn new_local(
        first_name: String,
        last_name: String,
        email: String,
        provider_uid: String,
        age: Option<u32>,
        photo_url: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            first_name,
            last_name,
            age,
            photo_url,
            provider_uid,
            oauth_providers: Vec::new(),
            status: UserStatus::Offline,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 새 소셜 로그인 사용자 생성
    ///
    /// 소셜 로그인으로 처음 들어온 사용자의 프로필을 생성합니다.
    /// 공급자 목록에 해당 공급자가 포함된 상태로 시작됩니다.
    pub fn new_social(
        first_name: String,
        last_name: String,
        email: String,
        provider_uid: String,
        provider: OAuthProvider,
        photo_url: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            first_name,
            last_name,
            age: None,
            photo_url,
            provider_uid,
            oauth_providers: vec![provider],
            status: UserStatus::Offline,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 전체 이름 반환
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// 특정 소셜 공급자와 연결되어 있는지 확인
    pub fn has_provider(&self, provider: &OAuthProvider) -> bool {
        self.oauth_providers.contains(provider)
    }

    /// 소셜 로그인으로 가입한 사용자인지 확인
    pub fn is_social_user(&self) -> bool {
        !self.oauth_providers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_local_user_defaults() {
        let user = User::new_local(
            "길동".to_string(),
            "홍".to_string(),
            "hong@example.com".to_string(),
            "uid-123".to_string(),
            Some(29),
            None,
        );

        assert!(user.id.is_none());
        assert_eq!(user.status, UserStatus::Offline);
        assert!(user.oauth_providers.is_empty());
        assert!(!user.is_social_user());
        assert_eq!(user.full_name(), "길동 홍");
    }

    #[test]
    fn test_new_social_user_has_provider() {
        let user = User::new_social(
            "길동".to_string(),
            "홍".to_string(),
            "hong@example.com".to_string(),
            "uid-456".to_string(),
            OAuthProvider::Google,
            Some("https://example.com/photo.jpg".to_string()),
        );

        assert!(user.is_social_user());
        assert!(user.has_provider(&OAuthProvider::Google));
        assert!(!user.has_provider(&OAuthProvider::GitHub));
    }
}
