//! # 사용자 관리 서비스 구현
//!
//! 회원가입, 로그인, 소셜 로그인, 비밀번호 재설정, 프로필 관리의
//! 핵심 비즈니스 로직을 구현합니다.
//!
//! ## 인증 아키텍처
//!
//! 자격 증명(비밀번호, 토큰)은 외부 인증 제공자가 관리하고,
//! 이 서버는 인증 제공자 UID(`provider_uid`)로 연결된 프로필 문서만 관리합니다.
//!
//! ```text
//! 회원가입:  중복 확인 → 인증 제공자 계정 생성 → 프로필 저장
//!                                    │
//!                          프로필 저장 실패 시
//!                                    ▼
//!                          인증 제공자 계정 삭제 (보상 트랜잭션)
//! ```
//!
//! 프로필 저장이 실패하면 방금 만든 인증 제공자 계정을 best-effort로
//! 삭제하여 "로그인은 되는데 프로필이 없는" 고아 계정을 방지합니다.

use std::sync::Arc;

use mongodb::bson::{doc, Bson, Document};
use singleton_macro::service;

use crate::{
    config::identity_config::OAuthProvider,
    domain::{
        dto::users::{
            request::{
                CreateUserRequest, LoginRequest, PasswordResetRequest, RegisterRequest,
                SocialLoginRequest, UpdateUserRequest,
            },
            response::{LoginResponse, RegisterResponse, UserResponse},
        },
        entities::users::{User, UserStatus},
        models::identity::IdentityAccount,
    },
    errors::errors::AppError,
    repositories::{dao::CrudDao, users::user_repo::UserRepository},
    services::{identity::identity_service::IdentityService, mail::mail_service::MailService},
};

/// 사용자 관리 비즈니스 로직 서비스
#[service(name = "user")]
pub struct UserService {
    /// 사용자 프로필 리포지토리 (자동 주입)
    user_repo: Arc<UserRepository>,

    /// 외부 인증 제공자 클라이언트 (자동 주입)
    identity: Arc<IdentityService>,

    /// 메일 발송 서비스 (자동 주입)
    mail: Arc<MailService>,
}

impl UserService {
    /// 이메일/비밀번호 회원가입
    ///
    /// # 처리 과정
    ///
    /// 1. 이메일 중복 확인 (중복 시 ConflictError)
    /// 2. 인증 제공자에 계정 생성 (비밀번호는 여기에만 전달됨)
    /// 3. 발급받은 UID로 프로필 문서 저장
    /// 4. 프로필 저장 실패 시 인증 제공자 계정 삭제로 롤백
    ///
    /// # 반환값
    ///
    /// * `Ok(RegisterResponse)` - 생성된 사용자 정보와 성공 메시지
    /// * `Err(AppError::ConflictError)` - 이미 등록된 이메일
    pub async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, AppError> {
        // 인증 제공자 호출 전에 프로필 중복을 먼저 확인
        if self.user_repo.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 등록된 이메일입니다".to_string(),
            ));
        }

        let account = self
            .identity
            .create_account(&request.email, &request.password)
            .await?;

        let user = User::new_local(
            request.first_name,
            request.last_name,
            request.email,
            account.local_id.clone(),
            request.age,
            request.photo_url,
        );

        let created_user = match self.user_repo.create(user).await {
            Ok(user) => user,
            Err(e) => {
                // 보상 트랜잭션: 고아 인증 계정이 남지 않도록 삭제 시도
                if let Err(rollback_err) = self.identity.delete_account(&account.id_token).await {
                    log::warn!(
                        "❌ 회원가입 롤백 실패 - 인증 제공자 계정 삭제 불가 (uid: {}): {}",
                        account.local_id,
                        rollback_err
                    );
                } else {
                    log::info!("회원가입 롤백 완료: 인증 제공자 계정 삭제 (uid: {})", account.local_id);
                }
                return Err(e);
            }
        };

        log::info!("✅ 새 사용자 등록: {}", created_user.email);

        Ok(RegisterResponse {
            user: UserResponse::from(created_user),
            message: "회원가입이 완료되었습니다".to_string(),
        })
    }

    /// 로그인
    ///
    /// 두 가지 방식을 지원합니다:
    ///
    /// - **토큰 로그인**: 클라이언트가 보유한 ID 토큰을 검증
    /// - **비밀번호 로그인**: 이메일/비밀번호를 인증 제공자에 전달
    ///
    /// 성공 시 접속 상태를 `online`으로 전환하고 마지막 로그인 시각을 기록합니다.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        if request.is_token_login() {
            let id_token = request.id_token.as_deref().unwrap_or_default();
            let info = self.identity.verify_id_token(id_token).await?;

            let user = self.resolve_profile(&info.local_id).await?;
            let user = self.mark_online(&user).await?;

            // 토큰 로그인은 기존 토큰을 그대로 사용하므로 리프레시 토큰이 없음
            return Ok(LoginResponse::new(
                UserResponse::from(user),
                id_token.to_string(),
                String::new(),
                3600,
            ));
        }

        if request.is_password_login() {
            let email = request.email.as_deref().unwrap_or_default();
            let password = request.password.as_deref().unwrap_or_default();

            let account = self
                .identity
                .sign_in_with_password(email, password)
                .await?;

            let user = self.resolve_profile(&account.local_id).await?;
            let user = self.mark_online(&user).await?;

            log::info!("로그인 성공: {}", user.email);

            return Ok(Self::login_response(user, account));
        }

        Err(AppError::ValidationError(
            "이메일/비밀번호 또는 ID 토큰이 필요합니다".to_string(),
        ))
    }

    /// 소셜 로그인
    ///
    /// OAuth 공급자 액세스 토큰으로 인증 제공자에 로그인한 뒤,
    /// 내부 프로필을 다음 순서로 연결합니다:
    ///
    /// 1. 인증 제공자 UID로 기존 프로필 조회 → 재로그인
    /// 2. 이메일로 기존 프로필 조회 → 공급자 연결 추가 (계정 통합)
    /// 3. 둘 다 없으면 → 새 소셜 프로필 생성
    pub async fn social_login(&self, request: SocialLoginRequest) -> Result<LoginResponse, AppError> {
        let provider = OAuthProvider::from_str(&request.provider)
            .map_err(AppError::ValidationError)?;

        let account = self
            .identity
            .sign_in_with_provider(&provider, &request.access_token)
            .await?;

        // 1. UID 기준 재로그인
        if let Some(user) = self.user_repo.find_by_provider_uid(&account.local_id).await? {
            let user = if !user.has_provider(&provider) {
                self.user_repo
                    .add_oauth_provider(&user.id_string().unwrap_or_default(), provider.as_str())
                    .await?
                    .unwrap_or(user)
            } else {
                user
            };

            let user = self.mark_online(&user).await?;
            return Ok(Self::login_response(user, account));
        }

        // 2. 이메일 기준 계정 통합
        if !account.email.is_empty() {
            if let Some(user) = self.user_repo.find_by_email(&account.email).await? {
                let id = user.id_string().unwrap_or_default();

                let user = self
                    .user_repo
                    .add_oauth_provider(&id, provider.as_str())
                    .await?
                    .unwrap_or(user);
                let user = self.mark_online(&user).await?;

                log::info!("소셜 공급자 연결: {} + {}", user.email, provider.as_str());
                return Ok(Self::login_response(user, account));
            }
        }

        // 3. 신규 소셜 사용자
        let (first_name, last_name) = Self::split_display_name(
            account.display_name.as_deref(),
            &account.email,
        );

        let user = User::new_social(
            first_name,
            last_name,
            account.email.clone(),
            account.local_id.clone(),
            provider.clone(),
            account.photo_url.clone(),
        );

        let created_user = self.user_repo.create(user).await?;
        let created_user = self.mark_online(&created_user).await?;

        log::info!("✅ 새 소셜 사용자 등록: {} ({})", created_user.email, provider.as_str());

        Ok(Self::login_response(created_user, account))
    }

    /// 비밀번호 재설정 요청
    ///
    /// 인증 제공자에서 재설정 링크를 발급받아 자체 템플릿으로 메일을 보냅니다.
    /// 등록되지 않은 이메일이어도 성공으로 응답하여 계정 존재 여부를
    /// 노출하지 않습니다.
    pub async fn request_password_reset(
        &self,
        request: PasswordResetRequest,
    ) -> Result<(), AppError> {
        let Some(user) = self.user_repo.find_by_email(&request.email).await? else {
            log::info!("등록되지 않은 이메일의 재설정 요청: {}", request.email);
            return Ok(());
        };

        let oob = self.identity.send_password_reset(&request.email).await?;

        let reset_link = oob.oob_link.ok_or_else(|| {
            AppError::ExternalServiceError("재설정 링크를 발급받지 못했습니다".to_string())
        })?;

        self.mail
            .send_password_reset(&request.email, &user.full_name(), &reset_link)
            .await?;

        Ok(())
    }

    /// 전체 사용자 목록 조회
    pub async fn list_users(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.user_repo.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// ID로 사용자 조회
    pub async fn get_user_by_id(&self, id: &str) -> Result<UserResponse, AppError> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 프로필 문서 직접 생성 (관리용)
    ///
    /// 인증 제공자 계정 생성 없이 이미 발급된 UID로 프로필만 만듭니다.
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<UserResponse, AppError> {
        let user = User::new_local(
            request.first_name,
            request.last_name,
            request.email,
            request.provider_uid,
            request.age,
            request.photo_url,
        );

        let created_user = self.user_repo.create(user).await?;

        Ok(UserResponse::from(created_user))
    }

    /// 사용자 정보 수정
    ///
    /// 제공된 필드만 반영하며, 수정할 필드가 없으면 ValidationError를 반환합니다.
    pub async fn update_user(
        &self,
        id: &str,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, AppError> {
        if !request.has_changes() {
            return Err(AppError::ValidationError(
                "수정할 필드가 없습니다".to_string(),
            ));
        }

        let update_doc = Self::build_update_doc(request)?;

        let updated_user = self
            .user_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(updated_user))
    }

    /// 사용자 삭제
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.user_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }

    async fn resolve_profile(&self, provider_uid: &str) -> Result<User, AppError> {
        self.user_repo
            .find_by_provider_uid(provider_uid)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자 프로필을 찾을 수 없습니다".to_string()))
    }

    async fn mark_online(&self, user: &User) -> Result<User, AppError> {
        let Some(id) = user.id_string() else {
            return Ok(user.clone());
        };

        Ok(self
            .user_repo
            .set_status(&id, UserStatus::Online)
            .await?
            .unwrap_or_else(|| user.clone()))
    }

    fn login_response(user: User, account: IdentityAccount) -> LoginResponse {
        let expires_in = account.expires_in_seconds();

        LoginResponse::new(
            UserResponse::from(user),
            account.id_token,
            account.refresh_token,
            expires_in,
        )
    }

    /// 인증 제공자의 표시 이름을 이름/성으로 분리
    ///
    /// 표시 이름이 없으면 이메일의 로컬 파트를 이름으로 사용합니다.
    fn split_display_name(display_name: Option<&str>, email: &str) -> (String, String) {
        match display_name {
            Some(name) if !name.trim().is_empty() => {
                let mut parts = name.trim().split_whitespace();
                let first = parts.next().unwrap_or_default().to_string();
                let last = parts.collect::<Vec<_>>().join(" ");
                (first, last)
            }
            _ => {
                let local_part = email.split('@').next().unwrap_or("사용자");
                (local_part.to_string(), String::new())
            }
        }
    }

    fn build_update_doc(request: UpdateUserRequest) -> Result<Document, AppError> {
        let mut update_doc = doc! {};

        if let Some(first_name) = request.first_name {
            update_doc.insert("first_name", first_name);
        }
        if let Some(last_name) = request.last_name {
            update_doc.insert("last_name", last_name);
        }
        if let Some(age) = request.age {
            update_doc.insert("age", Bson::Int64(age as i64));
        }
        if let Some(photo_url) = request.photo_url {
            update_doc.insert("photo_url", photo_url);
        }
        if let Some(status) = request.status {
            match status.as_str() {
                "online" | "offline" => {
                    update_doc.insert("status", status);
                }
                _ => {
                    return Err(AppError::ValidationError(
                        "상태는 online 또는 offline이어야 합니다".to_string(),
                    ));
                }
            }
        }

        Ok(update_doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_display_name_two_parts() {
        let (first, last) = UserService::split_display_name(Some("길동 홍"), "hong@example.com");
        assert_eq!(first, "길동");
        assert_eq!(last, "홍");
    }

    #[test]
    fn test_split_display_name_falls_back_to_email() {
        let (first, last) = UserService::split_display_name(None, "hong@example.com");
        assert_eq!(first, "hong");
        assert!(last.is_empty());
    }

    #[test]
    fn test_build_update_doc_rejects_unknown_status() {
        let request: UpdateUserRequest =
            serde_json::from_str(r#"{"status": "away"}"#).unwrap();

        let result = UserService::build_update_doc(request);
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_build_update_doc_sets_only_provided_fields() {
        let request: UpdateUserRequest =
            serde_json::from_str(r#"{"first_name": "길동", "age": 30}"#).unwrap();

        let update_doc = UserService::build_update_doc(request).unwrap();
        assert!(update_doc.contains_key("first_name"));
        assert!(update_doc.contains_key("age"));
        assert!(!update_doc.contains_key("last_name"));
    }
}
