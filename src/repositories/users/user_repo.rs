//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.
//!
//! ## 캐싱 전략
//!
//! - **TTL**: 10분 (600초)
//! - **키 패턴**:
//!   - 개별 사용자: `user:{user_id}`
//!   - 이메일 조회: `user:email:{email}`
//! - 쓰기 연산 후 관련 캐시를 무효화합니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    options::IndexOptions,
    Collection, IndexModel,
};
use singleton_macro::repository;

use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::users::{User, UserStatus},
    errors::errors::AppError,
    repositories::dao::{CrudDao, MongoDocument},
};

/// 캐시 TTL (초)
const USER_CACHE_TTL: usize = 600;

impl MongoDocument for User {
    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }
}

/// 사용자 데이터 액세스 리포지토리
///
/// 표준 CRUD는 [`CrudDao`] 구현을 통해 제공하되,
/// 조회 빈도가 높은 연산(ID/이메일 조회)은 캐시 우선으로 재정의합니다.
#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

#[async_trait]
impl CrudDao for UserRepository {
    type Doc = User;

    fn typed_collection(&self) -> Collection<User> {
        self.collection::<User>()
    }

    /// 새 사용자 생성
    ///
    /// 이메일 중복을 사전에 확인하며, 중복 시 ConflictError를 반환합니다.
    /// 소셜 계정은 공급자가 이메일을 내려주지 않을 수 있으므로
    /// 빈 이메일은 중복 확인 대상에서 제외합니다.
    async fn create(&self, mut user: User) -> Result<User, AppError> {
        if !user.email.is_empty() && self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 사용 중인 이메일입니다".to_string(),
            ));
        }

        user.touch();

        let result = self
            .typed_collection()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(id) = result.inserted_id.as_object_id() {
            user.set_id(id);
        }

        let _ = self.invalidate_collection_cache(None).await;

        Ok(user)
    }

    /// ID로 사용자 조회 (캐시 우선)
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = self.cache_key(id);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self
            .typed_collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = user {
            let _ = self
                .redis
                .set_with_expiry(&cache_key, user, USER_CACHE_TTL)
                .await;
        }

        Ok(user)
    }

    /// 사용자 정보 업데이트
    ///
    /// 업데이트 후 ID 캐시와 이메일 캐시를 모두 무효화합니다.
    async fn update(&self, id: &str, mut update_doc: Document) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        update_doc.insert("updated_at", DateTime::now());

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated_user = self
            .typed_collection()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = updated_user {
            self.invalidate_user_cache(id, &user.email).await;
        }

        Ok(updated_user)
    }

    /// 사용자 삭제
    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        // 이메일 캐시 키를 알아내기 위해 삭제 전에 조회
        let existing = self.find_by_id(id).await?;

        let Some(user) = existing else {
            return Ok(false);
        };

        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self
            .typed_collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            self.invalidate_user_cache(id, &user.email).await;
            let _ = self.invalidate_collection_cache(None).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

impl UserRepository {
    fn email_cache_key(email: &str) -> String {
        format!("user:email:{}", email)
    }

    async fn invalidate_user_cache(&self, id: &str, email: &str) {
        let _ = self.invalidate_cache(id).await;
        if !email.is_empty() {
            let _ = self.redis.del(&Self::email_cache_key(email)).await;
        }
    }

    /// 이메일 주소로 사용자 조회 (캐시 우선)
    ///
    /// 빈 이메일(이메일 미제공 소셜 계정)은 항상 `None`을 반환합니다.
    ///
    /// # 캐싱 정책
    ///
    /// - **캐시 키**: `user:email:{email}`
    /// - **TTL**: 600초 (10분)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        if email.is_empty() {
            return Ok(None);
        }

        let cache_key = Self::email_cache_key(email);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self
            .typed_collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = user {
            let _ = self
                .redis
                .set_with_expiry(&cache_key, user, USER_CACHE_TTL)
                .await;
        }

        Ok(user)
    }

    /// 인증 제공자 UID로 사용자 조회
    ///
    /// 토큰 검증 후 인증 제공자 계정을 내부 프로필과 연결할 때 사용합니다.
    pub async fn find_by_provider_uid(&self, provider_uid: &str) -> Result<Option<User>, AppError> {
        self.typed_collection()
            .find_one(doc! { "provider_uid": provider_uid })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 접속 상태 변경
    ///
    /// 로그인 시 `online` 전환과 함께 마지막 로그인 시각을 기록합니다.
    pub async fn set_status(&self, id: &str, status: UserStatus) -> Result<Option<User>, AppError> {
        let mut update_doc = doc! {
            "status": if status == UserStatus::Online { "online" } else { "offline" },
        };

        if status == UserStatus::Online {
            update_doc.insert("last_login_at", DateTime::now());
        }

        self.update(id, update_doc).await
    }

    /// 소셜 공급자 연결 추가
    ///
    /// `$addToSet`으로 중복 없이 공급자를 추가하고 캐시를 무효화합니다.
    pub async fn add_oauth_provider(
        &self,
        id: &str,
        provider_name: &str,
    ) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated_user = self
            .typed_collection()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! {
                    "$addToSet": { "oauth_providers": provider_name },
                    "$set": { "updated_at": DateTime::now() },
                },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = updated_user {
            self.invalidate_user_cache(id, &user.email).await;
        }

        Ok(updated_user)
    }

    /// 사용자 컬렉션 인덱스 정의
    ///
    /// - `email` (partial unique): 중복 이메일 방지 및 이메일 조회 최적화.
    ///   이메일 미제공 소셜 계정(`email: ""`)은 유일성 검사에서 제외합니다.
    /// - `provider_uid` (unique): 인증 제공자 계정과 1:1 연결 보장
    /// - `created_at` (desc): 최근 가입자 조회 최적화
    fn index_models() -> Vec<IndexModel> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .partial_filter_expression(doc! { "email": { "$gt": "" } })
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let provider_uid_index = IndexModel::builder()
            .keys(doc! { "provider_uid": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("provider_uid_unique".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        vec![email_index, provider_uid_index, created_at_index]
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        self.typed_collection()
            .create_indexes(Self::index_models())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_index_ignores_empty_emails() {
        let models = UserRepository::index_models();
        let email_index = models
            .iter()
            .find(|m| m.keys == doc! { "email": 1 })
            .expect("email index missing");

        let options = email_index.options.as_ref().unwrap();
        assert_eq!(options.unique, Some(true));
        assert_eq!(
            options.partial_filter_expression,
            Some(doc! { "email": { "$gt": "" } })
        );
    }

    #[test]
    fn test_provider_uid_index_is_unique() {
        let models = UserRepository::index_models();
        let provider_index = models
            .iter()
            .find(|m| m.keys == doc! { "provider_uid": 1 })
            .expect("provider_uid index missing");

        assert_eq!(provider_index.options.as_ref().unwrap().unique, Some(true));
    }
}
