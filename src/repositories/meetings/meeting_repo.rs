//! # 미팅 리포지토리 구현
//!
//! 미팅 엔티티의 데이터 액세스 계층입니다.
//! 참가 코드 조회는 캐시 우선으로 처리하고, 참가자 목록 변경은
//! `$addToSet` / `$pull` 원자 연산으로 수행합니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    options::IndexOptions,
    Collection, IndexModel,
};
use singleton_macro::repository;

use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::meetings::Meeting,
    errors::errors::AppError,
    repositories::dao::{CrudDao, MongoDocument},
};

/// 참가 코드 캐시 TTL (초)
const CODE_CACHE_TTL: usize = 300;

impl MongoDocument for Meeting {
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

/// 미팅 데이터 액세스 리포지토리
#[repository(name = "meeting", collection = "meetings")]
pub struct MeetingRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

#[async_trait]
impl CrudDao for MeetingRepository {
    type Doc = Meeting;

    fn typed_collection(&self) -> Collection<Meeting> {
        self.collection::<Meeting>()
    }

    /// 미팅 부분 업데이트 (캐시 무효화 포함)
    async fn update(
        &self,
        id: &str,
        mut update_doc: mongodb::bson::Document,
    ) -> Result<Option<Meeting>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        update_doc.insert("updated_at", DateTime::now());

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated = self
            .typed_collection()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref meeting) = updated {
            self.invalidate_meeting_cache(id, &meeting.code).await;
        }

        Ok(updated)
    }

    /// 미팅 삭제 (캐시 무효화 포함)
    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let Some(meeting) = self.find_by_id(id).await? else {
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
            self.invalidate_meeting_cache(id, &meeting.code).await;
            let _ = self.invalidate_collection_cache(None).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

impl MeetingRepository {
    fn code_cache_key(code: &str) -> String {
        format!("meeting:code:{}", code)
    }

    async fn invalidate_meeting_cache(&self, id: &str, code: &str) {
        let _ = self.invalidate_cache(id).await;
        let _ = self.redis.del(&Self::code_cache_key(code)).await;
    }

    /// 참가 코드로 미팅 조회 (캐시 우선)
    ///
    /// 참가 코드는 초대 링크를 통해 반복 조회되므로 5분간 캐싱합니다.
    pub async fn find_by_code(&self, code: &str) -> Result<Option<Meeting>, AppError> {
        let cache_key = Self::code_cache_key(code);

        if let Ok(Some(cached)) = self.redis.get::<Meeting>(&cache_key).await {
            return Ok(Some(cached));
        }

        let meeting = self
            .typed_collection()
            .find_one(doc! { "code": code })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref meeting) = meeting {
            let _ = self
                .redis
                .set_with_expiry(&cache_key, meeting, CODE_CACHE_TTL)
                .await;
        }

        Ok(meeting)
    }

    /// 특정 사용자가 호스트인 미팅 목록 조회
    pub async fn find_by_host(&self, host_id: &ObjectId) -> Result<Vec<Meeting>, AppError> {
        self.find_by(doc! { "host_id": host_id }).await
    }

    /// 참가자 ID 추가
    ///
    /// `$addToSet`으로 중복 참가를 방지합니다.
    pub async fn add_participant(
        &self,
        id: &str,
        user_id: &ObjectId,
    ) -> Result<Option<Meeting>, AppError> {
        self.modify_participants(id, doc! { "$addToSet": { "participant_ids": user_id } })
            .await
    }

    /// 참가자 ID 제거
    pub async fn remove_participant(
        &self,
        id: &str,
        user_id: &ObjectId,
    ) -> Result<Option<Meeting>, AppError> {
        self.modify_participants(id, doc! { "$pull": { "participant_ids": user_id } })
            .await
    }

    async fn modify_participants(
        &self,
        id: &str,
        mut operation: mongodb::bson::Document,
    ) -> Result<Option<Meeting>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        operation.insert("$set", doc! { "updated_at": DateTime::now() });

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated = self
            .typed_collection()
            .find_one_and_update(doc! { "_id": object_id }, operation)
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref meeting) = updated {
            self.invalidate_meeting_cache(id, &meeting.code).await;
        }

        Ok(updated)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// - `code` (unique): 참가 코드 충돌 방지 및 코드 조회 최적화
    /// - `host_id`: 호스트별 미팅 목록 조회 최적화
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.typed_collection();

        let code_index = IndexModel::builder()
            .keys(doc! { "code": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("code_unique".to_string())
                    .build(),
            )
            .build();

        let host_index = IndexModel::builder()
            .keys(doc! { "host_id": 1 })
            .options(IndexOptions::builder().name("host_id".to_string()).build())
            .build();

        collection
            .create_indexes([code_index, host_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
