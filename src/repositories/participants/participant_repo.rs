//! # 참가자 리포지토리 구현
//!
//! 미팅 참가자 엔티티의 데이터 액세스 계층입니다.
//! 참가자 목록은 미팅 화면에서 반복 조회되므로 짧은 TTL로 캐싱합니다.

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
    domain::entities::participants::Participant,
    errors::errors::AppError,
    repositories::dao::{CrudDao, MongoDocument},
};

/// 참가자 목록 캐시 TTL (초)
///
/// 음소거/손들기 같은 상태가 자주 바뀌므로 짧게 유지합니다.
const LIST_CACHE_TTL: usize = 60;

impl MongoDocument for Participant {
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

/// 참가자 데이터 액세스 리포지토리
#[repository(name = "participant", collection = "participants")]
pub struct ParticipantRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

#[async_trait]
impl CrudDao for ParticipantRepository {
    type Doc = Participant;

    fn typed_collection(&self) -> Collection<Participant> {
        self.collection::<Participant>()
    }

    /// 참가자 생성 (목록 캐시 무효화 포함)
    async fn create(&self, mut participant: Participant) -> Result<Participant, AppError> {
        participant.touch();

        let meeting_id = participant.meeting_id;

        let result = self
            .typed_collection()
            .insert_one(&participant)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(id) = result.inserted_id.as_object_id() {
            participant.set_id(id);
        }

        let _ = self
            .redis
            .del(&Self::meeting_list_cache_key(&meeting_id))
            .await;

        Ok(participant)
    }

    /// 참가자 부분 업데이트 (목록 캐시 무효화 포함)
    async fn update(
        &self,
        id: &str,
        mut update_doc: mongodb::bson::Document,
    ) -> Result<Option<Participant>, AppError> {
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

        if let Some(ref participant) = updated {
            let _ = self.invalidate_cache(id).await;
            let _ = self
                .redis
                .del(&Self::meeting_list_cache_key(&participant.meeting_id))
                .await;
        }

        Ok(updated)
    }

    /// 참가자 삭제 (목록 캐시 무효화 포함)
    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let Some(participant) = self.find_by_id(id).await? else {
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
            let _ = self.invalidate_cache(id).await;
            let _ = self
                .redis
                .del(&Self::meeting_list_cache_key(&participant.meeting_id))
                .await;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

impl ParticipantRepository {
    fn meeting_list_cache_key(meeting_id: &ObjectId) -> String {
        format!("participants:meeting:{}", meeting_id.to_hex())
    }

    /// 미팅의 참가자 목록 조회 (캐시 우선, TTL 60초)
    pub async fn find_by_meeting(
        &self,
        meeting_id: &ObjectId,
    ) -> Result<Vec<Participant>, AppError> {
        let cache_key = Self::meeting_list_cache_key(meeting_id);

        if let Ok(Some(cached)) = self.redis.get::<Vec<Participant>>(&cache_key).await {
            return Ok(cached);
        }

        let participants = self.find_by(doc! { "meeting_id": meeting_id }).await?;

        let _ = self
            .redis
            .set_with_expiry(&cache_key, &participants, LIST_CACHE_TTL)
            .await;

        Ok(participants)
    }

    /// 미팅 내 특정 사용자의 참가 기록 조회
    ///
    /// 중복 참가 확인과 퇴장 처리에 사용합니다.
    pub async fn find_by_meeting_and_user(
        &self,
        meeting_id: &ObjectId,
        user_id: &ObjectId,
    ) -> Result<Option<Participant>, AppError> {
        self.typed_collection()
            .find_one(doc! { "meeting_id": meeting_id, "user_id": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 미팅의 모든 참가 기록 삭제
    ///
    /// 미팅 삭제 시 고아 참가 기록이 남지 않도록 호출합니다.
    pub async fn delete_by_meeting(&self, meeting_id: &ObjectId) -> Result<u64, AppError> {
        let result = self
            .typed_collection()
            .delete_many(doc! { "meeting_id": meeting_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let _ = self
            .redis
            .del(&Self::meeting_list_cache_key(meeting_id))
            .await;

        Ok(result.deleted_count)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// - `meeting_id` + `user_id` (unique): 미팅당 중복 참가 방지
    /// - `meeting_id`: 참가자 목록 조회 최적화
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.typed_collection();

        let membership_index = IndexModel::builder()
            .keys(doc! { "meeting_id": 1, "user_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("meeting_user_unique".to_string())
                    .build(),
            )
            .build();

        let meeting_index = IndexModel::builder()
            .keys(doc! { "meeting_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("meeting_id".to_string())
                    .build(),
            )
            .build();

        collection
            .create_indexes([membership_index, meeting_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
