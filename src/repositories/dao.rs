//! # 제네릭 데이터 액세스 계층
//!
//! MongoDB 컬렉션에 대한 공통 CRUD 연산을 트레이트 기본 구현으로 제공합니다.
//! 각 리포지토리는 [`CrudDao`]를 구현하는 것만으로 표준 CRUD를 얻고,
//! 캐싱이 필요한 연산은 해당 메서드를 재정의합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Collection,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::errors::AppError;

/// ObjectId 문자열 파싱 헬퍼
///
/// 24자리 16진수가 아닌 입력은 ValidationError로 변환합니다.
pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}

/// MongoDB 문서로 저장되는 엔티티가 구현하는 트레이트
///
/// [`CrudDao`]의 기본 구현이 ID 할당과 수정 시각 갱신에 사용합니다.
pub trait MongoDocument:
    Serialize + DeserializeOwned + Unpin + Send + Sync + 'static
{
    /// 문서의 `_id`
    fn id(&self) -> Option<ObjectId>;

    /// 삽입 후 할당된 `_id`를 기록
    fn set_id(&mut self, id: ObjectId);

    /// `updated_at`을 현재 시각으로 갱신
    fn touch(&mut self);
}

/// 제네릭 CRUD 연산 트레이트
///
/// 기본 구현은 캐싱 없이 MongoDB에 직접 접근합니다.
/// 캐싱 전략이 있는 리포지토리(예: `UserRepository`)는
/// 필요한 메서드를 재정의하여 캐시 우선 조회와 무효화를 추가합니다.
#[async_trait]
pub trait CrudDao: Send + Sync {
    /// 이 DAO가 다루는 문서 타입
    type Doc: MongoDocument;

    /// 문서 타입이 바인딩된 MongoDB 컬렉션
    fn typed_collection(&self) -> Collection<Self::Doc>;

    /// 새 문서 생성
    ///
    /// MongoDB가 할당한 ObjectId를 문서에 기록하여 반환합니다.
    async fn create(&self, mut document: Self::Doc) -> Result<Self::Doc, AppError> {
        document.touch();

        let result = self
            .typed_collection()
            .insert_one(&document)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(id) = result.inserted_id.as_object_id() {
            document.set_id(id);
        }

        Ok(document)
    }

    /// ID로 문서 조회
    async fn find_by_id(&self, id: &str) -> Result<Option<Self::Doc>, AppError> {
        let object_id = parse_object_id(id)?;

        self.typed_collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 문서 부분 업데이트
    ///
    /// 주어진 필드를 `$set`으로 반영하고 `updated_at`을 갱신하며,
    /// 업데이트된 최신 문서를 반환합니다.
    async fn update(
        &self,
        id: &str,
        mut update_doc: Document,
    ) -> Result<Option<Self::Doc>, AppError> {
        let object_id = parse_object_id(id)?;

        update_doc.insert("updated_at", DateTime::now());

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.typed_collection()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 문서 삭제
    ///
    /// 삭제된 문서가 있으면 `true`, 없으면 `false`를 반환합니다.
    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_object_id(id)?;

        let result = self
            .typed_collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 전체 문서 조회
    async fn find_all(&self) -> Result<Vec<Self::Doc>, AppError> {
        let cursor = self
            .typed_collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 필터 조건으로 문서 조회
    async fn find_by(&self, filter: Document) -> Result<Vec<Self::Doc>, AppError> {
        let cursor = self
            .typed_collection()
            .find(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id_valid() {
        let id = ObjectId::new();
        let parsed = parse_object_id(&id.to_hex()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_object_id_invalid() {
        let result = parse_object_id("not-an-object-id");
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
