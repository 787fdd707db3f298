//! 리포지토리 계층
//!
//! MongoDB + Redis 기반 데이터 액세스 계층입니다.
//! 공통 CRUD는 [`dao::CrudDao`]의 기본 구현이 제공하며,
//! 각 리포지토리는 캐싱이 필요한 연산만 재정의합니다.

pub mod dao;
pub mod users;
pub mod meetings;
pub mod participants;
