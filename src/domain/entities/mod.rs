//! 도메인 엔티티 모듈
//!
//! MongoDB 컬렉션에 저장되는 핵심 도메인 객체들을 정의합니다.

pub mod users;
pub mod meetings;
pub mod participants;

pub use users::*;
pub use meetings::*;
pub use participants::*;
