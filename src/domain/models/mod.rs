//! 도메인 모델 모듈
//!
//! 엔티티가 아닌 도메인 객체들(인증 컨텍스트, 외부 API 응답 모델)을 정의합니다.

pub mod auth;
pub mod identity;

pub use auth::*;
pub use identity::*;
