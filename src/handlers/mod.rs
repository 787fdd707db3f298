//! HTTP 핸들러 모듈
//!
//! 라우트별 요청 처리 함수들을 정의합니다.
//! 핸들러는 입력 검증과 응답 변환만 담당하고,
//! 비즈니스 로직은 서비스 계층에 위임합니다.

pub mod auth;
pub mod users;
pub mod meetings;
pub mod participants;
