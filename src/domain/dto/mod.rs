//! DTO 모듈
//!
//! HTTP 요청/응답 본문을 표현합니다. 요청 DTO는 `validator`로 검증되고,
//! 응답 DTO는 엔티티로부터 `From`으로 변환됩니다.

pub mod users;
pub mod meetings;
pub mod participants;
