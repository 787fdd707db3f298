//! 서비스 계층
//!
//! 도메인별 비즈니스 로직을 담당하는 싱글톤 서비스들입니다.
//! `#[service]` 매크로를 통해 등록되며, 리포지토리와 외부 클라이언트가
//! 자동으로 주입됩니다.

pub mod identity;
pub mod mail;
pub mod users;
pub mod meetings;
pub mod participants;
