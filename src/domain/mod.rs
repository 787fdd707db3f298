//! 도메인 계층
//!
//! 엔티티, 도메인 모델, DTO를 정의합니다.

pub mod entities;
pub mod models;
pub mod dto;
