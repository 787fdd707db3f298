//! 회의 서비스 모듈

pub mod meeting_service;

pub use meeting_service::*;
