//! 미팅 리포지토리 모듈

pub mod meeting_repo;

pub use meeting_repo::*;
