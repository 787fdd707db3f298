//! 참가자 리포지토리 모듈

pub mod participant_repo;

pub use participant_repo::*;
