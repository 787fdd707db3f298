//! 참가자 서비스 모듈

pub mod participant_service;

pub use participant_service::*;
