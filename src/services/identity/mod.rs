//! 외부 인증 제공자 연동 모듈

pub mod identity_service;

pub use identity_service::*;
