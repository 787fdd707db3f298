//! 메일 발송 모듈

pub mod mail_service;

pub use mail_service::*;
