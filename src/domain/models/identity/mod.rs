//! 외부 인증 제공자 응답 모델

pub mod identity_account;

pub use identity_account::*;
