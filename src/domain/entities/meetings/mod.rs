//! 회의 엔티티 모듈

pub mod meeting;

pub use meeting::*;
