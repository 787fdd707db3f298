//! 참가자 엔티티 모듈

pub mod participant;

pub use participant::*;
