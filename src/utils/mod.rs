//! 공통 유틸리티 모듈
//!
//! 터미널 출력 포맷팅과 문자열 처리 등 여러 계층에서 공유하는
//! 유틸리티 함수들을 제공합니다.

pub mod display_terminal;
pub mod string_utils;

pub use string_utils::*;
