//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, 회의 기본값 설정
//! - [`identity_config`] - 외부 인증 제공자, 소셜 로그인 공급자 설정
//! - [`mail_config`] - 외부 메일 API 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! 개발, 테스트, 스테이징, 프로덕션 환경별로 다른 설정값을 제공합니다.
//!
//! ### 2. 보안 우선 (Security First)
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//! - 프로덕션에서는 필수 설정값 누락 시 패닉
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 인증 제공자 설정
//! export IDENTITY_API_KEY="your-identity-api-key"
//! export IDENTITY_BASE_URI="https://identitytoolkit.googleapis.com/v1"
//!
//! # 메일 API 설정
//! export MAIL_API_URI="https://api.mailservice.com/v3/mail/send"
//! export MAIL_API_KEY="your-mail-api-key"
//! ```

pub mod data_config;
pub mod identity_config;
pub mod mail_config;

pub use data_config::*;
pub use identity_config::*;
pub use mail_config::*;
