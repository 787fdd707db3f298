//! 모이다 화상회의 서비스 백엔드
//!
//! Rust 기반의 화상회의 플랫폼 백엔드 서비스입니다.
//! 외부 인증 공급자 연동 기반 회원가입/로그인, 소셜 로그인,
//! 회의 생성과 참가자 관리, 그리고 싱글톤 매크로를 활용한
//! 의존성 주입을 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 회원가입, 프로필 관리, 계정 삭제
//! - **외부 인증 연동**: 인증 공급자 REST API 기반 토큰 발급/검증
//! - **소셜 로그인**: Google / GitHub / Facebook 지원
//! - **회의 관리**: 회의 생성, 참가 코드 발급, 정원 관리
//! - **참가자 관리**: 참가/퇴장, 미디어 상태, 역할 변경
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 도메인 데이터 영구 저장
//! - **Redis**: 조회 결과 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use meeting_service_backend::services::users::user_service::UserService;
//! use meeting_service_backend::services::meetings::meeting_service::MeetingService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let user_service = UserService::instance();
//! let meeting_service = MeetingService::instance();
//!
//! // 회원가입 및 회의 생성
//! let user = user_service.register(request).await?;
//! let meeting = meeting_service.create_meeting(&host, create_request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
