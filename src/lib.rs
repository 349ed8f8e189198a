//! 단축 링크 서비스 백엔드
//!
//! Rust 기반의 URL 단축 서비스입니다.
//! Base62 해시 기반 단축 링크, 클라이언트 런타임 설정 주입,
//! JWT 토큰 기반 인증과 Google/GitHub OAuth 소셜 로그인,
//! 그리고 싱글톤 매크로를 활용한 의존성 주입을 제공합니다.
//!
//! # Features
//!
//! - **단축 링크**: 순차 ID 기반 Base62 해시, TTL 관리, 302 리다이렉트
//! - **런타임 설정**: 기동 시 검증·고정되는 클라이언트 설정 (`/config.js`)
//! - **JWT 인증**: 액세스/리프레시 토큰 기반 상태 없는 인증
//! - **OAuth 2.0**: Google, GitHub 소셜 로그인 지원
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 링크/사용자 데이터 영구 저장
//! - **Redis**: 링크 조회 캐싱 및 리프레시 토큰 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + 해시 리다이렉트
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
//! use link_shortener_backend::services::links::LinkService;
//! use link_shortener_backend::domain::entities::links::link::ExpiresType;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let link_service = LinkService::instance();
//!
//! // 단축 링크 생성 및 해석
//! let created = link_service.create_link(None, "example.com", ExpiresType::ThreeMonths).await?;
//! let original = link_service.resolve("100000").await?;
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
