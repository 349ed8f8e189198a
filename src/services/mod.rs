//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로를 사용하여 싱글톤으로 관리되는 서비스들을 제공합니다.
//! 도메인별로 모듈화되어 단축 링크, 인증, 사용자 관리 기능을 담당합니다.
//!
//! # Features
//!
//! - 단축 링크 생명주기 관리 (생성, 리다이렉트, 조회, 삭제)
//! - Base62 해시 인코딩/디코딩
//! - JWT 토큰 기반 인증 시스템
//! - OAuth 2.0 소셜 로그인 (Google, GitHub)
//! - 자동 의존성 주입 및 싱글톤 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{links::LinkService, auth::TokenService};
//!
//! let link_service = LinkService::instance();
//! let token_service = TokenService::instance();
//! ```

pub mod links;
pub mod auth;
pub mod users;
