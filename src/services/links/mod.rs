//! 단축 링크 서비스 모듈
//!
//! 단축 링크의 핵심 비즈니스 로직을 담당하는 서비스들을 제공합니다.
//! Base62 해시 변환과 링크 생명주기 관리로 역할이 나뉩니다.
//!
//! # Features
//!
//! - 순차 ID와 Base62 해시 간의 양방향 변환
//! - 단축 링크 생성 (익명/인증 사용자)
//! - 해시 기반 원본 URL 해석 및 만료 검증
//! - 사용자별 링크 목록 조회 및 삭제
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::links::{HashService, LinkService};
//!
//! let link_service = LinkService::instance();
//! let response = link_service.create_link(None, "example.com", ExpiresType::ThreeMonths).await?;
//! println!("단축 URL: {}", response.short_url);
//! ```

pub mod hash_service;
pub mod link_service;

pub use hash_service::*;
pub use link_service::*;
