//! Links Entity Module
//!
//! 단축 링크 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 주요 구성 요소
//!
//! ### Link Entity
//! - **순차 ID**: 카운터 컬렉션에서 발급되는 숫자 ID (해시 인코딩의 입력)
//! - **소유자**: 인증 사용자의 ObjectId 또는 익명(None)
//! - **만료 정책**: 3개월 / 6개월 / 12개월 / 무제한
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::links::{Link, ExpiresType};
//!
//! // 인증 사용자의 링크
//! let link = Link::new(12345, Some(user_id), url, ExpiresType::Never);
//!
//! // 익명 링크 (항상 3개월 TTL)
//! let anon = Link::new(12346, None, url, ExpiresType::ThreeMonths);
//! ```

pub mod link;

pub use link::*;
