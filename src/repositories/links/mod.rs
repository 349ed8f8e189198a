//! 링크 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`LinkRepository`](link_repo::LinkRepository)를 통해 MongoDB 기반 링크 데이터 관리와
//! Redis 캐싱을 제공합니다. 순차 ID 발급을 위한 카운터 컬렉션도 이 모듈이 관리합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::links::link_repo::LinkRepository;
//!
//! let link_repo = LinkRepository::instance();
//! let link = link_repo.find_by_link_id(12345).await?;
//! ```

pub mod link_repo;
