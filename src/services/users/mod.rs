//! 사용자 관리 서비스 모듈
//!
//! 사용자 프로필과 관련된 비즈니스 로직을 담당하는 서비스들을 제공합니다.
//! 계정 생성은 OAuth 로그인 시 인증 서비스에서 수행되므로,
//! 이 모듈은 조회와 삭제만 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::instance();
//! let profile = user_service.get_user_by_id(&user_id).await?;
//! ```

pub mod user_service;

pub use user_service::*;
