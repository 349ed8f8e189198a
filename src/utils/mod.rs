//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//! URL 정규화, 터미널 출력 등의 기능을 포함합니다.
//!
//! # Modules
//!
//! - [`url_utils`] - URL 검증 및 정규화 유틸리티
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::url_utils::normalize_url;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! // URL 정규화
//! let redirect_url = normalize_url("example.com/page")?;
//!
//! // 터미널 출력
//! print_boxed_title("System Initialized");
//! ```

pub mod url_utils;
pub mod display_terminal;
