//! 통합 에러 처리 모듈
//!
//! 애플리케이션 전역에서 사용하는 에러 타입과 변환 유틸리티를 제공합니다.

pub mod errors;

pub use errors::*;
