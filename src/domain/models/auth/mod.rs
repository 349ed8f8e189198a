//! 인증 컨텍스트 모델
//!
//! 미들웨어가 검증한 인증 정보를 핸들러로 전달하는 모델들입니다.

pub mod authenticated_user;
pub mod authentication_request;

pub use authenticated_user::*;
pub use authentication_request::*;
