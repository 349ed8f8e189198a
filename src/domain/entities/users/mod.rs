//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//! 이 서비스의 사용자는 전원 OAuth(Google, GitHub)로 가입하며,
//! 프로바이더 + 프로바이더 사용자 ID 조합으로 식별됩니다.

pub mod user;

pub use user::*;
