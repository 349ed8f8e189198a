//! # Domain Models Module
//!
//! 도메인의 비즈니스 모델과 값 객체(Value Objects)를 정의하는 모듈입니다.
//! entities와 달리 데이터베이스에 직접 영속되지 않는 모델들을 담습니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - **영속성**: 데이터베이스에 직접 저장되는 객체
//! - **정체성**: 고유한 식별자(ID)를 가짐
//! - **예시**: `Link`, `User`
//!
//! ### Models (`./`)
//! - **값 객체**: 식별자보다는 값 자체가 중요
//! - **불변성**: 일반적으로 불변 객체로 설계
//! - **예시**: `TokenClaims`, `TokenPair`, `GoogleUserInfo`
//!
//! ## 구성
//!
//! - [`auth`] - 요청 컨텍스트의 인증 모델 (`AuthenticatedUser`, `AuthMode`)
//! - [`token`] - JWT 클레임과 토큰 쌍
//! - [`oauth`] - OAuth 프로바이더 API 응답 모델

pub mod auth;
pub mod token;
pub mod oauth;

pub use auth::*;
pub use token::*;
pub use oauth::*;
