//! 리프레시 토큰 저장소 모듈
//!
//! Redis를 백엔드로 하는 [`TokenRepository`](token_repository::TokenRepository)를
//! 제공합니다. 토큰은 TTL로 자동 만료됩니다.

pub mod token_repository;
