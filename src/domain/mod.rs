//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 링크 단축 서비스의 비즈니스 객체와
//! 도메인 규칙을 담당합니다. Spring Framework의 Domain Layer와 동일한
//! 역할을 수행하며, Domain-Driven Design (DDD) 원칙에 따라 설계되었습니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 핵심 비즈니스 객체 (Link, User)
//! ├── DTOs          - 데이터 전송 객체 (Request/Response)
//! └── Models        - 외부 시스템 통합 모델 (OAuth, JWT)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Entity` | `entities` 모듈 | 비즈니스 핵심 객체 |
//! | `@RequestBody` / `@ResponseBody` | `dto` 모듈 | API 계약 정의 |
//! | Domain Models | `models` 모듈 | 외부 시스템 통합 |
//! | `@Valid` | `validator` 검증 | 데이터 유효성 검사 |
//!
//! ## 모듈 구성
//!
//! - [`entities`] - MongoDB에 영속되는 도메인 엔티티 (`Link`, `User`)
//! - [`dto`] - API 경계의 요청/응답 객체
//! - [`models`] - OAuth 프로바이더 응답, JWT 클레임, 인증 컨텍스트 모델

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
