//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`links`**: 단축 링크 엔드포인트
//!   - 익명 링크 생성 (`POST /api/urls`)
//!   - 인증 링크 생성 (`POST /api/restricted_urls`)
//!   - 링크 목록/삭제 (`GET|DELETE /api/links`)
//!   - 리다이렉트 (`GET /{hash}`)
//!
//! - **`auth`**: 인증 관련 엔드포인트
//!   - OAuth 로그인 (`POST /api/auth/oauth`)
//!   - 토큰 갱신 (`POST /api/auth/refresh`)
//!   - 로그아웃 (`POST /api/auth/logout`)
//!   - 내 정보 조회/삭제 (`GET|DELETE /api/auth/me`)
//!
//! - **`config_handler`**: 클라이언트 런타임 설정 엔드포인트
//!   - JS 아티팩트 (`GET /config.js`)
//!   - JSON 레코드 (`GET /api/config`)
//!
//! ## 주요 특징
//!
//! - **비동기 처리**: 모든 핸들러가 `async/await` 사용
//! - **타입 안전성**: 요청/응답 JSON ↔ Rust 구조체 자동 변환
//! - **검증 통합**: validator 크레이트로 입력 검증
//! - **통합 에러 처리**: `Result<HttpResponse, AppError>` 패턴

pub mod links;
pub mod auth;
pub mod config_handler;
