//! # OAuth Domain Models Module
//!
//! OAuth 2.0 인증 플로우와 관련된 도메인 모델들을 정의하는 모듈입니다.
//! 각 프로바이더(Google, GitHub)의 토큰/사용자 정보 API 응답을
//! 타입 안전하게 역직렬화하기 위한 구조체를 제공합니다.
//!
//! ## 설계 철학
//!
//! ### 프로바이더 독립성
//!
//! 각 프로바이더의 응답 형식은 다르지만, 인증 서비스 계층에서
//! 공통 `User` 엔티티로 수렴합니다:
//!
//! ```text
//! GoogleUserInfo ──┐
//!                  ├──> User::new_oauth(...)
//! GithubUserInfo ──┘
//! ```
//!
//! ### 타입 안전성
//!
//! 프로바이더별 전용 타입을 사용하여 Google 토큰을 GitHub 플로우에
//! 잘못 전달하는 실수를 컴파일 타임에 방지합니다.

pub mod google;
pub mod github;

pub use google::*;
pub use github::*;
