//! # Configuration Module
//!
//! 링크 단축 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`runtime_config`] - 클라이언트에 노출되는 런타임 설정 ([`RuntimeConfig`])
//! - [`data_config`] - 서버 바인딩, 환경, 단축 도메인 관련 설정
//! - [`auth_config`] - OAuth, JWT 관련 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! 개발, 테스트, 스테이징, 프로덕션 환경별로 다른 설정값을 제공합니다.
//! Spring Profile과 유사한 방식으로 동작합니다.
//!
//! ### 2. 부팅 시 검증 (Fail Fast)
//!
//! [`RuntimeConfig`]는 생성 시점에 모든 필드를 검증하며, 잘못된 값으로는
//! 인스턴스 자체가 만들어지지 않습니다. 생성 이후에는 불변입니다.
//!
//! ### 3. 보안 우선 (Security First)
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//! - 클라이언트에는 공개 가능한 값만 노출
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 런타임 설정 (클라이언트 노출)
//! export APP_API_BASE_URL="https://short.twb.one"
//! export APP_ENVIRONMENT="production"
//!
//! # 단축 URL 도메인
//! export BASE_HOST="short.twb.one"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_HOURS="24"
//!
//! # Google OAuth (사용 시)
//! export GOOGLE_CLIENT_ID="your-client-id"
//! export GOOGLE_CLIENT_SECRET="your-client-secret"
//! export GOOGLE_REDIRECT_URI="https://yourdomain.com/auth/google/callback"
//!
//! # GitHub OAuth (사용 시)
//! export GITHUB_CLIENT_ID="your-client-id"
//! export GITHUB_CLIENT_SECRET="your-client-secret"
//! export GITHUB_REDIRECT_URI="https://yourdomain.com/auth/github/callback"
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Configuration` | `pub struct Config` |
//! | `@Value("${property}")` | `env::var("PROPERTY")` |
//! | `@Profile("dev")` | `Environment::Development` |
//! | `application.yml` | `.env` 파일 |
//! | `@ConfigurationProperties` | 구조체 기반 설정 |

pub mod runtime_config;
pub mod data_config;
pub mod auth_config;

pub use runtime_config::*;
pub use data_config::*;
pub use auth_config::*;
