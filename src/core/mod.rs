//! # Core Framework Module
//!
//! 링크 단축 서비스를 위한 핵심 프레임워크 기능을 제공하는 모듈입니다.
//! Spring Framework의 핵심 컨테이너 기능을 Rust 생태계에 맞게 구현하여,
//! 타입 안전성과 성능을 모두 만족하는 의존성 주입 시스템을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 프로세스 전역 싱글톤 컨테이너 (전역 바인딩)
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 서비스 등록
//! - **싱글톤 관리**: Thread-safe한 인스턴스 생명주기 관리
//! - **의존성 해결**: `Arc<T>` 타입 기반 자동 의존성 주입
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 프레임워크 |
//! |--------|---------------|
//! | `@Component` | `#[service]` / `#[repository]` |
//! | `ApplicationContext` | `ServiceLocator` |
//! | `@Autowired` | `Arc<T>` 필드 자동 주입 |
//! | `registerSingleton()` | `ServiceLocator::set()` |
//! | Bean 생명주기 | Singleton + Lazy 초기화 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::registry::ServiceLocator;
//!
//! // 인프라 컴포넌트 수동 등록
//! ServiceLocator::set(database);
//! ServiceLocator::set(redis_client);
//! ServiceLocator::set(runtime_config);
//!
//! // 매크로 기반 컴포넌트는 자동 등록
//! let link_service = LinkService::instance();
//! ```

pub mod registry;

pub use registry::*;

// 에러 타입은 errors 모듈에서 단일 정의를 유지합니다
pub use crate::errors::errors::AppError;
