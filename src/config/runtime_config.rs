//! 런타임 설정 레코드 관리 모듈
//!
//! 클라이언트 애플리케이션에 노출되는 런타임 설정(`window.APP_CONFIG`)을
//! 타입이 명시된 불변 레코드로 관리합니다.
//!
//! ## 생명주기
//!
//! ```text
//! [미적재] ──load()──> [적재 완료] (종료 상태, 해제 없음)
//! ```
//!
//! 부팅 시 환경 변수에서 한 번 적재되어 검증된 뒤 `ServiceLocator`에
//! 등록됩니다. 이후 모든 읽기는 동기적이며 실패하지 않습니다. 잘못된
//! 값으로는 레코드 자체가 생성되지 않으므로, 적재 이후에는 항상 유효한
//! 값만 존재합니다.
//!
//! ## Spring과의 비교
//!
//! | Spring | 이 모듈 |
//! |--------|---------|
//! | `@ConfigurationProperties` | `RuntimeConfig` 구조체 |
//! | `@Validated` | `RuntimeConfig::new()`의 생성 시점 검증 |
//! | `Environment.getProperty()` | 접근자 메서드 (`api_base_url()` 등) |

use std::env;
use log::info;
use serde::Serialize;
use url::Url;
use crate::errors::AppError;

/// `APP_API_BASE_URL` 미설정 시 사용되는 기본 API 주소
pub const DEFAULT_API_BASE_URL: &str = "https://short.twb.one";

/// `APP_ENVIRONMENT` 미설정 시 사용되는 기본 환경 라벨
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// 클라이언트에 노출되는 런타임 설정 레코드
///
/// 필드는 모두 비공개이며 변경자(setter)가 존재하지 않습니다.
/// 생성 이후 값이 바뀌지 않는 불변 레코드로, 교체가 필요한 경우
/// 새 인스턴스를 만들어 `ServiceLocator::set()`으로 재등록합니다
/// (마지막 등록이 우선).
///
/// # Examples
///
/// ```rust,ignore
/// let config = RuntimeConfig::load()?;
/// ServiceLocator::set(Arc::new(config));
///
/// // 이후 어디서든 동기적으로 읽기
/// let config = ServiceLocator::get::<RuntimeConfig>();
/// println!("API: {}", config.api_base_url());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    /// 클라이언트가 API 호출에 사용하는 기준 주소
    api_base_url: String,
    /// 환경 라벨 (development, staging, production 등 자유 형식)
    environment: String,
}

impl RuntimeConfig {
    /// 검증을 거쳐 새 런타임 설정 레코드를 생성합니다.
    ///
    /// # Validation
    ///
    /// - `api_base_url`: 공백 제거 후 비어 있으면 거부, URL 파싱 실패 시
    ///   거부, http/https 이외의 스킴 거부, 호스트 누락 거부
    /// - `environment`: 공백 제거 후 비어 있으면 거부. 값의 종류는
    ///   제한하지 않습니다 (자유 형식 라벨)
    ///
    /// # Errors
    ///
    /// 검증 실패 시 `AppError::ValidationError`를 반환합니다.
    /// 생성만이 실패할 수 있으며, 생성된 레코드의 읽기는 실패하지 않습니다.
    pub fn new(api_base_url: &str, environment: &str) -> Result<Self, AppError> {
        let api_base_url = api_base_url.trim();
        let environment = environment.trim();

        if api_base_url.is_empty() {
            return Err(AppError::ValidationError(
                "apiBaseUrl is required".to_string(),
            ));
        }

        let parsed = Url::parse(api_base_url).map_err(|e| {
            AppError::ValidationError(format!("apiBaseUrl '{}' is not a valid URL: {}", api_base_url, e))
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(AppError::ValidationError(format!(
                    "apiBaseUrl scheme '{}' is not supported: only http and https are allowed",
                    other
                )));
            }
        }

        if parsed.host_str().is_none() {
            return Err(AppError::ValidationError(format!(
                "apiBaseUrl '{}' has no host",
                api_base_url
            )));
        }

        if environment.is_empty() {
            return Err(AppError::ValidationError(
                "environment is required".to_string(),
            ));
        }

        Ok(Self {
            api_base_url: api_base_url.to_string(),
            environment: environment.to_string(),
        })
    }

    /// 환경 변수에서 런타임 설정을 적재합니다.
    ///
    /// 배포 파이프라인이 값을 주입하는 지점입니다. CI/CD는 환경 변수만
    /// 바꾸면 되고, 코드 수정 없이 대상 환경이 전환됩니다.
    ///
    /// # Environment Variables
    ///
    /// - `APP_API_BASE_URL`: API 기준 주소 (기본값: `https://short.twb.one`)
    /// - `APP_ENVIRONMENT`: 환경 라벨 (기본값: `development`)
    ///
    /// 적재 성공 시 두 값을 그대로 보고하는 진단 로그 한 줄을 남깁니다.
    pub fn load() -> Result<Self, AppError> {
        let api_base_url =
            env::var("APP_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let environment =
            env::var("APP_ENVIRONMENT").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        let config = Self::new(&api_base_url, &environment)?;

        info!(
            "🔧 Runtime configuration loaded: apiBaseUrl={}, environment={}",
            config.api_base_url, config.environment
        );

        Ok(config)
    }

    /// 클라이언트가 API 호출에 사용하는 기준 주소를 반환합니다.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// 환경 라벨을 반환합니다.
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// 호스팅 페이지가 소비하는 JavaScript 아티팩트를 렌더링합니다.
    ///
    /// `<script src="/config.js">`로 적재되는 `window.APP_CONFIG` 할당문과
    /// 진단용 `console.log` 한 줄을 생성합니다. 설정된 값이 그대로
    /// 재현되며, 문자열 리터럴은 JSON 이스케이프를 거칩니다.
    ///
    /// # Output
    ///
    /// ```text
    /// window.APP_CONFIG = {
    ///     apiBaseUrl: "https://short.twb.one",
    ///     environment: "development"
    /// };
    ///
    /// console.log("Link Shortener configuration loaded:", window.APP_CONFIG);
    /// ```
    pub fn to_client_js(&self) -> String {
        // JSON 문자열 리터럴은 JS 문자열 리터럴과 호환된다
        let api_base_url = serde_json::to_string(&self.api_base_url)
            .unwrap_or_else(|_| "\"\"".to_string());
        let environment = serde_json::to_string(&self.environment)
            .unwrap_or_else(|_| "\"\"".to_string());

        format!(
            "window.APP_CONFIG = {{\n    apiBaseUrl: {},\n    environment: {}\n}};\n\nconsole.log(\"Link Shortener configuration loaded:\", window.APP_CONFIG);\n",
            api_base_url, environment
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_used_without_overrides() {
        // 환경 변수가 설정된 CI 환경에서는 건너뛴다
        if env::var("APP_API_BASE_URL").is_err() && env::var("APP_ENVIRONMENT").is_err() {
            let config = RuntimeConfig::load().unwrap();
            assert_eq!(config.api_base_url(), "https://short.twb.one");
            assert_eq!(config.environment(), "development");
        }
    }

    #[test]
    fn test_new_accepts_valid_values() {
        let config = RuntimeConfig::new("https://api.example.com", "production").unwrap();
        assert_eq!(config.api_base_url(), "https://api.example.com");
        assert_eq!(config.environment(), "production");
    }

    #[test]
    fn test_new_trims_whitespace() {
        let config = RuntimeConfig::new("  https://api.example.com  ", "  staging  ").unwrap();
        assert_eq!(config.api_base_url(), "https://api.example.com");
        assert_eq!(config.environment(), "staging");
    }

    #[test]
    fn test_new_rejects_empty_api_base_url() {
        let result = RuntimeConfig::new("", "development");
        assert!(matches!(result, Err(AppError::ValidationError(_))));

        let result = RuntimeConfig::new("   ", "development");
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_new_rejects_non_url_api_base_url() {
        let result = RuntimeConfig::new("not a url", "development");
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_new_rejects_non_http_scheme() {
        let result = RuntimeConfig::new("ftp://files.example.com", "development");
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_new_rejects_empty_environment() {
        let result = RuntimeConfig::new("https://api.example.com", "");
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_environment_is_free_form() {
        // 알려진 집합으로 제한하지 않는다
        let config = RuntimeConfig::new("https://api.example.com", "qa-42").unwrap();
        assert_eq!(config.environment(), "qa-42");
    }

    #[test]
    fn test_client_js_reproduces_values_verbatim() {
        let config = RuntimeConfig::new("https://api.staging.twb.one", "staging").unwrap();
        let js = config.to_client_js();

        assert!(js.contains("window.APP_CONFIG = {"));
        assert!(js.contains("apiBaseUrl: \"https://api.staging.twb.one\""));
        assert!(js.contains("environment: \"staging\""));
        assert!(js.contains("console.log(\"Link Shortener configuration loaded:\", window.APP_CONFIG);"));
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let config = RuntimeConfig::new("https://api.example.com", "production").unwrap();
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["apiBaseUrl"], "https://api.example.com");
        assert_eq!(json["environment"], "production");
    }

    #[test]
    fn test_records_with_same_values_are_equal() {
        let a = RuntimeConfig::new("https://api.example.com", "production").unwrap();
        let b = RuntimeConfig::new("https://api.example.com", "production").unwrap();
        assert_eq!(a, b);
    }
}
