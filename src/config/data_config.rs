//! 데이터 및 서버 설정 관리 모듈
//!
//! 서버 바인딩, 실행 환경, 단축 URL 도메인 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우
    /// `Production`을 기본값으로 사용합니다. 클라이언트에 노출되는
    /// 자유 형식 라벨(`RuntimeConfig::environment`)과는 별개로,
    /// 서버 동작 분기에만 사용됩니다.
    pub fn current() -> Self {
        match env::var("ENVIRONMENT")
            .unwrap_or_else(|_| "production".to_string())
            .to_lowercase()
            .as_str()
        {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 환경별 CORS 허용 Origin 목록을 반환합니다.
    ///
    /// 프로덕션과 스테이징은 단축 URL 도메인만 허용하고,
    /// 개발과 테스트는 로컬호스트 프론트엔드를 허용합니다.
    pub fn cors_origins(&self) -> Vec<String> {
        match self {
            Environment::Production | Environment::Staging => {
                vec![format!("https://{}", ShortLinkConfig::base_host())]
            }
            Environment::Development | Environment::Test => vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://localhost:8080".to_string(),
                "http://127.0.0.1:8080".to_string(),
            ],
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "0.0.0.0", 모든 인터페이스)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}

/// 단축 URL 도메인 설정
pub struct ShortLinkConfig;

impl ShortLinkConfig {
    /// 단축 URL에 사용되는 도메인을 반환합니다.
    ///
    /// 생성된 단축 URL은 `https://{base_host}/{hash}` 형태가 됩니다.
    ///
    /// # Environment Variables
    ///
    /// - `BASE_HOST`: 단축 URL 도메인 (기본값: "short.twb.one")
    pub fn base_host() -> String {
        env::var("BASE_HOST").unwrap_or_else(|_| "short.twb.one".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("staging"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_cors_origins_per_environment() {
        let prod_origins = Environment::Production.cors_origins();
        assert_eq!(prod_origins.len(), 1);
        assert!(prod_origins[0].starts_with("https://"));

        let dev_origins = Environment::Development.cors_origins();
        assert!(dev_origins.contains(&"http://localhost:3000".to_string()));
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_short_link_config_default() {
        if env::var("BASE_HOST").is_err() {
            assert_eq!(ShortLinkConfig::base_host(), "short.twb.one");
        }
    }
}
