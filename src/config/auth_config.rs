//! # Authentication Configuration Module
//!
//! OAuth 프로바이더, JWT 토큰 등 인증 관련 설정을 관리하는 모듈입니다.
//! Spring Security의 OAuth2 및 JWT 설정과 유사한 역할을 수행합니다.
//!
//! ## 지원하는 인증 방식
//!
//! 1. **Google OAuth 2.0**: Google 계정을 통한 소셜 로그인
//! 2. **GitHub OAuth**: GitHub 계정을 통한 소셜 로그인
//! 3. **JWT 토큰**: Stateless 인증을 위한 JSON Web Token
//! 4. **익명 사용자**: 인증 없이 제한된 기능 사용 (3개월 TTL 링크 생성)
//!
//! ## Spring Security 와의 비교
//!
//! | Spring Security | 이 모듈 |
//! |-----------------|---------|
//! | `@EnableOAuth2Login` | `GoogleOAuthConfig` / `GithubOAuthConfig` |
//! | `jwt.secret` | `JwtConfig::secret()` |
//! | `oauth2.client.registration.google` | `GoogleOAuthConfig` |
//! | `spring.security.oauth2.client.provider` | `AuthProvider` |
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! # Google OAuth
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_REDIRECT_URI="http://localhost:8080/auth/google/callback"
//!
//! # GitHub OAuth
//! export GITHUB_CLIENT_ID="your-github-client-id"
//! export GITHUB_CLIENT_SECRET="your-github-client-secret"
//! export GITHUB_REDIRECT_URI="http://localhost:8080/auth/github/callback"
//!
//! # JWT 토큰
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export JWT_REFRESH_EXPIRATION_DAYS="7"
//! ```

use std::env;

/// Google OAuth 2.0 설정을 관리하는 구조체
///
/// Google Cloud Console 에서 생성한 OAuth 2.0 클라이언트 정보를 관리합니다.
/// Spring Security의 `spring.security.oauth2.client.registration.google`
/// 설정과 동일한 역할을 합니다.
///
/// ## 보안 고려사항
///
/// - `client_secret`은 절대 클라이언트 사이드에 노출되어서는 안 됩니다
/// - 프로덕션에서는 HTTPS redirect URI만 사용하세요
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    /// Google OAuth Client ID를 반환합니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_CLIENT_ID` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_id() -> String {
        env::var("GOOGLE_CLIENT_ID").expect("GOOGLE_CLIENT_ID must be set")
    }

    /// Google OAuth Client Secret을 반환합니다.
    ///
    /// 서버 사이드에서만 사용되며, 토큰 교환 시 사용됩니다.
    /// 이 값을 로그에 출력하지 마세요.
    ///
    /// # Panics
    ///
    /// `GOOGLE_CLIENT_SECRET` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_secret() -> String {
        env::var("GOOGLE_CLIENT_SECRET").expect("GOOGLE_CLIENT_SECRET must be set")
    }

    /// OAuth 인증 완료 후 리디렉션될 URI를 반환합니다.
    ///
    /// Google Cloud Console의 승인된 리디렉션 URI 목록에 등록되어 있어야 합니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_REDIRECT_URI` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn redirect_uri() -> String {
        env::var("GOOGLE_REDIRECT_URI").expect("GOOGLE_REDIRECT_URI must be set")
    }

    /// Google OAuth 인증 서버의 인증 엔드포인트 URI를 반환합니다.
    ///
    /// 기본값: `https://accounts.google.com/o/oauth2/auth`
    pub fn auth_uri() -> String {
        env::var("GOOGLE_AUTH_URI")
            .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/auth".to_string())
    }

    /// Google OAuth 토큰 교환 엔드포인트 URI를 반환합니다.
    ///
    /// 기본값: `https://oauth2.googleapis.com/token`
    pub fn token_uri() -> String {
        env::var("GOOGLE_TOKEN_URI")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string())
    }
}

/// GitHub OAuth 설정을 관리하는 구조체
///
/// GitHub Developer Settings 에서 생성한 OAuth App 정보를 관리합니다.
/// Google과 달리 GitHub의 사용자 정보 API는 이메일을 비공개로 설정한
/// 사용자에 대해 별도의 `/user/emails` 호출이 필요합니다.
pub struct GithubOAuthConfig;

impl GithubOAuthConfig {
    /// GitHub OAuth Client ID를 반환합니다.
    ///
    /// # Panics
    ///
    /// `GITHUB_CLIENT_ID` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_id() -> String {
        env::var("GITHUB_CLIENT_ID").expect("GITHUB_CLIENT_ID must be set")
    }

    /// GitHub OAuth Client Secret을 반환합니다.
    ///
    /// # Panics
    ///
    /// `GITHUB_CLIENT_SECRET` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_secret() -> String {
        env::var("GITHUB_CLIENT_SECRET").expect("GITHUB_CLIENT_SECRET must be set")
    }

    /// OAuth 인증 완료 후 리디렉션될 URI를 반환합니다.
    ///
    /// # Panics
    ///
    /// `GITHUB_REDIRECT_URI` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn redirect_uri() -> String {
        env::var("GITHUB_REDIRECT_URI").expect("GITHUB_REDIRECT_URI must be set")
    }

    /// GitHub OAuth 인증 엔드포인트 URI를 반환합니다.
    ///
    /// 기본값: `https://github.com/login/oauth/authorize`
    pub fn auth_uri() -> String {
        env::var("GITHUB_AUTH_URI")
            .unwrap_or_else(|_| "https://github.com/login/oauth/authorize".to_string())
    }

    /// GitHub OAuth 토큰 교환 엔드포인트 URI를 반환합니다.
    ///
    /// 기본값: `https://github.com/login/oauth/access_token`
    pub fn token_uri() -> String {
        env::var("GITHUB_TOKEN_URI")
            .unwrap_or_else(|_| "https://github.com/login/oauth/access_token".to_string())
    }

    /// GitHub 사용자 정보 API 엔드포인트 URI를 반환합니다.
    ///
    /// 기본값: `https://api.github.com/user`
    pub fn user_api_uri() -> String {
        env::var("GITHUB_USER_API_URI")
            .unwrap_or_else(|_| "https://api.github.com/user".to_string())
    }
}

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
///
/// 토큰 생성, 검증, 만료 시간 등을 관리합니다.
///
/// ## 권장 설정값
///
/// - **개발**: 액세스 토큰 24시간, 리프레시 토큰 7일
/// - **프로덕션**: 액세스 토큰 15분, 리프레시 토큰 30일
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 최소 256비트의 암호학적으로 안전한 랜덤 키를 사용해야 합니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 "your-secret-key"를 사용하지만,
    /// 이는 개발 환경에서만 안전하며 경고 로그가 출력됩니다.
    ///
    /// ```bash
    /// # 안전한 JWT 키 생성
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }

    /// JWT 액세스 토큰의 만료 시간을 시간 단위로 반환합니다.
    ///
    /// 기본값: 24시간
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }

    /// JWT 리프레시 토큰의 만료 시간을 일 단위로 반환합니다.
    ///
    /// 리프레시 토큰은 액세스 토큰 갱신에 사용되므로 액세스 토큰보다
    /// 긴 유효 기간을 가집니다. 기본값: 7일
    pub fn refresh_expiration_days() -> i64 {
        env::var("JWT_REFRESH_EXPIRATION_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse()
            .unwrap_or(7)
    }
}

/// OAuth 일반 설정을 관리하는 구조체
///
/// 모든 OAuth 프로바이더에 공통으로 적용되는 보안 설정을 관리합니다.
/// CSRF 공격 방지를 위한 state 매개변수 처리를 포함합니다.
pub struct OAuthConfig;

impl OAuthConfig {
    /// OAuth State 검증용 비밀키를 반환합니다.
    ///
    /// CSRF 공격 방지를 위한 state 매개변수 생성 및 검증에 사용됩니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 "oauth-state-secret"을 사용하지만,
    /// 경고 로그가 출력됩니다.
    pub fn state_secret() -> String {
        env::var("OAUTH_STATE_SECRET").unwrap_or_else(|_| {
            log::warn!("OAUTH_STATE_SECRET not set, using default (not secure for production!)");
            "oauth-state-secret".to_string()
        })
    }
}

/// Google reCAPTCHA v3 설정을 관리하는 구조체
///
/// 익명 링크 생성의 봇 남용을 막기 위한 캡차 검증 설정입니다.
/// 시크릿이 설정되지 않으면 캡차 검증 자체가 비활성화됩니다.
pub struct CaptchaConfig;

impl CaptchaConfig {
    /// reCAPTCHA 시크릿 키를 반환합니다.
    ///
    /// `RECAPTCHA_SECRET` 환경 변수가 비어있거나 설정되지 않은 경우
    /// `None`을 반환하며, 이때 캡차 검증은 수행되지 않습니다.
    pub fn secret() -> Option<String> {
        env::var("RECAPTCHA_SECRET").ok().filter(|s| !s.is_empty())
    }

    /// 사람으로 판정할 최소 점수를 반환합니다.
    ///
    /// reCAPTCHA v3는 0.0(봇)부터 1.0(사람) 사이의 점수를 매깁니다.
    ///
    /// # Environment Variables
    ///
    /// - `RECAPTCHA_SCORE_THRESHOLD`: 최소 점수 (기본값: 0.5)
    pub fn score_threshold() -> f32 {
        env::var("RECAPTCHA_SCORE_THRESHOLD")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.5)
    }
}

/// 지원하는 인증 공급자를 나타내는 열거형
///
/// Spring Security의 OAuth2 Client Registration과 유사한 개념으로,
/// 다양한 인증 방식을 추상화하여 통일된 인터페이스를 제공합니다.
///
/// ## 직렬화 지원
///
/// `serde`를 통해 소문자 문자열로 직렬화되므로 API 응답이나
/// 데이터베이스 저장에 그대로 사용할 수 있습니다.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// 익명 사용자 (인증 없음)
    ///
    /// 로그인하지 않은 사용자도 제한된 기능(고정 3개월 TTL 링크 생성)을
    /// 사용할 수 있습니다. 데이터베이스에 사용자 레코드가 생성되지 않습니다.
    Anonymous,

    /// Google OAuth 2.0 인증
    Google,

    /// GitHub OAuth 인증
    ///
    /// 개발자 대상 서비스에 적합한 GitHub 계정 기반 인증입니다.
    GitHub,
}

impl AuthProvider {
    /// 문자열에서 AuthProvider를 생성합니다.
    ///
    /// # 지원되는 값
    ///
    /// - `"anonymous"` → `AuthProvider::Anonymous`
    /// - `"google"` → `AuthProvider::Google`
    /// - `"github"` → `AuthProvider::GitHub`
    ///
    /// 대소문자는 구분하지 않으며, 지원하지 않는 프로바이더는
    /// `Err(String)`을 반환합니다.
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "anonymous" => Ok(AuthProvider::Anonymous),
            "google" => Ok(AuthProvider::Google),
            "github" => Ok(AuthProvider::GitHub),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    /// AuthProvider를 소문자 문자열 표현으로 변환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Anonymous => "anonymous",
            AuthProvider::Google => "google",
            AuthProvider::GitHub => "github",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_provider_from_string() {
        assert_eq!(
            AuthProvider::from_str("anonymous").unwrap(),
            AuthProvider::Anonymous
        );
        assert_eq!(
            AuthProvider::from_str("google").unwrap(),
            AuthProvider::Google
        );
        assert_eq!(
            AuthProvider::from_str("github").unwrap(),
            AuthProvider::GitHub
        );

        // 대소문자 무관 테스트
        assert_eq!(
            AuthProvider::from_str("GOOGLE").unwrap(),
            AuthProvider::Google
        );
        assert_eq!(
            AuthProvider::from_str("GitHub").unwrap(),
            AuthProvider::GitHub
        );

        // 지원하지 않는 프로바이더 테스트
        assert!(AuthProvider::from_str("facebook").is_err());
        assert!(AuthProvider::from_str("unknown").is_err());
    }

    #[test]
    fn test_auth_provider_as_string() {
        assert_eq!(AuthProvider::Anonymous.as_str(), "anonymous");
        assert_eq!(AuthProvider::Google.as_str(), "google");
        assert_eq!(AuthProvider::GitHub.as_str(), "github");
    }

    #[test]
    fn test_auth_provider_roundtrip() {
        let providers = ["anonymous", "google", "github"];

        for &provider_str in &providers {
            let provider = AuthProvider::from_str(provider_str).unwrap();
            assert_eq!(provider.as_str(), provider_str);
        }
    }

    #[test]
    fn test_auth_provider_serialization() {
        let provider = AuthProvider::Google;
        let json = serde_json::to_string(&provider).unwrap();
        assert_eq!(json, "\"google\"");

        let deserialized: AuthProvider = serde_json::from_str(&json).unwrap();
        assert_eq!(provider, deserialized);
    }
}
