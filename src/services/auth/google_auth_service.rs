//! # Google OAuth 2.0 인증 서비스
//!
//! Google OAuth 2.0 프로토콜을 통한 소셜 로그인 기능을 제공합니다.
//! RFC 6749 OAuth 2.0 표준과 Google의 OAuth 2.0 구현을 준수하며,
//! Spring Security OAuth2와 유사한 인증 플로우를 구현합니다.
//!
//! ## OAuth 2.0 Authorization Code Flow
//!
//! ```text
//! ┌─────────────┐                    ┌─────────────────┐                  ┌─────────────────┐
//! │  클라이언트   │                    │   우리 서버      │                  │  Google OAuth   │
//! └─────────────┘                    └─────────────────┘                  └─────────────────┘
//!        │                                    │                                   │
//!        │ 1. GET /api/auth/google/login-url  │                                   │
//!        ├───────────────────────────────────►│                                   │
//!        │ 2. login_url + state               │                                   │
//!        │◄───────────────────────────────────┤                                   │
//!        │                                    │                                   │
//!        │ 3. 사용자가 Google에서 인증          │                                   │
//!        ├───────────────────────────────────────────────────────────────────────►│
//!        │ 4. code와 함께 리다이렉트            │                                   │
//!        │◄───────────────────────────────────────────────────────────────────────┤
//!        │                                    │                                   │
//!        │ 5. POST /api/auth/sign-in {code}   │                                   │
//!        ├───────────────────────────────────►│                                   │
//!        │                                    │ 6. code → access_token 교환       │
//!        │                                    ├──────────────────────────────────►│
//!        │                                    │ 7. 사용자 프로필 조회              │
//!        │                                    ├──────────────────────────────────►│
//!        │                                    │ 8. 계정 조회/생성                  │
//!        │ 9. JWT 토큰 쌍 반환                 │                                   │
//!        │◄───────────────────────────────────┤                                   │
//! ```
//!
//! ## Google API 통합
//!
//! | 용도 | 엔드포인트 | 메서드 |
//! |------|------------|--------|
//! | **Authorization** | `https://accounts.google.com/o/oauth2/auth` | GET |
//! | **Token Exchange** | `https://oauth2.googleapis.com/token` | POST |
//! | **User Info** | `https://www.googleapis.com/oauth2/v2/userinfo` | GET |
//!
//! ### 필요한 OAuth 스코프
//!
//! - `openid`: OpenID Connect 식별자
//! - `email`: 사용자 이메일 주소
//! - `profile`: 기본 프로필 정보 (이름, 사진 등)

use std::sync::Arc;
use singleton_macro::service;
use uuid::Uuid;
use crate::{
    config::{AuthProvider, GoogleOAuthConfig, OAuthConfig},
    domain::entities::users::user::User,
    repositories::users::user_repo::UserRepository,
};
use crate::domain::dto::auth::response::OAuthLoginUrlResponse;
use crate::domain::models::oauth::google::{GoogleTokenResponse, GoogleUserInfo};
use crate::errors::errors::AppError;

/// Google OAuth 2.0 인증 서비스
///
/// Google의 OAuth 2.0 프로토콜을 사용한 소셜 로그인 기능을 제공합니다.
/// 토큰 교환, 사용자 정보 조회, 계정 생성/로그인까지의 전체 플로우를 관리합니다.
///
/// ## 설정 의존성
///
/// ```bash
/// GOOGLE_CLIENT_ID=your-client-id.googleusercontent.com
/// GOOGLE_CLIENT_SECRET=your-client-secret
/// GOOGLE_REDIRECT_URI=https://yourapp.com/auth/google/callback
/// OAUTH_STATE_SECRET=your-state-secret
/// ```
#[service(name = "googleauth")]
pub struct GoogleAuthService {
    /// 사용자 리포지토리 (자동 주입)
    user_repo: Arc<UserRepository>,
}

impl GoogleAuthService {
    /// Google OAuth 로그인 URL 생성
    ///
    /// 사용자를 Google 인증 페이지로 리다이렉트하기 위한 Authorization URL을 생성합니다.
    /// OAuth 2.0 Authorization Code Grant 플로우의 첫 번째 단계입니다.
    ///
    /// state는 응답에 포함되며, 클라이언트가 콜백에서 돌려받은 값과
    /// 비교하여 CSRF 공격을 방지합니다.
    ///
    /// # 생성되는 URL 구조
    ///
    /// ```text
    /// https://accounts.google.com/o/oauth2/auth?
    ///   client_id=YOUR_CLIENT_ID&
    ///   redirect_uri=https://yourapp.com/auth/google/callback&
    ///   scope=openid%20email%20profile&
    ///   response_type=code&
    ///   state=CSRF_PROTECTION_VALUE
    /// ```
    pub fn get_login_url(&self) -> Result<OAuthLoginUrlResponse, AppError> {
        let state = generate_oauth_state()?;

        let params = [
            ("client_id", GoogleOAuthConfig::client_id()),
            ("redirect_uri", GoogleOAuthConfig::redirect_uri()),
            ("scope", "openid email profile".to_string()),
            ("response_type", "code".to_string()),
            ("state", state.clone()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let login_url = format!("{}?{}", GoogleOAuthConfig::auth_uri(), query_string);

        Ok(OAuthLoginUrlResponse { login_url, state })
    }

    /// Authorization Code를 사용하여 사용자 인증 및 계정 처리
    ///
    /// Google OAuth 콜백에서 받은 Authorization Code를 처리하여
    /// 사용자 인증을 완료하고 계정 생성 또는 로그인을 수행합니다.
    ///
    /// # 처리 단계
    ///
    /// 1. **토큰 교환**: Authorization Code → Access Token
    /// 2. **사용자 정보 조회**: Google API로부터 프로필 정보 획득
    /// 3. **이메일 검증 확인**: 미검증 이메일 계정 거부
    /// 4. **계정 처리**: `(google, provider_user_id)` 기준 조회 후 생성 또는 로그인
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 인증된 사용자 엔티티
    /// * `Err(AppError::AuthenticationError)` - 미검증 이메일
    /// * `Err(AppError::ExternalServiceError)` - Google API 통신 오류
    pub async fn authenticate_with_code(&self, auth_code: &str) -> Result<User, AppError> {
        let token_response = self.exchange_code_for_token(auth_code).await?;
        let google_user = self.get_user_info(&token_response.access_token).await?;

        if !google_user.verified_email {
            return Err(AppError::AuthenticationError(
                "이메일이 검증되지 않은 Google 계정입니다".to_string(),
            ));
        }

        match self
            .user_repo
            .find_by_provider(&AuthProvider::Google, &google_user.id)
            .await?
        {
            Some(existing_user) => {
                log::info!("Google 사용자 로그인: {}", existing_user.email);
                if let Some(id) = &existing_user.id {
                    self.user_repo.touch_last_login(id).await?;
                }
                Ok(existing_user)
            }
            None => {
                log::info!("새 Google 사용자 등록: {}", google_user.email);
                let user = User::new_oauth(
                    google_user.email,
                    google_user.name,
                    AuthProvider::Google,
                    google_user.id,
                    google_user.picture,
                );
                self.user_repo.create(user).await
            }
        }
    }

    /// Authorization Code를 Access Token으로 교환
    ///
    /// ```text
    /// POST https://oauth2.googleapis.com/token
    /// Content-Type: application/x-www-form-urlencoded
    ///
    /// code=AUTHORIZATION_CODE&
    /// client_id=YOUR_CLIENT_ID&
    /// client_secret=YOUR_CLIENT_SECRET&
    /// redirect_uri=YOUR_REDIRECT_URI&
    /// grant_type=authorization_code
    /// ```
    async fn exchange_code_for_token(&self, auth_code: &str) -> Result<GoogleTokenResponse, AppError> {
        let client = reqwest::Client::new();

        let params = [
            ("code", auth_code),
            ("client_id", &GoogleOAuthConfig::client_id()),
            ("client_secret", &GoogleOAuthConfig::client_secret()),
            ("redirect_uri", &GoogleOAuthConfig::redirect_uri()),
            ("grant_type", "authorization_code"),
        ];

        let response = client
            .post(&GoogleOAuthConfig::token_uri())
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 토큰 교환 실패: {}", error_text
            )));
        }

        response
            .json::<GoogleTokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 응답 파싱 실패: {}", e)))
    }

    /// Access Token으로 Google 사용자 정보 조회
    ///
    /// ```text
    /// GET https://www.googleapis.com/oauth2/v2/userinfo
    /// Authorization: Bearer ACCESS_TOKEN
    /// ```
    async fn get_user_info(&self, access_token: &str) -> Result<GoogleUserInfo, AppError> {
        let client = reqwest::Client::new();

        let response = client
            .get("https://www.googleapis.com/oauth2/v2/userinfo")
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 사용자 정보 조회 실패: {}", error_text
            )));
        }

        response
            .json::<GoogleUserInfo>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 사용자 정보 파싱 실패: {}", e)))
    }
}

/// OAuth State 매개변수 생성
///
/// CSRF 공격 방지용 state 값을 생성합니다.
/// UUID nonce와 서버 시크릿을 결합해 예측할 수 없는 값을 만듭니다.
pub(crate) fn generate_oauth_state() -> Result<String, AppError> {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let nonce = Uuid::new_v4();
    let state_data = format!("{}:{}", nonce.simple(), OAuthConfig::state_secret());

    let mut hasher = DefaultHasher::new();
    state_data.hash(&mut hasher);

    Ok(format!("{}{:x}", nonce.simple(), hasher.finish()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_oauth_state_is_unique() {
        let first = generate_oauth_state().unwrap();
        let second = generate_oauth_state().unwrap();

        assert!(!first.is_empty());
        assert_ne!(first, second);
    }
}
