//! # GitHub OAuth 인증 서비스
//!
//! GitHub OAuth Web Application Flow를 통한 소셜 로그인 기능을 제공합니다.
//! Google과 동일한 Authorization Code 플로우를 따르지만 GitHub API의
//! 고유한 요구사항 두 가지를 추가로 처리합니다.
//!
//! ## GitHub API 고유 사항
//!
//! 1. **Accept 헤더**: 토큰 엔드포인트가 기본적으로 form-urlencoded를
//!    반환하므로 `Accept: application/json`을 명시해야 JSON 응답을 받습니다.
//! 2. **User-Agent 필수**: GitHub API는 User-Agent 헤더가 없는 요청을
//!    403으로 거부합니다.
//! 3. **이메일 비공개 처리**: 프로필의 `email` 필드가 비공개 설정이면
//!    `null`이므로 `/user/emails` 엔드포인트에서 primary+verified
//!    이메일을 조회합니다.
//!
//! ## 사용하는 GitHub 엔드포인트
//!
//! | 용도 | 엔드포인트 | 메서드 |
//! |------|------------|--------|
//! | **Authorization** | `https://github.com/login/oauth/authorize` | GET |
//! | **Token Exchange** | `https://github.com/login/oauth/access_token` | POST |
//! | **User Info** | `https://api.github.com/user` | GET |
//! | **User Emails** | `https://api.github.com/user/emails` | GET |

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    config::{AuthProvider, GithubOAuthConfig},
    domain::entities::users::user::User,
    repositories::users::user_repo::UserRepository,
};
use crate::domain::dto::auth::response::OAuthLoginUrlResponse;
use crate::domain::models::oauth::github::{GithubEmail, GithubTokenResponse, GithubUserInfo};
use crate::errors::errors::AppError;
use super::google_auth_service::generate_oauth_state;

/// GitHub API가 요구하는 User-Agent 값
const GITHUB_USER_AGENT: &str = "link-shortener-backend";

/// GitHub OAuth 인증 서비스
///
/// GitHub Web Application Flow를 사용한 소셜 로그인 기능을 제공합니다.
/// 토큰 교환, 사용자 정보 조회, 계정 생성/로그인까지의 전체 플로우를 관리합니다.
///
/// ## 설정 의존성
///
/// ```bash
/// GITHUB_CLIENT_ID=your-client-id
/// GITHUB_CLIENT_SECRET=your-client-secret
/// GITHUB_REDIRECT_URI=https://yourapp.com/auth/github/callback
/// ```
#[service(name = "githubauth")]
pub struct GithubAuthService {
    /// 사용자 리포지토리 (자동 주입)
    user_repo: Arc<UserRepository>,
}

impl GithubAuthService {
    /// GitHub OAuth 로그인 URL 생성
    ///
    /// 요청 스코프는 `read:user user:email`로, 프로필과 이메일 주소
    /// 조회에 필요한 최소 권한만 요청합니다.
    pub fn get_login_url(&self) -> Result<OAuthLoginUrlResponse, AppError> {
        let state = generate_oauth_state()?;

        let params = [
            ("client_id", GithubOAuthConfig::client_id()),
            ("redirect_uri", GithubOAuthConfig::redirect_uri()),
            ("scope", "read:user user:email".to_string()),
            ("state", state.clone()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let login_url = format!("{}?{}", GithubOAuthConfig::auth_uri(), query_string);

        Ok(OAuthLoginUrlResponse { login_url, state })
    }

    /// Authorization Code를 사용하여 사용자 인증 및 계정 처리
    ///
    /// # 처리 단계
    ///
    /// 1. **토큰 교환**: Authorization Code → Access Token
    /// 2. **사용자 정보 조회**: GitHub API로부터 프로필 정보 획득
    /// 3. **이메일 확보**: 프로필 이메일이 비공개면 `/user/emails`에서 조회
    /// 4. **계정 처리**: `(github, provider_user_id)` 기준 조회 후 생성 또는 로그인
    pub async fn authenticate_with_code(&self, auth_code: &str) -> Result<User, AppError> {
        let token_response = self.exchange_code_for_token(auth_code).await?;
        let github_user = self.get_user_info(&token_response.access_token).await?;

        let email = match &github_user.email {
            Some(email) => email.clone(),
            None => self.get_primary_email(&token_response.access_token).await?,
        };

        let provider_user_id = github_user.id.to_string();

        match self
            .user_repo
            .find_by_provider(&AuthProvider::GitHub, &provider_user_id)
            .await?
        {
            Some(existing_user) => {
                log::info!("GitHub 사용자 로그인: {}", existing_user.email);
                if let Some(id) = &existing_user.id {
                    self.user_repo.touch_last_login(id).await?;
                }
                Ok(existing_user)
            }
            None => {
                log::info!("새 GitHub 사용자 등록: {}", email);
                let display_name = github_user.name.unwrap_or(github_user.login);
                let user = User::new_oauth(
                    email,
                    display_name,
                    AuthProvider::GitHub,
                    provider_user_id,
                    github_user.avatar_url,
                );
                self.user_repo.create(user).await
            }
        }
    }

    /// Authorization Code를 Access Token으로 교환
    ///
    /// `Accept: application/json` 헤더가 없으면 GitHub이
    /// form-urlencoded로 응답하므로 반드시 명시합니다.
    async fn exchange_code_for_token(&self, auth_code: &str) -> Result<GithubTokenResponse, AppError> {
        let client = reqwest::Client::new();

        let params = [
            ("code", auth_code),
            ("client_id", &GithubOAuthConfig::client_id()),
            ("client_secret", &GithubOAuthConfig::client_secret()),
            ("redirect_uri", &GithubOAuthConfig::redirect_uri()),
        ];

        let response = client
            .post(&GithubOAuthConfig::token_uri())
            .header("Accept", "application/json")
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("GitHub 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "GitHub 토큰 교환 실패: {}", error_text
            )));
        }

        response
            .json::<GithubTokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("GitHub 토큰 응답 파싱 실패: {}", e)))
    }

    /// Access Token으로 GitHub 사용자 정보 조회
    async fn get_user_info(&self, access_token: &str) -> Result<GithubUserInfo, AppError> {
        let client = reqwest::Client::new();

        let response = client
            .get(GithubOAuthConfig::user_api_uri())
            .bearer_auth(access_token)
            .header("User-Agent", GITHUB_USER_AGENT)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("GitHub 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "GitHub 사용자 정보 조회 실패: {}", error_text
            )));
        }

        response
            .json::<GithubUserInfo>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("GitHub 사용자 정보 파싱 실패: {}", e)))
    }

    /// 비공개 이메일 사용자의 primary 이메일 조회
    ///
    /// `/user/emails` 응답에서 primary이면서 verified인 주소를 선택합니다.
    async fn get_primary_email(&self, access_token: &str) -> Result<String, AppError> {
        let client = reqwest::Client::new();

        let response = client
            .get(format!("{}/emails", GithubOAuthConfig::user_api_uri()))
            .bearer_auth(access_token)
            .header("User-Agent", GITHUB_USER_AGENT)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("GitHub 이메일 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "GitHub 이메일 조회 실패: {}", error_text
            )));
        }

        let emails = response
            .json::<Vec<GithubEmail>>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("GitHub 이메일 파싱 실패: {}", e)))?;

        emails
            .into_iter()
            .find(|e| e.primary && e.verified)
            .map(|e| e.email)
            .ok_or_else(|| {
                AppError::AuthenticationError(
                    "검증된 primary 이메일이 없는 GitHub 계정입니다".to_string(),
                )
            })
    }
}
