//! Authentication HTTP Handlers
//!
//! 사용자 인증과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! OAuth 2.0 소셜 로그인과 JWT 토큰 기반의 상태 없는 인증을 구현합니다.
//!
//! # Endpoints
//!
//! - **OAuth 로그인**: `POST /api/auth/oauth` (provider + code → JWT 쌍)
//! - **로그인 URL**: `GET /api/auth/{google,github}/login-url`
//! - **토큰 갱신**: `POST /api/auth/refresh`
//! - **로그아웃**: `POST /api/auth/logout` (인증 필요)
//! - **내 정보**: `GET /api/auth/me`, `DELETE /api/auth/me` (인증 필요)

use actix_web::{delete, get, post, web, HttpResponse};
use serde_json::json;
use validator::Validate;
use crate::{
    config::AuthProvider,
    repositories::tokens::token_repository::TokenRepository,
    repositories::users::user_repo::UserRepository,
    services::{
        auth::{GithubAuthService, GoogleAuthService, TokenService},
        users::user_service::UserService,
    },
};
use crate::domain::dto::auth::request::{OAuthSignInRequest, RefreshTokenRequest};
use crate::domain::dto::auth::response::{AuthResponse, UserResponse};
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::errors::errors::AppError;

/// OAuth 로그인 핸들러
///
/// 클라이언트가 프로바이더에서 받은 authorization code를 JWT 토큰 쌍으로
/// 교환합니다. 첫 로그인 시 사용자가 자동으로 생성됩니다.
///
/// # Endpoint
/// `POST /api/auth/oauth`
#[post("/oauth")]
pub async fn oauth_sign_in(
    payload: web::Json<OAuthSignInRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let provider = AuthProvider::from_str(&payload.provider)
        .map_err(|e| AppError::ValidationError(e))?;

    let user = match provider {
        AuthProvider::Google => {
            GoogleAuthService::instance()
                .authenticate_with_code(&payload.code)
                .await?
        }
        AuthProvider::GitHub => {
            GithubAuthService::instance()
                .authenticate_with_code(&payload.code)
                .await?
        }
        AuthProvider::Anonymous => {
            return Err(AppError::ValidationError(
                "익명 프로바이더로는 로그인할 수 없습니다".to_string(),
            ));
        }
    };

    let user_id = user.id_string().ok_or_else(|| {
        AppError::InternalError("사용자 ID가 없습니다".to_string())
    })?;

    log::info!("OAuth 로그인 성공 - 사용자: {}, ID: {}", user.email, user_id);

    let token_service = TokenService::instance();
    let token_pair = token_service.generate_token_pair(&user)?;

    // Redis에 리프레시 토큰 저장 (사용자당 단일 세션)
    if let Some(refresh_token) = &token_pair.refresh_token {
        TokenRepository::instance()
            .store_refresh_token(
                &user_id,
                provider.as_str(),
                refresh_token,
                token_service.refresh_token_ttl_seconds(),
            )
            .await?;
    }

    let response = AuthResponse::from_token_pair(token_pair, Some(UserResponse::from(user)));
    Ok(HttpResponse::Ok().json(response))
}

/// Google OAuth 로그인 URL 생성 핸들러
///
/// # Endpoint
/// `GET /api/auth/google/login-url`
#[get("/google/login-url")]
pub async fn google_login_url() -> Result<HttpResponse, AppError> {
    let google_service = GoogleAuthService::instance();
    let url_response = google_service.get_login_url()?;

    Ok(HttpResponse::Ok().json(url_response))
}

/// GitHub OAuth 로그인 URL 생성 핸들러
///
/// # Endpoint
/// `GET /api/auth/github/login-url`
#[get("/github/login-url")]
pub async fn github_login_url() -> Result<HttpResponse, AppError> {
    let github_service = GithubAuthService::instance();
    let url_response = github_service.get_login_url()?;

    Ok(HttpResponse::Ok().json(url_response))
}

/// 토큰 갱신 핸들러
///
/// 유효한 리프레시 토큰으로 새 토큰 쌍을 발급합니다.
/// Redis에 저장된 토큰과 일치해야 하며, 갱신 시 기존 리프레시 토큰은
/// 새 토큰으로 교체됩니다 (rotation).
///
/// # Endpoint
/// `POST /api/auth/refresh`
#[post("/refresh")]
pub async fn refresh_tokens(
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let token_service = TokenService::instance();

    // 1. 리프레시 토큰 서명/만료 검증
    let claims = token_service.verify_token(&payload.refresh_token)?;

    // 2. Redis에 저장된 토큰과 대조
    let token_repo = TokenRepository::instance();
    let stored = token_repo
        .get_refresh_token(&claims.sub, &payload.refresh_token)
        .await?
        .ok_or_else(|| {
            AppError::AuthenticationError("이미 무효화된 리프레시 토큰입니다".to_string())
        })?;

    // 3. 사용자 존재 확인 후 새 토큰 쌍 발급
    let user = UserRepository::instance()
        .find_by_id(&claims.sub)
        .await?
        .ok_or_else(|| AppError::AuthenticationError("존재하지 않는 사용자입니다".to_string()))?;

    let token_pair = token_service.generate_token_pair(&user)?;

    if let Some(refresh_token) = &token_pair.refresh_token {
        token_repo
            .store_refresh_token(
                &claims.sub,
                &stored.auth_provider,
                refresh_token,
                token_service.refresh_token_ttl_seconds(),
            )
            .await?;
    }

    let response = AuthResponse::from_token_pair(token_pair, None);
    Ok(HttpResponse::Ok().json(response))
}

/// 로그아웃 핸들러
///
/// Redis에 저장된 리프레시 토큰을 삭제하여 세션을 종료합니다.
/// 액세스 토큰은 만료 시까지 유효하므로 클라이언트에서 폐기해야 합니다.
///
/// # Endpoint
/// `POST /api/auth/logout`
#[post("/logout")]
pub async fn logout(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    TokenRepository::instance()
        .delete_refresh_token(&user.user_id)
        .await?;

    log::info!("로그아웃 완료 - user_id: {}", user.user_id);

    Ok(HttpResponse::Ok().json(json!({
        "message": "로그아웃되었습니다"
    })))
}

/// 현재 사용자 정보 조회 핸들러
///
/// # Endpoint
/// `GET /api/auth/me`
#[get("/me")]
pub async fn get_current_user(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let user_service = UserService::instance();
    let profile = user_service.get_user_by_id(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// 계정 삭제 핸들러
///
/// 사용자 계정과 리프레시 토큰 세션을 함께 삭제합니다.
/// 사용자가 생성한 링크는 남지만 소유자 없는 링크가 됩니다.
///
/// # Endpoint
/// `DELETE /api/auth/me`
#[delete("/me")]
pub async fn delete_current_user(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let user_service = UserService::instance();
    user_service.delete_user(&user.user_id).await?;

    TokenRepository::instance()
        .delete_refresh_token(&user.user_id)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
