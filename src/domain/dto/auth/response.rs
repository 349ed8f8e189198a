//! 인증 응답 DTO
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;
use crate::domain::entities::users::User;
use crate::domain::models::token::TokenPair;

/// 로그인/토큰 갱신 응답 DTO
///
/// OAuth 2.0 표준의 토큰 응답 형식을 따르며,
/// 로그인 시에는 사용자 프로필도 함께 반환합니다.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

impl AuthResponse {
    /// 토큰 쌍과 사용자 정보로 로그인 응답을 구성합니다.
    pub fn from_token_pair(pair: TokenPair, user: Option<UserResponse>) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            expires_in: pair.expires_in,
            user,
        }
    }
}

/// OAuth 로그인 URL 응답 DTO
///
/// 클라이언트는 `state`를 세션에 저장한 뒤 `login_url`로 리다이렉트하고,
/// 프로바이더 콜백에서 돌려받은 state와 비교하여 CSRF를 방지합니다.
#[derive(Debug, Serialize, Deserialize)]
pub struct OAuthLoginUrlResponse {
    pub login_url: String,
    pub state: String,
}

/// 사용자 응답 DTO
///
/// 클라이언트에 노출 가능한 프로필 정보만 포함합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub display_name: String,
    /// 인증 프로바이더 (Google, GitHub)
    pub auth_provider: AuthProvider,
    pub profile_image_url: Option<String>,
    pub last_login_at: Option<DateTime>,
    pub created_at: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            display_name,
            auth_provider,
            profile_image_url,
            last_login_at,
            created_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            email,
            display_name,
            auth_provider,
            profile_image_url,
            last_login_at,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_from_entity() {
        let user = User::new_oauth(
            "dev@example.com".to_string(),
            "Dev".to_string(),
            AuthProvider::Google,
            "1234567890".to_string(),
            Some("https://example.com/avatar.png".to_string()),
        );

        let response = UserResponse::from(user);

        assert_eq!(response.id, "");
        assert_eq!(response.email, "dev@example.com");
        assert_eq!(response.auth_provider, AuthProvider::Google);
        assert_eq!(
            response.profile_image_url.as_deref(),
            Some("https://example.com/avatar.png")
        );
    }
}
