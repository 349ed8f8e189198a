//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! OAuth 인증 사용자만 존재하며, 익명 사용자는 레코드를 만들지 않습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

/// 사용자 엔티티
///
/// 시스템의 모든 인증 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// `(auth_provider, provider_user_id)` 조합이 유일해야 하며,
/// 첫 OAuth 로그인 시점에 생성됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일
    pub email: String,
    /// 표시 이름 (프로바이더 프로필에서 가져옴)
    pub display_name: String,
    /// 인증 프로바이더
    pub auth_provider: AuthProvider,
    /// OAuth 프로바이더에서의 사용자 ID
    pub provider_user_id: String,
    /// 프로필 이미지 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    /// 마지막 로그인 시간
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 OAuth 사용자 생성
    ///
    /// 첫 OAuth 로그인 시점에 호출되어 프로바이더 프로필 정보로
    /// 사용자를 생성합니다.
    pub fn new_oauth(
        email: String,
        display_name: String,
        auth_provider: AuthProvider,
        provider_user_id: String,
        profile_image_url: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            display_name,
            auth_provider,
            provider_user_id,
            profile_image_url,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_oauth_user() {
        let user = User::new_oauth(
            "dev@example.com".to_string(),
            "Dev".to_string(),
            AuthProvider::GitHub,
            "98765".to_string(),
            None,
        );

        assert!(user.id.is_none());
        assert_eq!(user.auth_provider, AuthProvider::GitHub);
        assert_eq!(user.provider_user_id, "98765");
        assert!(user.last_login_at.is_none());
        assert_eq!(user.created_at, user.updated_at);
    }
}
