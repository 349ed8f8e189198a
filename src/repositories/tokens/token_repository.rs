//! # 리프레시 토큰 리포지토리 구현
//!
//! 리프레시 토큰을 Redis에 저장하고 검증하는 리포지토리입니다.
//! MongoDB를 사용하지 않는 유일한 리포지토리로, 토큰 수명 관리를
//! Redis TTL에 위임하여 만료된 토큰이 자동으로 제거되도록 합니다.

use std::sync::Arc;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use singleton_macro::repository;
use crate::caching::redis::RedisClient;
use crate::core::registry::Repository;
use crate::errors::errors::AppError;

/// Refresh Token 정보 (최소 정보만 저장)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenInfo {
    /// 사용자 ID
    pub user_id: String,
    /// 인증 방식 (google, github)
    pub auth_provider: String,
    /// 로그인 일시 (Unix timestamp)
    pub login_at: i64,
    /// Refresh Token 문자열 (JWT)
    pub refresh_token: String,
    /// 만료 시간 (Unix timestamp)
    pub expires_at: i64,
}

/// 리프레시 토큰 관리 리포지토리
///
/// 사용자당 하나의 리프레시 토큰을 유지합니다. 새 로그인은 기존
/// 토큰을 덮어쓰므로, 토큰 탈취 시에도 재로그인으로 무효화됩니다.
///
/// ## 키 설계
///
/// - **키 패턴**: `refresh_token:{user_id}`
/// - **TTL**: 토큰 수명과 동일 (기본 7일)
#[repository(name = "token", collection = "tokens")]
pub struct TokenRepository {
    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl TokenRepository {
    fn key(user_id: &str) -> String {
        format!("refresh_token:{}", user_id)
    }

    /// Refresh Token을 저장합니다.
    ///
    /// 사용자의 기존 토큰이 있으면 덮어씁니다.
    ///
    /// # 인자
    ///
    /// * `user_id` - 사용자 ID
    /// * `auth_provider` - 인증 방식 (google, github)
    /// * `refresh_token` - 저장할 refresh token
    /// * `ttl_seconds` - TTL (초 단위, 0이면 거부)
    pub async fn store_refresh_token(
        &self,
        user_id: &str,
        auth_provider: &str,
        refresh_token: &str,
        ttl_seconds: u64,
    ) -> Result<(), AppError> {
        if ttl_seconds == 0 {
            return Err(AppError::InternalError(
                "refresh token TTL cannot be zero".to_string(),
            ));
        }

        // 최소 TTL 1분 보장
        let safe_ttl = ttl_seconds.max(60);

        let now = Utc::now().timestamp();
        let token_info = RefreshTokenInfo {
            user_id: user_id.to_string(),
            auth_provider: auth_provider.to_string(),
            login_at: now,
            refresh_token: refresh_token.to_string(),
            expires_at: now + safe_ttl as i64,
        };

        self.redis
            .set_with_expiry(&Self::key(user_id), &token_info, safe_ttl as usize)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        log::info!("Refresh token 저장 완료 - user_id: {}, ttl: {}초", user_id, safe_ttl);
        Ok(())
    }

    /// Refresh Token을 조회하고 검증합니다.
    ///
    /// 저장된 토큰과 제시된 토큰이 일치하고 만료되지 않은 경우에만
    /// 토큰 정보를 반환합니다. 만료된 토큰은 즉시 삭제합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(RefreshTokenInfo))` - 유효한 토큰
    /// * `Ok(None)` - 토큰이 없거나 일치하지 않거나 만료됨
    pub async fn get_refresh_token(
        &self,
        user_id: &str,
        refresh_token: &str,
    ) -> Result<Option<RefreshTokenInfo>, AppError> {
        let key = Self::key(user_id);

        let stored: Option<RefreshTokenInfo> = self
            .redis
            .get(&key)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        match stored {
            Some(token_info) if token_info.refresh_token == refresh_token => {
                if token_info.expires_at > Utc::now().timestamp() {
                    Ok(Some(token_info))
                } else {
                    // Redis TTL이 놓친 만료 토큰 정리
                    self.redis
                        .del(&key)
                        .await
                        .map_err(|e| AppError::RedisError(e.to_string()))?;
                    Ok(None)
                }
            }
            _ => Ok(None),
        }
    }

    /// Refresh Token을 삭제합니다 (로그아웃 시 사용).
    pub async fn delete_refresh_token(&self, user_id: &str) -> Result<(), AppError> {
        self.redis
            .del(&Self::key(user_id))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;
        Ok(())
    }
}
