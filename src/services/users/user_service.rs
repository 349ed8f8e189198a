//! 사용자 관리 서비스 구현
//!
//! 사용자 프로필 조회와 계정 삭제를 담당합니다.
//! Spring Framework의 `@Service` 계층과 동일한 역할입니다.

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    domain::dto::auth::response::UserResponse,
    repositories::users::user_repo::UserRepository,
};
use crate::errors::errors::AppError;

/// 사용자 관리 서비스
///
/// `#[service]` 매크로를 통해 싱글톤으로 관리되며,
/// UserRepository 의존성이 자동으로 주입됩니다.
#[service(name = "user")]
pub struct UserService {
    /// 사용자 리포지토리 (자동 주입)
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// ID로 사용자 프로필을 조회합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 클라이언트에 노출 가능한 프로필 정보
    /// * `Err(AppError::NotFound)` - 존재하지 않는 사용자
    pub async fn get_user_by_id(&self, id: &str) -> Result<UserResponse, AppError> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("존재하지 않는 사용자입니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 사용자 계정을 삭제합니다.
    ///
    /// # 반환값
    ///
    /// * `Err(AppError::NotFound)` - 존재하지 않는 사용자
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.user_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("존재하지 않는 사용자입니다".to_string()));
        }

        log::info!("✅ 사용자 삭제 완료 - id: {}", id);
        Ok(())
    }
}
