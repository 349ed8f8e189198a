//! # 단축 링크 서비스 구현
//!
//! 단축 링크의 전체 생명주기를 담당하는 핵심 비즈니스 서비스입니다.
//! Spring Framework의 `@Service` 계층과 동일한 역할을 수행하며,
//! 리포지토리와 해시 서비스를 조합하여 링크 생성부터 리다이렉트까지의
//! 흐름을 관리합니다.
//!
//! ## 링크 생성 흐름
//!
//! ```text
//! 원본 URL 입력
//!       │
//!       ▼
//! URL 정규화 및 검증 (스킴 보정, 형식 확인)
//!       │
//!       ▼
//! 카운터에서 순차 link_id 발급 (MongoDB $inc)
//!       │
//!       ▼
//! Link 엔티티 저장 (만료 시각 계산 포함)
//!       │
//!       ▼
//! link_id → Base62 해시 인코딩
//!       │
//!       ▼
//! https://{base_host}/{hash} 반환
//! ```
//!
//! ## 리다이렉트 흐름
//!
//! 해시를 디코딩하여 link_id를 복원한 뒤 Redis 캐시를 경유해
//! 링크를 조회합니다. 존재하지 않거나 만료된 링크는 동일하게
//! `NotFound`로 처리하여 외부에서 구분할 수 없게 합니다.

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use singleton_macro::service;
use crate::{
    config::ShortLinkConfig,
    domain::dto::links::response::{CreateLinkResponse, LinkListResponse, LinkResponse},
    domain::entities::links::link::{ExpiresType, Link},
    repositories::links::link_repo::LinkRepository,
    utils::url_utils::normalize_url,
};
use crate::errors::errors::AppError;
use super::hash_service::HashService;

/// 단축 링크 비즈니스 서비스
///
/// `#[service]` 매크로를 통해 싱글톤으로 관리되며,
/// LinkRepository와 HashService 의존성이 자동으로 주입됩니다.
#[service(name = "link")]
pub struct LinkService {
    /// 링크 리포지토리 (자동 주입)
    link_repo: Arc<LinkRepository>,
    /// Base62 해시 변환 서비스 (자동 주입)
    hash_service: Arc<HashService>,
}

impl LinkService {
    /// 새 단축 링크를 생성합니다.
    ///
    /// # 인자
    ///
    /// * `user_id` - 소유자 ID (`None`이면 익명 링크)
    /// * `url` - 단축할 원본 URL
    /// * `expires_type` - 링크 수명 (3개월, 6개월, 12개월, 무제한)
    ///
    /// # 반환값
    ///
    /// * `Ok(CreateLinkResponse)` - 생성된 단축 URL
    /// * `Err(AppError::ValidationError)` - URL 형식 오류
    /// * `Err(AppError::DatabaseError)` - 저장 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let link_service = LinkService::instance();
    /// let response = link_service
    ///     .create_link(None, "example.com/page", ExpiresType::ThreeMonths)
    ///     .await?;
    /// // response.short_url == "https://short.twb.one/100000"
    /// ```
    pub async fn create_link(
        &self,
        user_id: Option<ObjectId>,
        url: &str,
        expires_type: ExpiresType,
    ) -> Result<CreateLinkResponse, AppError> {
        let redirect_url = normalize_url(url)?;

        let link_id = self.link_repo.next_link_id().await?;
        let link = Link::new(link_id, user_id, redirect_url, expires_type);
        self.link_repo.create(link).await?;

        let hash = self.hash_service.encode(link_id)?;
        let short_url = self.build_short_url(&hash);

        log::info!("✅ 단축 링크 생성 완료 - hash: {}, link_id: {}", hash, link_id);

        Ok(CreateLinkResponse { short_url })
    }

    /// 해시를 원본 URL로 해석합니다 (리다이렉트용).
    ///
    /// 존재하지 않는 해시와 만료된 링크는 모두 `NotFound`로 처리합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(String)` - 리다이렉트할 원본 URL
    /// * `Err(AppError::NotFound)` - 링크 없음 또는 만료
    /// * `Err(AppError::ValidationError)` - 잘못된 해시 형식
    pub async fn resolve(&self, hash: &str) -> Result<String, AppError> {
        let link_id = self.hash_service.decode(hash)?;

        let link = self
            .link_repo
            .find_by_link_id(link_id)
            .await?
            .ok_or_else(|| AppError::NotFound("존재하지 않는 링크입니다".to_string()))?;

        if link.is_expired() {
            return Err(AppError::NotFound("만료된 링크입니다".to_string()));
        }

        Ok(link.redirect_url)
    }

    /// 사용자의 링크 목록을 페이지 단위로 조회합니다.
    ///
    /// 각 링크의 해시와 단축 URL은 저장하지 않고 link_id에서 재계산합니다.
    pub async fn list_links(
        &self,
        user_id: &str,
        page: u64,
        per_page: u64,
    ) -> Result<LinkListResponse, AppError> {
        let owner_id = Self::parse_user_id(user_id)?;

        let (links, total) = self.link_repo.list_by_user(&owner_id, page, per_page).await?;

        let mut responses = Vec::with_capacity(links.len());
        for link in links {
            let hash = self.hash_service.encode(link.link_id)?;
            let short_url = self.build_short_url(&hash);
            responses.push(LinkResponse::from_link(link, hash, short_url));
        }

        Ok(LinkListResponse {
            links: responses,
            page,
            per_page,
            total,
        })
    }

    /// 사용자 소유의 링크를 삭제합니다.
    ///
    /// 소유자가 아닌 사용자의 요청이나 존재하지 않는 해시는
    /// 동일하게 `NotFound`로 처리합니다.
    pub async fn delete_link(&self, hash: &str, user_id: &str) -> Result<(), AppError> {
        let owner_id = Self::parse_user_id(user_id)?;
        let link_id = self.hash_service.decode(hash)?;

        let deleted = self.link_repo.delete_by_link_id(link_id, &owner_id).await?;
        if !deleted {
            return Err(AppError::NotFound("존재하지 않는 링크입니다".to_string()));
        }

        log::info!("✅ 링크 삭제 완료 - hash: {}, user_id: {}", hash, user_id);
        Ok(())
    }

    /// 만료된 링크들을 일괄 삭제합니다 (백그라운드 정리 작업용).
    ///
    /// # 반환값
    ///
    /// * `Ok(u64)` - 삭제된 링크 수
    pub async fn purge_expired(&self) -> Result<u64, AppError> {
        let deleted = self.link_repo.delete_all_expired().await?;
        if deleted > 0 {
            log::info!("🔧 만료 링크 정리 완료 - 삭제: {}건", deleted);
        }
        Ok(deleted)
    }

    fn build_short_url(&self, hash: &str) -> String {
        format!("https://{}/{}", ShortLinkConfig::base_host(), hash)
    }

    fn parse_user_id(user_id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(user_id).map_err(|_| {
            AppError::AuthenticationError("유효하지 않은 사용자 ID입니다".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id_rejects_malformed() {
        let result = LinkService::parse_user_id("not-an-object-id");
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_parse_user_id_accepts_valid_hex() {
        let oid = ObjectId::new();
        let parsed = LinkService::parse_user_id(&oid.to_hex()).unwrap();
        assert_eq!(parsed, oid);
    }
}
