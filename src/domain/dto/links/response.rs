//! 링크 관련 응답 DTO
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::links::{ExpiresType, Link};

/// 링크 생성 응답 DTO
///
/// 생성된 단축 URL만 반환합니다. 원본 시스템의 와이어 포맷과
/// 동일하게 `short_url` 필드 하나로 구성됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLinkResponse {
    /// 완성된 단축 URL (`https://{base_host}/{hash}`)
    pub short_url: String,
}

/// 링크 단건 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkResponse {
    /// 단축 해시
    pub hash: String,
    /// 완성된 단축 URL
    pub short_url: String,
    /// 리다이렉트 대상 URL
    pub redirect_url: String,
    /// 만료 정책
    pub expires_type: ExpiresType,
    /// 만료 시각 (무제한 링크는 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime>,
    /// 생성 시간
    pub created_at: DateTime,
}

impl LinkResponse {
    /// 엔티티와 계산된 해시/단축 URL로 응답을 구성합니다.
    ///
    /// 해시는 저장되지 않고 `link_id`에서 재계산되므로
    /// `From<Link>` 대신 명시적 팩토리를 사용합니다.
    pub fn from_link(link: Link, hash: String, short_url: String) -> Self {
        Self {
            hash,
            short_url,
            redirect_url: link.redirect_url,
            expires_type: link.expires_type,
            expires_at: link.expires_at,
            created_at: link.created_at,
        }
    }
}

/// 페이지네이션된 링크 목록 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkListResponse {
    pub links: Vec<LinkResponse>,
    /// 현재 페이지 (1부터 시작)
    pub page: u64,
    /// 페이지 크기
    pub per_page: u64,
    /// 전체 링크 수
    pub total: u64,
}
