//! 링크 생성 요청 DTO
//!
//! 단축 링크 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::links::ExpiresType;

/// 단축 링크 생성을 위한 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
/// URL의 형식 검증과 정규화는 서비스 계층에서 수행되며,
/// 여기서는 존재 여부와 길이만 검사합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// 리다이렉트 대상 URL
    #[validate(length(min = 1, max = 2048, message = "URL은 1-2048자 사이여야 합니다"))]
    pub url: String,

    /// 만료 정책 ("3months" | "6months" | "12months" | "never")
    ///
    /// 익명 생성 엔드포인트에서는 생략 가능하며 항상 3개월이 적용됩니다.
    /// 인증 생성 엔드포인트에서는 핸들러가 명시를 요구합니다.
    #[serde(default)]
    pub ttl: Option<ExpiresType>,
}

/// 링크 목록 조회 쿼리 파라미터
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ListLinksQuery {
    /// 페이지 번호 (1부터 시작)
    #[serde(default = "default_page")]
    #[validate(range(min = 1, max = 1_000_000, message = "페이지는 1-1000000 사이여야 합니다"))]
    pub page: u64,

    /// 페이지 크기
    #[serde(default = "default_per_page")]
    #[validate(range(min = 1, max = 100, message = "페이지 크기는 1-100 사이여야 합니다"))]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_link_request_deserialization() {
        let json = r#"{"url": "https://example.com/page", "ttl": "6months"}"#;
        let request: CreateLinkRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.url, "https://example.com/page");
        assert_eq!(request.ttl, Some(ExpiresType::SixMonths));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_link_request_allows_missing_ttl() {
        let json = r#"{"url": "https://example.com/page"}"#;
        let request: CreateLinkRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.ttl, None);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_link_request_rejects_empty_url() {
        let request = CreateLinkRequest {
            url: String::new(),
            ttl: Some(ExpiresType::Never),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_link_request_rejects_unknown_ttl() {
        let json = r#"{"url": "https://example.com", "ttl": "forever"}"#;
        let result: Result<CreateLinkRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_links_query_defaults() {
        let query: ListLinksQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 20);
    }

    #[test]
    fn test_list_links_query_rejects_huge_page() {
        let query = ListLinksQuery {
            page: u64::MAX,
            per_page: 20,
        };
        assert!(query.validate().is_err());
    }
}
