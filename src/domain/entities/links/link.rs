//! Link Entity Implementation
//!
//! 단축 링크 엔티티의 핵심 구현체입니다.
//! 인증 사용자의 링크와 익명 링크를 모두 지원하는 통합 모델을 제공합니다.

use chrono::{Months, Utc};
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 링크 만료 정책
///
/// API 요청과 MongoDB 문서에서 `"3months"` 형태의 문자열로 직렬화됩니다.
/// 익명 링크는 항상 `ThreeMonths`가 강제됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ExpiresType {
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "12months")]
    TwelveMonths,
    #[serde(rename = "never")]
    Never,
}

impl ExpiresType {
    /// 만료까지의 개월 수를 반환합니다. `Never`는 `None`입니다.
    pub fn duration_months(&self) -> Option<u32> {
        match self {
            ExpiresType::ThreeMonths => Some(3),
            ExpiresType::SixMonths => Some(6),
            ExpiresType::TwelveMonths => Some(12),
            ExpiresType::Never => None,
        }
    }

    /// 직렬화와 동일한 문자열 표현을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiresType::ThreeMonths => "3months",
            ExpiresType::SixMonths => "6months",
            ExpiresType::TwelveMonths => "12months",
            ExpiresType::Never => "never",
        }
    }
}

/// 단축 링크 엔티티
///
/// 시스템의 모든 단축 링크를 표현하는 핵심 도메인 엔티티입니다.
/// `link_id`는 카운터 컬렉션에서 발급되는 순차 숫자 ID로,
/// 해시 코덱의 입력이 됩니다. 단축 해시 자체는 저장하지 않고
/// `link_id`에서 항상 재계산합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 순차 숫자 ID (unique). BSON에 u64가 없으므로 i64로 저장합니다.
    pub link_id: i64,
    /// 소유자. 익명 링크는 None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<ObjectId>,
    /// 리다이렉트 대상 URL (정규화된 절대 URL)
    pub redirect_url: String,
    /// 만료 정책
    pub expires_type: ExpiresType,
    /// 만료 시각. `Never`인 경우 None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Link {
    /// 새 링크를 생성합니다.
    ///
    /// `expires_at`은 만료 정책에 따라 생성 시점 기준으로 계산됩니다.
    pub fn new(
        link_id: i64,
        user_id: Option<ObjectId>,
        redirect_url: String,
        expires_type: ExpiresType,
    ) -> Self {
        let now = DateTime::now();

        let expires_at = expires_type.duration_months().and_then(|months| {
            Utc::now()
                .checked_add_months(Months::new(months))
                .map(|dt| DateTime::from_millis(dt.timestamp_millis()))
        });

        Self {
            id: None,
            link_id,
            user_id,
            redirect_url,
            expires_type,
            expires_at,
            created_at: now,
            updated_at: now,
        }
    }

    /// 링크가 만료되었는지 확인합니다.
    ///
    /// `expires_at`이 없는 링크(`Never`)는 만료되지 않습니다.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at.timestamp_millis() < DateTime::now().timestamp_millis(),
            None => false,
        }
    }

    /// 링크가 익명 사용자 소유인지 확인합니다.
    pub fn is_anonymous(&self) -> bool {
        self.user_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_link_has_no_expiry() {
        let link = Link::new(1, None, "https://example.com/".to_string(), ExpiresType::Never);
        assert!(link.expires_at.is_none());
        assert!(!link.is_expired());
    }

    #[test]
    fn test_three_month_link_expires_in_future() {
        let link = Link::new(2, None, "https://example.com/".to_string(), ExpiresType::ThreeMonths);

        let expires_at = link.expires_at.expect("3개월 링크는 만료 시각이 있어야 한다");
        assert!(expires_at.timestamp_millis() > DateTime::now().timestamp_millis());
        assert!(!link.is_expired());
    }

    #[test]
    fn test_past_expiry_is_expired() {
        let mut link = Link::new(3, None, "https://example.com/".to_string(), ExpiresType::ThreeMonths);
        link.expires_at = Some(DateTime::from_millis(0));
        assert!(link.is_expired());
    }

    #[test]
    fn test_anonymous_detection() {
        let anon = Link::new(4, None, "https://example.com/".to_string(), ExpiresType::ThreeMonths);
        assert!(anon.is_anonymous());

        let owned = Link::new(
            5,
            Some(ObjectId::new()),
            "https://example.com/".to_string(),
            ExpiresType::Never,
        );
        assert!(!owned.is_anonymous());
    }

    #[test]
    fn test_expires_type_serialization() {
        assert_eq!(
            serde_json::to_string(&ExpiresType::ThreeMonths).unwrap(),
            "\"3months\""
        );
        assert_eq!(
            serde_json::to_string(&ExpiresType::Never).unwrap(),
            "\"never\""
        );

        let parsed: ExpiresType = serde_json::from_str("\"12months\"").unwrap();
        assert_eq!(parsed, ExpiresType::TwelveMonths);
    }

    #[test]
    fn test_duration_months() {
        assert_eq!(ExpiresType::ThreeMonths.duration_months(), Some(3));
        assert_eq!(ExpiresType::SixMonths.duration_months(), Some(6));
        assert_eq!(ExpiresType::TwelveMonths.duration_months(), Some(12));
        assert_eq!(ExpiresType::Never.duration_months(), None);
    }
}
