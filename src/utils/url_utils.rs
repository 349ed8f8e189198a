//! URL 검증 및 정규화 유틸리티
//!
//! 사용자가 입력한 리다이렉트 대상 URL을 저장 가능한 형태로 정규화합니다.
//! 스킴이 생략된 입력(`example.com/page`)은 `https://`를 기본으로 보완하며,
//! http/https 이외의 스킴은 거부합니다.

use url::Url;
use crate::errors::AppError;

/// 입력 문자열을 검증하고 정규화된 절대 URL로 변환합니다
///
/// # 처리 규칙
///
/// 1. 앞뒤 공백 제거
/// 2. 빈 문자열 거부
/// 3. 스킴이 없으면 `https://` 보완
/// 4. http/https 스킴만 허용, 호스트 필수
///
/// # Examples
///
/// ```rust,ignore
/// let url = normalize_url("example.com/page")?;
/// assert_eq!(url, "https://example.com/page");
/// ```
pub fn normalize_url(input: &str) -> Result<String, AppError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(AppError::ValidationError("URL is required".to_string()));
    }

    // 스킴 생략 시 https 기본 적용
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let parsed = Url::parse(&candidate)
        .map_err(|e| AppError::ValidationError(format!("Invalid URL '{}': {}", trimmed, e)))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AppError::ValidationError(format!(
                "Unsupported URL scheme '{}': only http and https are allowed",
                other
            )));
        }
    }

    if parsed.host_str().is_none() {
        return Err(AppError::ValidationError(format!(
            "URL '{}' has no host",
            trimmed
        )));
    }

    Ok(parsed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url_keeps_absolute_url() {
        let result = normalize_url("https://example.com/page?q=1").unwrap();
        assert_eq!(result, "https://example.com/page?q=1");
    }

    #[test]
    fn test_normalize_url_adds_https_scheme() {
        let result = normalize_url("example.com/page").unwrap();
        assert_eq!(result, "https://example.com/page");
    }

    #[test]
    fn test_normalize_url_trims_whitespace() {
        let result = normalize_url("  http://example.com  ").unwrap();
        assert_eq!(result, "http://example.com/");
    }

    #[test]
    fn test_normalize_url_rejects_empty() {
        let result = normalize_url("   ");
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_normalize_url_rejects_non_http_scheme() {
        let result = normalize_url("ftp://example.com/file");
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_normalize_url_rejects_missing_host() {
        let result = normalize_url("https://");
        assert!(result.is_err());
    }
}
