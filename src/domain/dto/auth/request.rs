//! 인증 요청 DTO
//!
//! OAuth 로그인과 토큰 갱신을 위한 HTTP 요청 데이터 구조를 정의합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

/// OAuth 로그인 요청 DTO
///
/// 클라이언트가 프로바이더의 인증 페이지에서 받은 authorization code를
/// 서버로 전달합니다. 서버는 이 코드를 액세스 토큰으로 교환하고
/// 사용자 정보를 가져와 JWT 토큰 쌍을 발급합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OAuthSignInRequest {
    /// 인증 프로바이더 이름 ("google" | "github")
    #[validate(length(min = 1, message = "프로바이더는 필수입니다"))]
    pub provider: String,

    /// 프로바이더가 발급한 authorization code
    #[validate(length(min = 1, message = "인증 코드는 필수입니다"))]
    pub code: String,
}

/// 토큰 갱신 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    /// 리프레시 토큰
    #[validate(length(min = 1, message = "리프레시 토큰은 필수입니다"))]
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oauth_sign_in_request_validation() {
        let request = OAuthSignInRequest {
            provider: "google".to_string(),
            code: "4/0AbCdEf".to_string(),
        };
        assert!(request.validate().is_ok());

        let empty = OAuthSignInRequest {
            provider: String::new(),
            code: String::new(),
        };
        assert!(empty.validate().is_err());
    }
}
