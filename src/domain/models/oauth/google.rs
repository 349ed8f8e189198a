//! # Google OAuth 응답 모델
//!
//! Google OAuth 2.0 인증 플로우에서 반환되는 토큰과 사용자 정보를
//! 처리하기 위한 데이터 모델을 정의합니다.
//!
//! Google의 OAuth2 UserInfo 엔드포인트(`https://www.googleapis.com/oauth2/v2/userinfo`)와
//! 호환되며, Spring Security OAuth2와 유사한 방식으로 사용자 정보를 매핑합니다.

use serde::Deserialize;

/// Google OAuth 토큰 교환 응답
///
/// `https://oauth2.googleapis.com/token`에 인증 코드를 전달했을 때
/// 반환되는 응답입니다.
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    /// Google API 접근용 액세스 토큰
    pub access_token: String,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
    /// 토큰 타입 (항상 "Bearer")
    pub token_type: String,
    /// 허용된 스코프
    pub scope: String,
    /// OpenID Connect ID 토큰
    #[serde(default)]
    pub id_token: Option<String>,
    /// 리프레시 토큰 (access_type=offline인 경우에만)
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Google OAuth 2.0 사용자 정보 응답 구조체
///
/// ## OAuth 2.0 스코프 요구사항
///
/// | 필드 | 필수 스코프 |
/// |------|-------------|
/// | `id`, `email` | `openid`, `email` |
/// | `name`, `picture` | `profile` |
///
/// ## 보안 고려사항
///
/// `verified_email`이 false인 사용자는 로그인을 거부해야 합니다.
/// `id`는 변경되지 않는 고유 식별자로, `provider_user_id`로 저장됩니다.
#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 사용자 고유 식별자 (불변, 숫자 문자열)
    pub id: String,
    /// 사용자 이메일 주소
    pub email: String,
    /// 사용자 전체 이름 (표시 이름)
    pub name: String,
    /// 프로필 사진 URL
    #[serde(default)]
    pub picture: Option<String>,
    /// 이메일 검증 상태
    #[serde(default)]
    pub verified_email: bool,
}
