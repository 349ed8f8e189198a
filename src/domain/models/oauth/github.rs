//! # GitHub OAuth 응답 모델
//!
//! GitHub OAuth 인증 플로우에서 반환되는 토큰과 사용자 정보를
//! 처리하기 위한 데이터 모델을 정의합니다.
//!
//! GitHub의 사용자 API(`https://api.github.com/user`)는 이메일을
//! 비공개로 설정한 사용자에 대해 `email: null`을 반환하므로,
//! 별도의 `/user/emails` 호출 결과([`GithubEmail`])로 보완합니다.

use serde::Deserialize;

/// GitHub OAuth 토큰 교환 응답
///
/// `https://github.com/login/oauth/access_token`에 `Accept: application/json`
/// 헤더와 함께 인증 코드를 전달했을 때 반환되는 응답입니다.
#[derive(Debug, Deserialize)]
pub struct GithubTokenResponse {
    /// GitHub API 접근용 액세스 토큰
    pub access_token: String,
    /// 토큰 타입 (항상 "bearer")
    pub token_type: String,
    /// 허용된 스코프 (쉼표 구분)
    pub scope: String,
}

/// GitHub 사용자 정보 응답 구조체
///
/// `id`는 변경되지 않는 숫자 식별자로, 문자열로 변환하여
/// `provider_user_id`로 저장됩니다. `login`(사용자명)은 변경될 수
/// 있으므로 식별자로 사용하지 않습니다.
#[derive(Debug, Deserialize)]
pub struct GithubUserInfo {
    /// GitHub 사용자 고유 숫자 ID (불변)
    pub id: i64,
    /// GitHub 로그인 이름 (변경 가능)
    pub login: String,
    /// 표시 이름 (미설정 시 null)
    #[serde(default)]
    pub name: Option<String>,
    /// 공개 이메일 (비공개 설정 시 null)
    #[serde(default)]
    pub email: Option<String>,
    /// 프로필 이미지 URL
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// GitHub 이메일 목록 항목
///
/// `/user/emails` 응답의 개별 항목입니다. `primary && verified`인
/// 항목을 대표 이메일로 사용합니다.
#[derive(Debug, Deserialize)]
pub struct GithubEmail {
    pub email: String,
    pub primary: bool,
    pub verified: bool,
}
