//! Link Shortening HTTP Handlers
//!
//! 단축 링크의 생성, 조회, 삭제, 리다이렉트 HTTP 엔드포인트를 처리하는
//! 핸들러 함수들입니다.
//!
//! # Endpoints
//!
//! - **익명 링크 생성**: `POST /api/urls` (3개월 고정 TTL)
//! - **인증 링크 생성**: `POST /api/restricted_urls` (TTL 선택 가능)
//! - **링크 목록**: `GET /api/links` (페이지네이션)
//! - **링크 삭제**: `DELETE /api/links/{hash}`
//! - **리다이렉트**: `GET /{hash}` (302 Found)

use actix_web::{delete, get, http::header, post, web, HttpRequest, HttpResponse};
use mongodb::bson::oid::ObjectId;
use validator::Validate;
use crate::{
    domain::entities::links::link::ExpiresType,
    domain::models::auth::authenticated_user::AuthenticatedUser,
    services::auth::captcha_service::CaptchaService,
    services::links::link_service::LinkService,
};
use crate::domain::dto::links::request::{CreateLinkRequest, ListLinksQuery};
use crate::errors::errors::AppError;

/// 캡차 토큰을 전달하는 요청 헤더
const CAPTCHA_HEADER: &str = "X-Recaptcha-Token";

/// 익명 단축 링크 생성 핸들러
///
/// 인증 없이 단축 링크를 생성합니다. 무단 장기 보관을 막기 위해
/// 요청의 TTL과 무관하게 3개월 만료가 강제되며, `ttl` 필드는
/// 생략할 수 있습니다. 캡차가 활성화된 환경에서는
/// `X-Recaptcha-Token` 헤더 검증을 통과해야 합니다.
///
/// # Endpoint
/// `POST /api/urls`
#[post("")]
pub async fn create_anonymous_link(
    req: HttpRequest,
    payload: web::Json<CreateLinkRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    // 봇 남용 방지
    let captcha_token = req
        .headers()
        .get(CAPTCHA_HEADER)
        .and_then(|value| value.to_str().ok());
    CaptchaService::instance().verify(captcha_token).await?;

    let link_service = LinkService::instance();

    // 익명 링크는 TTL 3개월 고정
    let response = link_service
        .create_link(None, &payload.url, ExpiresType::ThreeMonths)
        .await?;

    Ok(HttpResponse::Created().json(response))
}

/// 인증 사용자 단축 링크 생성 핸들러
///
/// 요청한 TTL(3개월, 6개월, 12개월, 무제한)을 그대로 적용하며
/// 생성된 링크는 사용자 소유가 됩니다.
///
/// # Endpoint
/// `POST /api/restricted_urls`
#[post("")]
pub async fn create_link(
    user: AuthenticatedUser,
    payload: web::Json<CreateLinkRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let owner_id = ObjectId::parse_str(&user.user_id)
        .map_err(|_| AppError::AuthenticationError("유효하지 않은 사용자 ID입니다".to_string()))?;

    // 인증 생성은 만료 정책을 명시해야 한다
    let ttl = payload.ttl
        .ok_or_else(|| AppError::ValidationError("ttl 필드가 필요합니다".to_string()))?;

    let link_service = LinkService::instance();
    let response = link_service
        .create_link(Some(owner_id), &payload.url, ttl)
        .await?;

    Ok(HttpResponse::Created().json(response))
}

/// 사용자 링크 목록 조회 핸들러
///
/// 인증된 사용자가 소유한 링크를 최신순으로 페이지 단위 조회합니다.
///
/// # Endpoint
/// `GET /api/links?page=1&per_page=20`
#[get("")]
pub async fn list_links(
    user: AuthenticatedUser,
    query: web::Query<ListLinksQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let link_service = LinkService::instance();
    let response = link_service
        .list_links(&user.user_id, query.page, query.per_page)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 링크 삭제 핸들러
///
/// 소유자만 삭제할 수 있으며, 타인의 링크는 존재 여부를 노출하지 않고
/// 404로 응답합니다.
///
/// # Endpoint
/// `DELETE /api/links/{hash}`
#[delete("/{hash}")]
pub async fn delete_link(
    user: AuthenticatedUser,
    hash: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let link_service = LinkService::instance();
    link_service.delete_link(&hash, &user.user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 단축 링크 리다이렉트 핸들러
///
/// 해시를 원본 URL로 해석하여 302 Found로 리다이렉트합니다.
/// 존재하지 않거나 만료된 해시는 404로 응답합니다.
///
/// # Endpoint
/// `GET /{hash}`
#[get("/{hash}")]
pub async fn redirect_link(hash: web::Path<String>) -> Result<HttpResponse, AppError> {
    let link_service = LinkService::instance();
    let redirect_url = link_service.resolve(&hash).await?;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, redirect_url))
        .finish())
}
