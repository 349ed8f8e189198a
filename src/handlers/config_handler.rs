//! Runtime Configuration HTTP Handlers
//!
//! 프로세스 시작 시 고정된 클라이언트 런타임 설정을 노출하는 핸들러입니다.
//! 같은 값이 두 가지 형태로 제공됩니다.
//!
//! - `GET /config.js` — 브라우저가 `<script>` 태그로 로드하는 JS 아티팩트.
//!   `window.APP_CONFIG` 전역을 선언합니다.
//! - `GET /api/config` — 동일한 설정의 JSON 표현.
//!
//! 설정은 기동 시 한 번 검증되어 ServiceLocator에 등록되므로
//! 핸들러에서는 실패 케이스가 없습니다.

use actix_web::{get, HttpResponse};
use crate::config::RuntimeConfig;
use crate::core::registry::ServiceLocator;
use crate::errors::errors::AppError;

/// 클라이언트 런타임 설정 JS 아티팩트 핸들러
///
/// `window.APP_CONFIG`를 선언하는 JavaScript를 렌더링합니다.
/// 빌드 산출물에 포함되지 않으므로 재빌드 없이 배포 환경마다
/// 다른 값을 주입할 수 있습니다.
///
/// # Endpoint
/// `GET /config.js`
#[get("/config.js")]
pub async fn serve_config_js() -> Result<HttpResponse, AppError> {
    let config = ServiceLocator::get::<RuntimeConfig>();

    Ok(HttpResponse::Ok()
        .content_type("text/javascript")
        .insert_header(("Cache-Control", "no-store"))
        .body(config.to_client_js()))
}

/// 클라이언트 런타임 설정 JSON 핸들러
///
/// # Endpoint
/// `GET /api/config`
#[get("/api/config")]
pub async fn get_runtime_config() -> Result<HttpResponse, AppError> {
    let config = ServiceLocator::get::<RuntimeConfig>();

    Ok(HttpResponse::Ok().json(config.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, test, App};

    #[actix_web::test]
    async fn test_config_js_declares_app_config_global() {
        ServiceLocator::set(std::sync::Arc::new(
            RuntimeConfig::new("https://short.twb.one", "development").unwrap(),
        ));

        let app = test::init_service(App::new().service(serve_config_js)).await;
        let req = test::TestRequest::get().uri("/config.js").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/javascript"));

        let body = to_bytes(resp.into_body()).await.unwrap();
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("window.APP_CONFIG = {"));
        assert!(body.contains("apiBaseUrl: \"https://short.twb.one\""));
        assert!(body.contains("environment: \"development\""));
        assert!(body.contains("console.log"));
    }

    #[actix_web::test]
    async fn test_api_config_returns_camel_case_json() {
        ServiceLocator::set(std::sync::Arc::new(
            RuntimeConfig::new("https://short.twb.one", "development").unwrap(),
        ));

        let app = test::init_service(App::new().service(get_runtime_config)).await;
        let req = test::TestRequest::get().uri("/api/config").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["apiBaseUrl"], "https://short.twb.one");
        assert_eq!(json["environment"], "development");
    }
}
