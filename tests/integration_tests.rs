//! App factory integration tests: health, OpenAPI spec, request IDs.

use actix_web::test;
use weather_agent_api::{ChatService, WeatherFetcher, WeatherSourcesConfig, create_base_app};

fn offline_service() -> ChatService {
    let config = WeatherSourcesConfig {
        geocoding_base_url: "http://127.0.0.1:1".to_string(),
        forecast_base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 2,
        ..WeatherSourcesConfig::default()
    };
    ChatService::new(None, WeatherFetcher::new(&config).unwrap())
}

#[actix_web::test]
async fn test_health_through_app_factory() {
    let app = test::init_service(create_base_app(offline_service())).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).unwrap();
    assert!(body_str.contains("healthy"));
}

#[actix_web::test]
async fn test_root_index_is_served() {
    let app = test::init_service(create_base_app(offline_service())).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());

    let content_type = resp.headers().get("content-type").unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).unwrap();
    assert!(body_str.contains("Weather Agent API"));
    assert!(body_str.contains("/api/spec/v2"));
}

#[actix_web::test]
async fn test_openapi_spec_is_served() {
    let app = test::init_service(create_base_app(offline_service())).await;

    let req = test::TestRequest::get().uri("/api/spec/v2").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["info"]["title"], "Weather Agent API");
    assert!(body["paths"].get("/api/chat").is_some());
}

#[actix_web::test]
async fn test_request_id_header_is_attached() {
    let app = test::init_service(create_base_app(offline_service())).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.headers().contains_key("x-request-id"));
}

#[actix_web::test]
async fn test_request_id_header_is_preserved() {
    let app = test::init_service(create_base_app(offline_service())).await;

    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header(("X-Request-ID", "test-id-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let header = resp.headers().get("x-request-id").unwrap();
    assert_eq!(header.to_str().unwrap(), "test-id-123");
}
