use actix_web::HttpServer;
use tracing_subscriber::EnvFilter;
use weather_agent_api::{ChatService, create_base_app};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Pick up GEMINI_API_KEY and friends from a local .env if present
    dotenvy::dotenv().ok();

    // Initialize logging (control verbosity with RUST_LOG, e.g. RUST_LOG=info)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    let service = ChatService::from_env().map_err(std::io::Error::other)?;

    tracing::info!(addr = %bind_addr, "Server starting");

    HttpServer::new(move || create_base_app(service.clone()))
        .bind(bind_addr)?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test, web};
    use weather_agent_api::health;

    #[actix_web::test]
    async fn test_health() {
        // Create a test app with the /api/health route.
        let app =
            test::init_service(App::new().route("/api/health", web::get().to(health))).await;

        // Create a test request to GET /api/health.
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;

        // Ensure the response status is successful (200 OK).
        assert!(resp.status().is_success());

        // Check that the response body contains "healthy".
        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).unwrap();
        assert!(body_str.contains("healthy"));
    }
}
