//! OpenAPI specification generation and app factory.

use crate::{
    handlers::{chat, health},
    middleware::RequestIdMiddleware,
    services::chat::ChatService,
};
use actix_web::{App, HttpResponse};
use paperclip::actix::{OpenApiExt, api_v2_operation, web};
use paperclip::v2::models::{DefaultApiRaw, Info};

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Weather Agent API - OpenAPI Spec</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            margin: 0;
            padding: 0;
            background: #f5f5f5;
            color: #333;
        }
        .container {
            max-width: 800px;
            margin: 40px auto;
            padding: 20px;
            background: #fff;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
            border-radius: 8px;
        }
        h1 {
            text-align: center;
        }
        pre {
            background: #eee;
            padding: 20px;
            border-radius: 4px;
            overflow-x: auto;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Weather Agent API OpenAPI Spec</h1>
        <pre id="openapi">Loading...</pre>
    </div>
    <script>
        fetch('/api/spec/v2')
            .then(response => response.json())
            .then(data => {
                document.getElementById('openapi').textContent = JSON.stringify(data, null, 2);
            })
            .catch(error => {
                document.getElementById('openapi').textContent = 'Error loading spec: ' + error;
            });
    </script>
</body>
</html>"#;

/// Landing page rendering the OpenAPI specification
#[api_v2_operation(
    summary = "Index Page",
    description = "Serves a small HTML page that renders the OpenAPI specification.",
    tags("Index"),
    responses(
        (status = 200, description = "Successful response")
    )
)]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html")
        .body(INDEX_HTML)
}

/// Creates the shared OpenAPI specification for the API
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Weather Agent API".into(),
            version: "1.0.0".into(),
            description: Some(
                "A conversational API that answers natural-language weather questions.\n\n\
                ## Request flow\n\
                `POST /api/chat` runs one turn: a language-model call extracts a city name \
                from the message; when one is found, the city is geocoded and current \
                conditions are fetched, and a second model call phrases a reply grounded in \
                that data. Messages without a city are answered directly.\n\
                \n\
                **Response metadata:**\n\
                Grounded turns carry a `metadata` object:\n\
                ```json\n\
                {\n\
                  \"response\": \"natural-language reply\",\n\
                  \"metadata\": {\n\
                    \"city\": \"tokyo\",\n\
                    \"weatherData\": \"{\\\"location\\\":...,\\\"temp\\\":\\\"21.4°C\\\",\\\"wind\\\":\\\"12 km/h\\\"}\"\n\
                  }\n\
                }\n\
                ```\n\
                `weatherData` is the exact text embedded in the synthesis prompt. When the \
                lookup fails it is a fixed error string rather than JSON, and clients should \
                skip their weather widget.\n\
                \n\
                **Configuration:**\n\
                - `GEMINI_API_KEY` (required per request) with optional `GEMINI_BASE_URL` and `GEMINI_MODEL`\n\
                - `GEOCODING_BASE_URL`, `FORECAST_BASE_URL`, `WEATHER_USER_AGENT`, `HTTP_TIMEOUT_SECS`"
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates a basic app with shared configuration
///
/// This factory function creates a pre-configured Actix Web application with:
/// - The chat and health endpoints
/// - An HTML index page and the OpenAPI specification
/// - Request-ID middleware and structured request logging
///
/// This can be used both for testing and as a base for the main application.
pub fn create_base_app(
    service: ChatService,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(RequestIdMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(web::Data::new(service))
        .service(web::resource("/").route(web::get().to(index)))
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/chat").route(web::post().to(chat)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}
