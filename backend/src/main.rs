use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::ServeDir;
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

mod config;
mod handlers {
    pub mod contact_dtos;
    pub mod contact_handlers;
}

use config::ServerConfig;
use handlers::contact_handlers;

async fn health_check() -> &'static str {
    "OK"
}

pub fn app(config: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_contact));

    // Layers only wrap what is already registered, so the bundle goes in first.
    let router = match &config.static_dir {
        Some(dir) => {
            info!("Serving frontend from {}", dir.display());
            router.fallback_service(ServeDir::new(dir))
        }
        None => router,
    };

    router
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
        )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    let app = app(&config);

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Listening on {}", config.bind_address());
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app() -> Router {
        app(&ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            static_dir: None,
        })
    }

    fn post_contact(body: &'static str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn contact_acknowledges_submission() {
        let response = test_app()
            .oneshot(post_contact(r#"{"name":"Jane","email":"jane@x.com","org":"","message":"hi"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({ "ok": true }));
    }

    #[tokio::test]
    async fn contact_accepts_missing_fields() {
        let response = test_app().oneshot(post_contact(r#"{"name":"Jane"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn contact_rejects_non_json() {
        let response = test_app().oneshot(post_contact("name=Jane")).await.unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn contact_requires_post() {
        let request = Request::builder()
            .uri("/api/contact")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn health_check_answers_ok() {
        let request = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn cors_preflight_allows_json_posts() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/contact")
            .header(header::ORIGIN, "http://localhost:8080")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }
}
