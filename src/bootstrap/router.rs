use switcher_api::{get_switcher, get_switcher_html, list_paths, not_found, AppState};
use switcher_config::Config;
use axum::{
    http::{HeaderValue, StatusCode},
    routing::get,
    Router,
};
use std::time::Duration;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
};

pub fn build(config: &Config, app_state: AppState) -> Router {
    let timeout = Duration::from_secs(config.server.timeout_secs);
    let max_concurrent_requests = config.server.max_concurrent_requests;

    let mut router = Router::new()
        .route("/switcher", get(get_switcher))
        .route("/switcher.html", get(get_switcher_html))
        .route("/paths", get(list_paths))
        .fallback(not_found)
        .layer(ConcurrencyLimitLayer::new(max_concurrent_requests))
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout));

    // Optionally enable compression based on config
    if config.server.enable_compression {
        router = router.layer(CompressionLayer::new());
    }

    router
        .layer(build_cors_layer(&config.server.allowed_origins))
        .with_state(app_state)
}

fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(parse_origins(allowed_origins))
    }
}

/// Origins that are not valid header values are skipped with a warning
fn parse_origins(allowed_origins: &[String]) -> Vec<HeaderValue> {
    allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use switcher_models::DirectoryEntry;
    use switcher_table::PathTable;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let config = Config::parse(switcher_config::DEFAULT_CONFIG_TEMPLATE).unwrap();
        let entries = vec![
            DirectoryEntry {
                route: "/ui-legacy".to_string(),
                filters: vec!["react".to_string(), "vue".to_string()],
            },
            DirectoryEntry {
                route: "/ui-legacy/components/button".to_string(),
                filters: vec!["react".to_string()],
            },
        ];
        let table = Arc::new(PathTable::from_entries("ui-legacy", &entries));
        build(&config, AppState::new(table))
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_switcher_route() {
        let (status, body) =
            get_json("/switcher?url=%2Fui%2Fcomponents%2Fbutton%2Fq%2Fframework%2Freact%2F").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["active"], "latest");
        assert_eq!(body["left"]["href"], "/ui/q/framework/react/");
        assert_eq!(body["left"]["is_active"], true);
        assert_eq!(body["right"]["href"], "/ui-legacy/components/button/q/framework/react/");
        assert_eq!(body["right"]["title"], "Legacy");
    }

    #[tokio::test]
    async fn test_switcher_html_route() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/switcher.html?url=/ui-legacy/q/framework/vue/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains(r#"<a href="/ui-legacy/q/framework/vue/" class="switch-option switch-option--active">"#));
    }

    #[tokio::test]
    async fn test_missing_url_is_bad_request() {
        let (status, body) = get_json("/switcher").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "MISSING_URL");
    }

    #[tokio::test]
    async fn test_paths_route() {
        let (status, body) = get_json("/paths").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"], "ui-legacy");
        assert_eq!(body["count"], 3);
        assert_eq!(body["legacy_paths"][2], "/ui-legacy/components/button/q/framework/react/");
    }

    #[test]
    fn test_invalid_origins_are_skipped() {
        let origins = vec![
            "https://docs.example.com".to_string(),
            "bad\norigin".to_string(),
        ];

        let parsed = parse_origins(&origins);

        assert_eq!(parsed, vec![HeaderValue::from_static("https://docs.example.com")]);
    }

    #[tokio::test]
    async fn test_restricted_origin_is_echoed() {
        let mut config = Config::parse(switcher_config::DEFAULT_CONFIG_TEMPLATE).unwrap();
        config.server.allowed_origins = vec!["https://docs.example.com".to_string()];
        let table = Arc::new(PathTable::from_entries("ui-legacy", std::iter::empty()));

        let response = build(&config, AppState::new(table))
            .oneshot(
                Request::builder()
                    .uri("/paths")
                    .header("origin", "https://docs.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "https://docs.example.com"
        );
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, body) = get_json("/servers").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
