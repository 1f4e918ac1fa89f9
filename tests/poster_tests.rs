use std::collections::HashMap;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;

use flickpick::services::poster::{
    PosterResolver, TmdbPosterResolver, NO_POSTER_URL, POSTER_ERROR_URL, POSTER_FALLBACK_URL,
};

/// Serves `router` on an ephemeral local port, standing in for TMDB
async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn resolver_for(api_url: String) -> TmdbPosterResolver {
    TmdbPosterResolver::new(
        "test_key".to_string(),
        api_url,
        "https://image.tmdb.org/t/p/w500/".to_string(),
    )
}

#[tokio::test]
async fn test_resolve_poster_success_builds_cdn_url() {
    let router = Router::new().route(
        "/movie/:id",
        get(
            |Path(id): Path<i64>, Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("api_key").map(String::as_str), Some("test_key"));
                assert_eq!(params.get("language").map(String::as_str), Some("en-US"));
                Json(json!({ "id": id, "poster_path": "/abc123.jpg" }))
            },
        ),
    );
    let api_url = spawn_stub(router).await;

    let url = resolver_for(api_url).resolve_poster(603).await;
    assert_eq!(url, "https://image.tmdb.org/t/p/w500//abc123.jpg");
}

#[tokio::test]
async fn test_resolve_poster_missing_path_uses_no_poster_placeholder() {
    let router = Router::new().route(
        "/movie/:id",
        get(|| async { Json(json!({ "id": 603, "poster_path": null })) }),
    );
    let api_url = spawn_stub(router).await;

    let url = resolver_for(api_url).resolve_poster(603).await;
    assert_eq!(url, NO_POSTER_URL);
}

#[tokio::test]
async fn test_resolve_poster_http_error_uses_error_placeholder() {
    let router = Router::new().route(
        "/movie/:id",
        get(|| async { (StatusCode::NOT_FOUND, Json(json!({ "status_message": "not found" }))) }),
    );
    let api_url = spawn_stub(router).await;

    let url = resolver_for(api_url).resolve_poster(999).await;
    assert_eq!(url, POSTER_ERROR_URL);
}

#[tokio::test]
async fn test_resolve_poster_transport_failure_uses_error_placeholder() {
    // Bind a port, then drop the listener so the connection is refused
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = resolver_for(format!("http://{}", addr)).resolve_poster(603).await;
    assert_eq!(url, POSTER_ERROR_URL);
}

#[tokio::test]
async fn test_resolve_poster_malformed_body_uses_fallback_placeholder() {
    let router = Router::new().route(
        "/movie/:id",
        get(|| async { "definitely not json".into_response() }),
    );
    let api_url = spawn_stub(router).await;

    let url = resolver_for(api_url).resolve_poster(603).await;
    assert_eq!(url, POSTER_FALLBACK_URL);
}
