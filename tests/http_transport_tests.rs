//! HTTP transport tests against an in-process backend on a loopback
//! listener.

use axum::extract::{Multipart, Query};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use deepguard::core::{MediaFile, ScanKind, ScanRequest, ScanTransport};
use deepguard::transport::{HttpTransport, HttpTransportConfig};
use serde_json::{json, Value};
use std::collections::HashMap;

//===============
// Test Helpers
//===============

async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind loopback listener");
    let addr = listener.local_addr().expect("listener has no local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("backend stopped");
    });
    format!("http://{addr}")
}

fn transport_for(base_url: &str) -> HttpTransport {
    HttpTransport::with_config(HttpTransportConfig::new().with_base_url(base_url))
        .expect("failed to build transport")
}

async fn link_scan(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    // Echo the decoded url back so tests can assert the query encoding.
    Json(json!({
        "status": "ok",
        "deepfake_probability": 0.82,
        "media_type": params.get("url").cloned().unwrap_or_default(),
    }))
}

async fn image_scan(mut multipart: Multipart) -> Result<Json<Value>, StatusCode> {
    let field = multipart
        .next_field()
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?
        .ok_or(StatusCode::BAD_REQUEST)?;

    if field.name() != Some("file") {
        return Err(StatusCode::BAD_REQUEST);
    }
    let filename = field.file_name().unwrap_or_default().to_string();
    let data = field.bytes().await.map_err(|_| StatusCode::BAD_REQUEST)?;

    Ok(Json(json!({
        "status": "ok",
        "deepfake_probability": 0.12,
        "media_type": format!("{filename}:{}", data.len()),
        "model_breakdown": {"pixel_model": 0.10, "frequency_model": 0.14},
    })))
}

//===============
// Tests
//===============

#[tokio::test]
async fn link_scan_sends_percent_encoded_url() {
    let base = spawn_backend(Router::new().route("/link/scan", post(link_scan))).await;
    let transport = transport_for(&base);

    let url = "https://example.com/watch?v=a b&list=x";
    let request = ScanRequest::link(url).unwrap();
    let verdict = transport.send(&request).await.unwrap();

    assert_eq!(verdict.status, "ok");
    assert_eq!(verdict.effective_probability(), 0.82);
    // The backend saw the decoded original, so the query was encoded.
    assert_eq!(verdict.media_type.as_deref(), Some(url));
}

#[tokio::test]
async fn image_scan_uploads_single_multipart_file_field() {
    let base = spawn_backend(Router::new().route("/image/scan", post(image_scan))).await;
    let transport = transport_for(&base);

    let file = MediaFile::from_bytes(vec![0xFFu8, 0xD8, 0xFF, 0xE0]).with_filename("photo.jpg");
    let request = ScanRequest::media(ScanKind::Image, file).unwrap();
    let verdict = transport.send(&request).await.unwrap();

    assert_eq!(verdict.media_type.as_deref(), Some("photo.jpg:4"));
    assert_eq!(verdict.breakdown().unwrap().len(), 2);
}

#[tokio::test]
async fn failure_status_becomes_server_error_without_parsing_body() {
    // The 503 body is deliberately not verdict-shaped.
    let app = Router::new().route(
        "/video/scan",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "database on fire") }),
    );
    let base = spawn_backend(app).await;
    let transport = transport_for(&base);

    let file = MediaFile::from_bytes(vec![0u8; 32]).with_filename("clip.mov");
    let request = ScanRequest::media(ScanKind::Video, file).unwrap();
    let error = transport.send(&request).await.unwrap_err();

    assert_eq!(error.status_code(), Some(503));
    assert!(!error.is_network_error());
    assert_eq!(error.to_string(), "Server error: 503");
}

#[tokio::test]
async fn malformed_success_body_is_a_local_failure() {
    let app = Router::new().route("/audio/scan", post(|| async { "not json" }));
    let base = spawn_backend(app).await;
    let transport = transport_for(&base);

    let file = MediaFile::from_bytes(vec![0u8; 8]).with_filename("voice.ogg");
    let request = ScanRequest::media(ScanKind::Audio, file).unwrap();
    let error = transport.send(&request).await.unwrap_err();

    assert!(!error.is_network_error());
    assert_eq!(error.status_code(), None);
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    // Grab a free port, then drop the listener so nothing accepts on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let transport = transport_for(&format!("http://127.0.0.1:{port}"));
    let request = ScanRequest::link("https://example.com").unwrap();
    let error = transport.send(&request).await.unwrap_err();

    assert!(error.is_network_error());
    assert_eq!(error.status_code(), None);
    assert_eq!(
        error.to_string(),
        "Cannot connect to backend. Please ensure the server is running."
    );
}

#[tokio::test]
async fn path_backed_file_is_read_at_send_time() {
    let base = spawn_backend(Router::new().route("/image/scan", post(image_scan))).await;
    let transport = transport_for(&base);

    let dir = std::env::temp_dir();
    let path = dir.join("deepguard_transport_test.png");
    tokio::fs::write(&path, b"\x89PNG\r\n").await.unwrap();

    let request = ScanRequest::media(ScanKind::Image, MediaFile::from_path(&path)).unwrap();
    let verdict = transport.send(&request).await.unwrap();
    assert_eq!(
        verdict.media_type.as_deref(),
        Some("deepguard_transport_test.png:6")
    );

    tokio::fs::remove_file(&path).await.ok();
}
