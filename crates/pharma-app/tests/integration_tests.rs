//! Integration tests for the pharma-intel binary.
//!
//! Each test starts an in-process mock analysis service, runs the real
//! binary against it, and checks what reaches the user.

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::process::Stdio;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::AsyncBufReadExt;

/// Serve `app` on an ephemeral port and return its base URL.
async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Mock service that records request bodies and echoes one result per drug.
fn echo_backend(received: Arc<Mutex<Vec<Value>>>) -> Router {
    Router::new().route(
        "/analyze",
        post(move |Json(body): Json<Value>| {
            let received = received.clone();
            async move {
                received.lock().unwrap().push(body.clone());
                let results: Vec<Value> = body["drugs"]
                    .as_array()
                    .cloned()
                    .unwrap_or_default()
                    .into_iter()
                    .map(|drug| {
                        json!({
                            "molecule": drug,
                            "moa": "Blocks a receptor.\nSecond line.",
                            "latest_summary": "- Approved in 2024",
                            "regulatory_news": [
                                {"summary": "Label update", "url": "https://example.com/label"}
                            ],
                            "clinical_news": [{"summary": "Trial started"}],
                            "commercial_news": []
                        })
                    })
                    .collect();
                Json(Value::Array(results))
            }
        }),
    )
}

fn binary() -> PathBuf {
    if let Ok(path) = std::env::var("CARGO_BIN_EXE_pharma-intel") {
        return PathBuf::from(path);
    }

    let current_exe = std::env::current_exe().expect("current_exe");
    let target_debug_dir = current_exe
        .parent()
        .and_then(|p| p.parent())
        .expect("target/debug directory");
    let mut fallback = target_debug_dir.join("pharma-intel");
    if cfg!(target_os = "windows") {
        fallback.set_extension("exe");
    }
    fallback
}

async fn run_analyze(args: &[&str]) -> std::process::Output {
    tokio::process::Command::new(binary())
        .arg("analyze")
        .args(args)
        .env_remove("PHARMA_API_URL")
        .env_remove("PHARMA_API_TIMEOUT_SECS")
        .stdin(Stdio::null())
        .output()
        .await
        .expect("failed to run pharma-intel")
}

#[tokio::test]
async fn test_analyze_json_output() {
    let received: Arc<Mutex<Vec<Value>>> = Arc::default();
    let base_url = spawn_backend(echo_backend(received.clone())).await;

    let output = run_analyze(&["Adalimumab, Pembrolizumab", "--api-url", &base_url, "--json"]).await;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let results: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(results[0]["molecule"], "Adalimumab");
    assert_eq!(results[1]["molecule"], "Pembrolizumab");
    assert!(results[0]["clinical_news"][0].get("url").is_none());

    let received = received.lock().unwrap();
    assert_eq!(received.as_slice(), &[json!({"drugs": ["Adalimumab", "Pembrolizumab"]})]);
}

#[tokio::test]
async fn test_analyze_text_output() {
    let received: Arc<Mutex<Vec<Value>>> = Arc::default();
    let base_url = spawn_backend(echo_backend(received)).await;

    let output = run_analyze(&["Adalimumab", "--api-url", &base_url]).await;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("▾ Adalimumab\n"));
    assert!(stdout.contains("        Blocks a receptor.\n        Second line.\n"));
    assert!(stdout.contains("Source Article: https://example.com/label"));
    assert!(stdout.contains("Commercial Activity (0)"));
}

#[tokio::test]
async fn test_blank_input_makes_no_request() {
    let received: Arc<Mutex<Vec<Value>>> = Arc::default();
    let base_url = spawn_backend(echo_backend(received.clone())).await;

    let output = run_analyze(&["   ", "--api-url", &base_url]).await;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Please enter at least one drug name"));
    assert!(received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_service_detail_is_reported() {
    let app = Router::new().route(
        "/analyze",
        post(|| async {
            (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({"detail": "rate limited"})),
            )
        }),
    );
    let base_url = spawn_backend(app).await;

    let output = run_analyze(&["Adalimumab", "--api-url", &base_url]).await;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("rate limited"));
}

#[tokio::test]
async fn test_unreachable_service_falls_back() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let output = run_analyze(&["Adalimumab", "--api-url", &format!("http://{}", addr)]).await;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("Failed to analyze drugs. Please try again."));
}

#[tokio::test]
async fn test_serve_page_round_trip() {
    let received: Arc<Mutex<Vec<Value>>> = Arc::default();
    let base_url = spawn_backend(echo_backend(received)).await;

    let mut child = tokio::process::Command::new(binary())
        .args(["serve", "--port", "0", "--api-url", &base_url])
        .env_remove("PHARMA_API_URL")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .expect("failed to spawn pharma-intel serve");

    let stdout = child.stdout.take().expect("stdout");
    let mut lines = tokio::io::BufReader::new(stdout).lines();
    let port = tokio::time::timeout(Duration::from_secs(20), async {
        while let Ok(Some(line)) = lines.next_line().await {
            if let Some(value) = line.strip_prefix("SERVER_PORT=") {
                return value.trim().parse::<u16>().ok();
            }
        }
        None
    })
    .await
    .ok()
    .flatten()
    .expect("SERVER_PORT line not emitted");

    let client = reqwest::Client::new();
    let page_url = format!("http://127.0.0.1:{}", port);

    let health: Value = client
        .get(format!("{}/health", page_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "ok");

    let html = client
        .post(format!("{}/analyze", page_url))
        .form(&[("drugs", "Adalimumab, Pembrolizumab")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("<summary>Adalimumab</summary>"));
    assert!(html.contains("<summary>Pembrolizumab</summary>"));

    // The page keeps showing the last results
    let html = client.get(&page_url).send().await.unwrap().text().await.unwrap();
    assert!(html.contains("value=\"Adalimumab, Pembrolizumab\""));
    assert_eq!(html.matches("<details class=\"drug\"").count(), 2);

    let _ = child.kill().await;
}
