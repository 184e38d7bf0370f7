// Keccak Miner - Free and Open Source Software Statement
//
// This project, keccak-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/web_server_test.rs
// Version: 1.0.0
//
// This file contains tests for the HTTP mining service, located in the tests
// directory. Requests are driven through the router in-process, without
// binding a socket.
//
// Tree Location:
// - tests/web_server_test.rs (mining service tests)
// - Depends on: keccak-miner, axum, tower, tokio

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use keccak_miner::core::keccak::digest_for_nonce;
use keccak_miner::web_server::{MineRequest, ServiceConfig, router};
use keccak_miner::{Difficulty, SearchConfig, SearchRequest};
use tower::ServiceExt;

const ORIGIN: &str = "https://suimine.xyz";

fn test_router(search: SearchConfig) -> Router {
    router(&ServiceConfig {
        bind: "127.0.0.1:0".parse().unwrap(),
        allowed_origin: ORIGIN.to_string(),
        search,
    })
    .unwrap()
}

fn easy_router() -> Router {
    test_router(SearchConfig::new(2, Difficulty::new(8).unwrap()))
}

fn mine_body(challenge: Vec<u8>, signer: Vec<u8>) -> String {
    serde_json::to_string(&MineRequest {
        current_hash: challenge,
        sign: signer,
    })
    .unwrap()
}

fn post_mine(body: String) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/mine")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ORIGIN, ORIGIN)
        .body(Body::from(body))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_mine_returns_verifiable_nonce() {
    let request = SearchRequest::benchmark_default();
    let body = mine_body(request.challenge.to_vec(), request.signer.to_vec());

    let response = easy_router().oneshot(post_mine(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        ORIGIN
    );

    let nonce: u64 = body_text(response).await.parse().expect("body should be a decimal nonce");
    assert_eq!(digest_for_nonce(&request, nonce)[0], 0);
}

#[tokio::test]
async fn test_request_uses_camel_case_base64_fields() {
    let body = mine_body(vec![0xAB; 32], vec![0xCD; 16]);
    assert!(body.contains("\"currentHash\""));
    assert!(body.contains("\"sign\""));
    assert!(body.contains(&"q6ur".repeat(10)), "challenge should be standard base64: {}", body);
}

#[tokio::test]
async fn test_preflight_allows_configured_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/mine")
        .header(header::ORIGIN, ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = easy_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), ORIGIN);
    let methods = headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap().to_str().unwrap();
    assert!(methods.contains("POST"));
    assert!(body_text(response).await.is_empty());
}

#[tokio::test]
async fn test_foreign_origin_only_sees_configured_origin() {
    const FOREIGN: &str = "https://example.com";

    let preflight = Request::builder()
        .method(Method::OPTIONS)
        .uri("/mine")
        .header(header::ORIGIN, FOREIGN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = easy_router().oneshot(preflight).await.unwrap();
    let allowed = response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap();
    assert_eq!(allowed, ORIGIN);
    assert_ne!(allowed, FOREIGN);

    let request = SearchRequest::benchmark_default();
    let mut post = post_mine(mine_body(request.challenge.to_vec(), request.signer.to_vec()));
    post.headers_mut().insert(header::ORIGIN, FOREIGN.parse().unwrap());
    let response = easy_router().oneshot(post).await.unwrap();
    assert_eq!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), ORIGIN);
}

#[tokio::test]
async fn test_get_mine_not_allowed() {
    let request = Request::builder().method(Method::GET).uri("/mine").body(Body::empty()).unwrap();
    let response = easy_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let response = easy_router().oneshot(post_mine("{not json".to_string())).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = easy_router()
        .oneshot(post_mine(r#"{"currentHash":"!!!","sign":"AAAA"}"#.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_wrong_lengths_rejected() {
    let response = easy_router().oneshot(post_mine(mine_body(vec![1; 31], vec![2; 16]))).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("challenge"));

    let response = easy_router().oneshot(post_mine(mine_body(vec![1; 32], vec![2; 8]))).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("signer"));
}

#[tokio::test]
async fn test_exhausted_search_is_unavailable() {
    let router = test_router(SearchConfig::new(2, Difficulty::new(32).unwrap()).with_max_nonce(16));
    let request = SearchRequest::benchmark_default();
    let response = router
        .oneshot(post_mine(mine_body(request.challenge.to_vec(), request.signer.to_vec())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = easy_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[test]
fn test_invalid_origin_rejected() {
    let result = router(&ServiceConfig {
        bind: "127.0.0.1:0".parse().unwrap(),
        allowed_origin: "bad\norigin".to_string(),
        search: SearchConfig::default(),
    });
    assert!(result.is_err());
}

// Changelog:
// - v1.0.0 (2026-10-15): Initial in-process HTTP tests.
//   - CORS tests assert the configured origin is the only one ever advertised.
