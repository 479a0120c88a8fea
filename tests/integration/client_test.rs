//! クライアントファサードのインテグレーションテスト
//!
//! エンベロープのデコードとエラーボディの両形式の取り扱いを確認する。

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use aismoke::client::llm::GenerateRequest;
use aismoke::client::AiClient;
use aismoke::error::SmokeError;

use crate::support::service::{error_body, MockAiService};

fn client_for(uri: &str) -> AiClient {
    AiClient::new(uri, Duration::from_secs(5)).expect("client should build")
}

#[tokio::test]
async fn test_generate_decodes_success_envelope() {
    let service = MockAiService::healthy().await;
    let client = client_for(&service.uri());

    let request = GenerateRequest {
        prompt: "ping".to_string(),
        ..Default::default()
    };
    let data = client
        .llm()
        .generate(&request)
        .await
        .expect("generate should succeed");

    assert_eq!(data.text, "Hello, Communiverse crew!");
    assert_eq!(data.model, "qwen2.5-7b-instruct");
}

#[tokio::test]
async fn test_health_decodes_model_fields() {
    let service = MockAiService::healthy().await;
    let client = client_for(&service.uri());

    let data = client.health().await.expect("health should succeed");

    assert_eq!(data.status, "healthy");
    assert_eq!(data.embed_model, "bge-m3");
    assert_eq!(data.device, "cuda");
}

#[tokio::test]
async fn test_top_level_error_envelope_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/llm/generate"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(error_body("AI_MODEL_ERROR", "boom")),
        )
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let request = GenerateRequest {
        prompt: "ping".to_string(),
        ..Default::default()
    };
    let error = client
        .llm()
        .generate(&request)
        .await
        .expect_err("generate should fail");

    match error {
        SmokeError::Api { code, message } => {
            assert_eq!(code.as_deref(), Some("AI_MODEL_ERROR"));
            assert_eq!(message, "boom");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_detail_wrapped_error_envelope_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rag/insert"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "detail": { "ok": false, "error": { "code": "DB_ERROR", "message": "insert failed" } }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let request = aismoke::client::rag::InsertRequest {
        text: "doc".to_string(),
        source: "smoke".to_string(),
        guild_id: None,
        metadata: None,
        url: None,
    };
    let error = client
        .rag()
        .insert(&request)
        .await
        .expect_err("insert should fail");

    match error {
        SmokeError::Api { code, message } => {
            assert_eq!(code.as_deref(), Some("DB_ERROR"));
            assert_eq!(message, "insert failed");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_error_body_reports_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let error = client.health().await.expect_err("health should fail");

    match error {
        SmokeError::Api { code, message } => {
            assert!(code.is_none());
            assert!(message.contains("HTTP 502"), "message: {}", message);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_ok_false_at_200_is_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/finetune/list-jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": false,
            "error": { "code": "AI_MODEL_ERROR", "message": "job store offline" }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let error = client
        .finetune()
        .list_jobs()
        .await
        .expect_err("list_jobs should fail");

    match error {
        SmokeError::Api { message, .. } => assert_eq!(message, "job store offline"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_batch_scan_returns_one_result_per_text() {
    let service = MockAiService::healthy().await;
    let client = client_for(&service.uri());

    let texts = vec![
        "first".to_string(),
        "second".to_string(),
        "third".to_string(),
    ];
    let data = client
        .moderation()
        .batch_scan(&texts, false)
        .await
        .expect("batch scan should succeed");

    assert_eq!(data.results.len(), 3);
    assert!(data.all_safe);
}

#[tokio::test]
async fn test_vlm_task_field_selects_caption_or_description() {
    let service = MockAiService::healthy().await;
    let client = client_for(&service.uri());

    let caption_request = aismoke::client::vlm::DescribeRequest::caption("https://example.com/img");
    let caption = client
        .vlm()
        .describe(&caption_request)
        .await
        .expect("describe should succeed");
    assert!(caption.caption.unwrap_or_default().contains("boardwalk"));
    assert!(caption.description.is_none());

    let analysis = client
        .vlm()
        .analyze("https://example.com/img")
        .await
        .expect("analyze should succeed");
    assert!(analysis.description.unwrap_or_default().contains("boardwalk"));
    assert!(analysis.caption.is_none());
}
