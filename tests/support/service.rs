//! モックAIサービス
//!
//! wiremockで本物のサービスのワイヤ契約（`{"ok": bool, "data": ...}`
//! エンベロープ）を再現する。各エンドポイントはハッピーパスの固定
//! レスポンスを返し、指定したパスだけをエラーレスポンスに差し替え
//! られる。

use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// モックAIサービス
pub struct MockAiService {
    server: MockServer,
}

/// ハッピーパスのエンドポイント定義（メソッド, パス, dataペイロード）
fn happy_endpoints() -> Vec<(&'static str, &'static str, Value)> {
    vec![
        (
            "GET",
            "/health",
            json!({
                "status": "healthy",
                "llm_model": "qwen2.5-7b-instruct",
                "vlm_model": "qwen2-vl-7b",
                "embed_model": "bge-m3",
                "device": "cuda"
            }),
        ),
        (
            "POST",
            "/llm/generate",
            json!({
                "text": "Hello, Communiverse crew!",
                "model": "qwen2.5-7b-instruct",
                "usage": { "prompt_tokens": 12, "completion_tokens": 8 }
            }),
        ),
        (
            "POST",
            "/llm/personaReply",
            json!({
                "reply": "Whoa, look at that asteroid glow! Isn't it amazing?",
                "persona": "Elio",
                "model": "qwen2.5-7b-instruct"
            }),
        ),
        (
            "POST",
            "/llm/summarizeNews",
            json!({
                "items": [
                    {
                        "title": "New telescope images released",
                        "source": "example.com",
                        "url": "https://example.com/telescope",
                        "summary": "Fresh deep-field images were published this week."
                    }
                ],
                "digest": "- New telescope images released [1]",
                "model": "qwen2.5-7b-instruct"
            }),
        ),
        (
            "POST",
            "/rag/insert",
            json!({ "doc_id": "674fa1b2c3d4e5f6a7b8c9d0", "source": "smoke-test" }),
        ),
        (
            "POST",
            "/rag/search",
            json!({
                "hits": [
                    {
                        "doc_id": "674fa1b2c3d4e5f6a7b8c9d0",
                        "score": 0.92,
                        "chunk": "Elio is a curious young boy who becomes the Earth's representative.",
                        "source": "smoke-test",
                        "url": null,
                        "guild_id": "smoke-test"
                    }
                ],
                "answer": "Elio is the Earth's representative to the Communiverse. [1]",
                "citations": [
                    { "doc_id": "674fa1b2c3d4e5f6a7b8c9d0", "title": "smoke-test", "url": null }
                ],
                "query": "Who is Elio?",
                "total_hits": 1
            }),
        ),
        (
            "POST",
            "/embed/text",
            json!({
                "vectors": [[0.1, 0.2, 0.3], [0.4, 0.5, 0.6]],
                "dim": 3,
                "model": "bge-m3",
                "count": 2
            }),
        ),
        (
            "GET",
            "/embed/model-info",
            json!({
                "model": "bge-m3",
                "dimension": 1024,
                "max_length": 512,
                "supports_multilingual": true
            }),
        ),
        (
            "POST",
            "/story/generate",
            json!({
                "story": "The lighthouse keeper had counted waves for thirty years when the first signal came.",
                "prompt": "A lonely lighthouse keeper receives a message from the stars.",
                "word_count": 15,
                "paragraph_count": 1,
                "genre": "science fiction"
            }),
        ),
        (
            "POST",
            "/story/continue",
            json!({
                "continuation": "A pale light rose over the horizon, pulsing in patterns no ship would use.",
                "full_story": "The lighthouse keeper climbed the spiral stairs one last time. A pale light rose over the horizon.",
                "continuation_word_count": 14
            }),
        ),
        (
            "POST",
            "/story/dialogue",
            json!({
                "dialogue": "ELIO: \"Did you see that one?\"\nGLORDON: \"The sky remembers every stone it drops.\"",
                "lines": [
                    "ELIO: \"Did you see that one?\"",
                    "GLORDON: \"The sky remembers every stone it drops.\""
                ],
                "characters": ["Elio", "Glordon"],
                "total_lines": 2
            }),
        ),
        (
            "POST",
            "/agent/reasoning",
            json!({
                "problem": "If a signal takes 8 minutes to reach Earth from the Sun, how long does a round trip take?",
                "reasoning_type": "chain-of-thought",
                "steps": [
                    { "step_number": 1, "thought": "Step 1: One way takes 8 minutes", "reasoning": "Given." }
                ],
                "conclusion": "16 minutes",
                "full_reasoning": "Step 1: One way takes 8 minutes.\nFinal Conclusion: 16 minutes."
            }),
        ),
        (
            "POST",
            "/agent/task-planning",
            json!({
                "goal": "Prepare a weekly community digest for the fan server.",
                "tasks": [
                    {
                        "task_id": "t1",
                        "description": "Collect top threads",
                        "tool": "rag.search",
                        "dependencies": [],
                        "priority": 4,
                        "estimated_duration": 30
                    }
                ],
                "total_tasks": 1,
                "estimated_total_duration": 30
            }),
        ),
        (
            "POST",
            "/agent/web-search",
            json!({
                "query": "latest space telescope discoveries",
                "results": [
                    {
                        "title": "New exoplanet imaged directly",
                        "snippet": "Astronomers captured a direct image of a young gas giant.",
                        "url": "https://example.com/exoplanet",
                        "domain": "example.com"
                    }
                ],
                "total_results": 1,
                "summary": "- A young gas giant was imaged directly [1]",
                "has_summary": true
            }),
        ),
        (
            "GET",
            "/finetune/list-jobs",
            json!({ "jobs": [], "total": 0 }),
        ),
        (
            "POST",
            "/moderation/scan",
            json!({
                "is_safe": true,
                "toxicity": 0.0,
                "hate": 0.0,
                "sexual": 0.0,
                "violence": 0.0,
                "flags": []
            }),
        ),
    ]
}

/// サービスのエラーレスポンスボディ（トップレベル形式）
pub fn error_body(code: &str, message: &str) -> Value {
    json!({ "ok": false, "error": { "code": code, "message": message } })
}

fn envelope(data: Value) -> Value {
    json!({ "ok": true, "data": data })
}

impl MockAiService {
    /// 全エンドポイントがハッピーパスを返すサービスを起動する
    pub async fn healthy() -> Self {
        Self::with_overrides(&[], false).await
    }

    /// 指定パスだけHTTP 500のエラーエンベロープを返すサービスを起動する
    pub async fn with_failures(failing: &[&str]) -> Self {
        Self::with_overrides(failing, false).await
    }

    /// RAG検索が0件を返すサービスを起動する
    pub async fn with_empty_search() -> Self {
        Self::with_overrides(&[], true).await
    }

    /// ヘルスチェックが落ちているサービスを起動する
    pub async fn unhealthy() -> Self {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(error_body("AI_MODEL_ERROR", "models not loaded")),
            )
            .mount(&server)
            .await;
        Self { server }
    }

    /// ベースURLを返す
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    async fn with_overrides(failing: &[&str], empty_search: bool) -> Self {
        let server = MockServer::start().await;

        for (verb, route, data) in happy_endpoints() {
            if failing.contains(&route) {
                Mock::given(method(verb))
                    .and(path(route))
                    .respond_with(
                        ResponseTemplate::new(500)
                            .set_body_json(error_body("AI_MODEL_ERROR", "model exploded")),
                    )
                    .mount(&server)
                    .await;
                continue;
            }

            let body = if route == "/rag/search" && empty_search {
                json!({
                    "hits": [],
                    "answer": null,
                    "citations": [],
                    "query": "Who is Elio?",
                    "total_hits": 0
                })
            } else {
                data
            };

            Mock::given(method(verb))
                .and(path(route))
                .respond_with(ResponseTemplate::new(200).set_body_json(envelope(body)))
                .mount(&server)
                .await;
        }

        // /vlm/describe はtaskフィールドでレスポンスが変わる
        if failing.contains(&"/vlm/describe") {
            Mock::given(method("POST"))
                .and(path("/vlm/describe"))
                .respond_with(
                    ResponseTemplate::new(500)
                        .set_body_json(error_body("AI_MODEL_ERROR", "model exploded")),
                )
                .mount(&server)
                .await;
        } else {
            Mock::given(method("POST"))
                .and(path("/vlm/describe"))
                .and(body_partial_json(json!({ "task": "caption" })))
                .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
                    "caption": "A wooden boardwalk crossing a green marsh under a blue sky.",
                    "description": null,
                    "reaction": null,
                    "safety": { "nsfw": false, "violence": false, "hate": false },
                    "model": "qwen2-vl-7b"
                }))))
                .mount(&server)
                .await;

            Mock::given(method("POST"))
                .and(path("/vlm/describe"))
                .and(body_partial_json(json!({ "task": "describe" })))
                .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
                    "caption": null,
                    "description": "The image shows a long wooden boardwalk leading through tall green grass.",
                    "reaction": null,
                    "safety": { "nsfw": false, "violence": false, "hate": false },
                    "model": "qwen2-vl-7b"
                }))))
                .mount(&server)
                .await;
        }

        Self { server }
    }
}
