//! AIサービスクライアント
//!
//! サービスのワイヤ契約（`{"ok": bool, "data": ...}` エンベロープ）を
//! デコードする薄いreqwestラッパー。ケイパビリティごとの名前空間
//! アクセサ（`llm()` / `vlm()` / `rag()` など）経由で操作を公開する。
//!
//! エラーレスポンスはトップレベルの `{"ok": false, "error": ...}` と、
//! FastAPIの `{"detail": {...}}` ラップの両形式を受け付ける。

pub mod agent;
pub mod embeddings;
pub mod finetune;
pub mod llm;
pub mod moderation;
pub mod rag;
pub mod story;
pub mod vlm;

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SmokeError, SmokeResult};

pub use agent::AgentApi;
pub use embeddings::EmbeddingsApi;
pub use finetune::FinetuneApi;
pub use llm::LlmApi;
pub use moderation::ModerationApi;
pub use rag::RagApi;
pub use story::StoryApi;
pub use vlm::VlmApi;

/// AIサービスクライアント
///
/// 共有HTTPクライアント1つとベースURLを保持する。タイムアウトは
/// クライアントレベルの1つのみで、ランナー側からは課さない。
#[derive(Debug, Clone)]
pub struct AiClient {
    http: reqwest::Client,
    base_url: String,
}

/// `/health` のレスポンスペイロード
#[derive(Debug, Clone, Deserialize)]
pub struct HealthData {
    /// サービス状態（例: `"healthy"`）
    pub status: String,
    /// ロード済みLLMモデル名
    #[serde(default)]
    pub llm_model: String,
    /// ロード済みVLMモデル名
    #[serde(default)]
    pub vlm_model: String,
    /// ロード済みembeddingモデル名
    #[serde(default)]
    pub embed_model: String,
    /// 推論デバイス（`cuda` / `cpu` など）
    #[serde(default)]
    pub device: String,
}

/// 成功レスポンスのエンベロープ
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    ok: bool,
    data: Option<T>,
    error: Option<ApiErrorBody>,
}

/// エラーエンベロープの `error` オブジェクト
#[derive(Debug, Clone, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<String>,
    message: String,
}

impl AiClient {
    /// 新しいクライアントを作成
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> SmokeResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SmokeError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// ベースURLを返す
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /health` — サービス稼働確認
    pub async fn health(&self) -> SmokeResult<HealthData> {
        self.get_json("/health").await
    }

    /// テキスト生成API
    pub fn llm(&self) -> LlmApi<'_> {
        LlmApi { client: self }
    }

    /// 画像理解API
    pub fn vlm(&self) -> VlmApi<'_> {
        VlmApi { client: self }
    }

    /// 検索拡張生成API
    pub fn rag(&self) -> RagApi<'_> {
        RagApi { client: self }
    }

    /// テキストベクトル化API
    pub fn embeddings(&self) -> EmbeddingsApi<'_> {
        EmbeddingsApi { client: self }
    }

    /// ストーリー生成API
    pub fn story(&self) -> StoryApi<'_> {
        StoryApi { client: self }
    }

    /// エージェント推論API
    pub fn agent(&self) -> AgentApi<'_> {
        AgentApi { client: self }
    }

    /// ファインチューニング管理API
    pub fn finetune(&self) -> FinetuneApi<'_> {
        FinetuneApi { client: self }
    }

    /// コンテンツモデレーションAPI
    pub fn moderation(&self) -> ModerationApi<'_> {
        ModerationApi { client: self }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> SmokeResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| SmokeError::Http(format!("GET {} failed: {}", path, e)))?;

        Self::decode_envelope(path, response).await
    }

    pub(crate) async fn post_json<T, B>(&self, path: &str, body: &B) -> SmokeResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| SmokeError::Http(format!("POST {} failed: {}", path, e)))?;

        Self::decode_envelope(path, response).await
    }

    /// レスポンスのエンベロープをデコードする
    async fn decode_envelope<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> SmokeResult<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SmokeError::Http(format!("failed to read body of {}: {}", path, e)))?;

        if !status.is_success() {
            return Err(parse_error_body(status, &body));
        }

        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
            SmokeError::Http(format!("failed to decode response of {}: {}", path, e))
        })?;

        match (envelope.ok, envelope.data) {
            (true, Some(data)) => Ok(data),
            (_, _) => {
                let (code, message) = envelope
                    .error
                    .map(|e| (e.code, e.message))
                    .unwrap_or((None, format!("{} returned no data payload", path)));
                Err(SmokeError::Api { code, message })
            }
        }
    }
}

/// エラーボディをパースして [`SmokeError::Api`] に変換する
///
/// トップレベルと `detail` ラップの両形式を試し、どちらでもなければ
/// HTTPステータスをメッセージにする。
fn parse_error_body(status: reqwest::StatusCode, body: &str) -> SmokeError {
    let value: Option<serde_json::Value> = serde_json::from_str(body).ok();

    let error_obj = value.as_ref().and_then(|v| {
        v.get("error")
            .or_else(|| v.get("detail").and_then(|d| d.get("error")))
            .cloned()
    });

    if let Some(obj) = error_obj {
        if let Ok(parsed) = serde_json::from_value::<ApiErrorBody>(obj) {
            return SmokeError::Api {
                code: parsed.code,
                message: parsed.message,
            };
        }
    }

    SmokeError::Api {
        code: None,
        message: format!("HTTP {}", status),
    }
}
