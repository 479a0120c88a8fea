//! テキストベクトル化API（`/embed/*`）

use serde::{Deserialize, Serialize};

use super::AiClient;
use crate::error::SmokeResult;

/// `POST /embed/text` のリクエスト
#[derive(Debug, Clone, Serialize)]
pub struct EmbedRequest {
    /// ベクトル化する入力テキスト
    pub texts: Vec<String>,
    /// 言語ヒント
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang_hint: Option<String>,
    /// L2正規化するか
    pub normalize: bool,
}

impl Default for EmbedRequest {
    fn default() -> Self {
        Self {
            texts: Vec::new(),
            lang_hint: None,
            normalize: true,
        }
    }
}

/// `POST /embed/text` のレスポンスペイロード
#[derive(Debug, Clone, Deserialize)]
pub struct EmbedData {
    /// 入力順のベクトル一覧
    #[serde(default)]
    pub vectors: Vec<Vec<f32>>,
    /// ベクトル次元数
    pub dim: u32,
    /// 使用モデル名
    #[serde(default)]
    pub model: String,
    /// 返却ベクトル数
    #[serde(default)]
    pub count: u32,
}

/// `GET /embed/model-info` のレスポンスペイロード
#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfoData {
    /// モデル名
    pub model: String,
    /// ベクトル次元数
    pub dimension: u32,
    /// 最大入力長（トークン）
    #[serde(default)]
    pub max_length: u32,
    /// 多言語対応か
    #[serde(default)]
    pub supports_multilingual: bool,
}

/// テキストベクトル化APIの名前空間アクセサ
#[derive(Debug, Clone, Copy)]
pub struct EmbeddingsApi<'a> {
    pub(crate) client: &'a AiClient,
}

impl EmbeddingsApi<'_> {
    /// `POST /embed/text` — テキストのベクトル化
    pub async fn embed(&self, request: &EmbedRequest) -> SmokeResult<EmbedData> {
        self.client.post_json("/embed/text", request).await
    }

    /// `GET /embed/model-info` — embeddingモデル情報の取得
    pub async fn model_info(&self) -> SmokeResult<ModelInfoData> {
        self.client.get_json("/embed/model-info").await
    }
}
