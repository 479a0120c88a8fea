//! テキスト生成API（`/llm/*`）

use serde::{Deserialize, Serialize};

use super::AiClient;
use crate::error::SmokeResult;

/// `POST /llm/generate` のリクエスト
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// システムプロンプト
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// ユーザープロンプト
    pub prompt: String,
    /// 生成トークン数上限（サービス側の下限は50）
    pub max_tokens: u32,
    /// サンプリング温度
    pub temperature: f32,
    /// nucleusサンプリングの閾値
    pub top_p: f32,
    /// 停止シーケンス
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            system: None,
            prompt: String::new(),
            max_tokens: 256,
            temperature: 0.7,
            top_p: 0.9,
            stop: None,
        }
    }
}

/// `POST /llm/generate` のレスポンスペイロード
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateData {
    /// 生成テキスト
    pub text: String,
    /// 使用モデル名
    #[serde(default)]
    pub model: String,
    /// トークン使用量（形状はモデル依存）
    #[serde(default)]
    pub usage: serde_json::Value,
}

/// `POST /llm/personaReply` のリクエスト
#[derive(Debug, Clone, Serialize)]
pub struct PersonaReplyRequest {
    /// ペルソナ名（例: `"Elio"`）
    pub persona_name: String,
    /// 会話コンテキスト
    pub context: String,
    /// ユーザー発言
    pub user_message: String,
    /// 追加のスタイル指示
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_style: Option<String>,
    /// 生成トークン数上限
    pub max_tokens: u32,
    /// サンプリング温度
    pub temperature: f32,
}

impl Default for PersonaReplyRequest {
    fn default() -> Self {
        Self {
            persona_name: String::new(),
            context: String::new(),
            user_message: String::new(),
            system_style: None,
            max_tokens: 256,
            temperature: 0.8,
        }
    }
}

/// `POST /llm/personaReply` のレスポンスペイロード
#[derive(Debug, Clone, Deserialize)]
pub struct PersonaReplyData {
    /// キャラクターとしての返答
    pub reply: String,
    /// ペルソナ名（エコーバック）
    #[serde(default)]
    pub persona: String,
    /// 使用モデル名
    #[serde(default)]
    pub model: String,
}

/// `POST /llm/summarizeNews` のリクエスト
#[derive(Debug, Clone, Serialize)]
pub struct SummarizeNewsRequest {
    /// 検索トピック
    pub topics: Vec<String>,
    /// 出力ロケール
    pub locale: String,
    /// ダイジェストに含める最大件数
    pub max_items: u32,
    /// サマリースタイル
    pub style: String,
}

impl Default for SummarizeNewsRequest {
    fn default() -> Self {
        Self {
            topics: Vec::new(),
            locale: "en".to_string(),
            max_items: 6,
            style: "concise-bullet".to_string(),
        }
    }
}

/// ニュースダイジェストの1項目
#[derive(Debug, Clone, Deserialize)]
pub struct NewsItem {
    /// 記事タイトル
    #[serde(default)]
    pub title: String,
    /// 配信元ドメイン
    #[serde(default)]
    pub source: String,
    /// 記事URL
    #[serde(default)]
    pub url: String,
    /// 記事ごとの要約
    #[serde(default)]
    pub summary: String,
}

/// `POST /llm/summarizeNews` のレスポンスペイロード
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeNewsData {
    /// 検索ヒットごとの項目
    #[serde(default)]
    pub items: Vec<NewsItem>,
    /// 全体ダイジェスト
    #[serde(default)]
    pub digest: String,
    /// 使用モデル名
    #[serde(default)]
    pub model: String,
}

/// テキスト生成APIの名前空間アクセサ
#[derive(Debug, Clone, Copy)]
pub struct LlmApi<'a> {
    pub(crate) client: &'a AiClient,
}

impl LlmApi<'_> {
    /// `POST /llm/generate` — 汎用テキスト生成
    pub async fn generate(&self, request: &GenerateRequest) -> SmokeResult<GenerateData> {
        self.client.post_json("/llm/generate", request).await
    }

    /// `POST /llm/personaReply` — ペルソナとしての返答生成
    pub async fn persona_reply(
        &self,
        request: &PersonaReplyRequest,
    ) -> SmokeResult<PersonaReplyData> {
        self.client.post_json("/llm/personaReply", request).await
    }

    /// `POST /llm/summarizeNews` — Webサーチ結果のニュースダイジェスト生成
    pub async fn summarize_news(
        &self,
        request: &SummarizeNewsRequest,
    ) -> SmokeResult<SummarizeNewsData> {
        self.client.post_json("/llm/summarizeNews", request).await
    }
}
