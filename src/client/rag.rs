//! 検索拡張生成API（`/rag/*`）

use serde::{Deserialize, Serialize};

use super::AiClient;
use crate::error::SmokeResult;

/// `POST /rag/insert` のリクエスト
#[derive(Debug, Clone, Serialize)]
pub struct InsertRequest {
    /// 文書本文
    pub text: String,
    /// 文書ソース識別子
    pub source: String,
    /// ギルド（コミュニティ）スコープ
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<String>,
    /// 任意メタデータ
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    /// 元文書URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// `POST /rag/insert` のレスポンスペイロード
#[derive(Debug, Clone, Deserialize)]
pub struct InsertData {
    /// 採番された文書ID
    pub doc_id: String,
    /// 文書ソース識別子（エコーバック）
    #[serde(default)]
    pub source: String,
}

/// `POST /rag/search` のリクエスト
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    /// 検索クエリ
    pub query: String,
    /// ギルド（コミュニティ）スコープ
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<String>,
    /// 取得件数上限
    pub top_k: u32,
    /// MMR多様化の重み
    pub mmr_lambda: f32,
    /// 回答生成も行うか
    pub generate_answer: bool,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            guild_id: None,
            top_k: 6,
            mmr_lambda: 0.3,
            generate_answer: true,
        }
    }
}

/// 検索ヒット1件
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    /// 文書ID
    pub doc_id: String,
    /// 類似度スコア
    #[serde(default)]
    pub score: f32,
    /// ヒットしたチャンク本文（先頭500文字）
    #[serde(default)]
    pub chunk: String,
    /// 文書ソース識別子
    #[serde(default)]
    pub source: String,
    /// 元文書URL
    #[serde(default)]
    pub url: Option<String>,
    /// ギルドスコープ
    #[serde(default)]
    pub guild_id: Option<String>,
}

/// 回答の引用元
#[derive(Debug, Clone, Deserialize)]
pub struct Citation {
    /// 文書ID
    pub doc_id: String,
    /// 引用タイトル
    #[serde(default)]
    pub title: String,
    /// 元文書URL
    #[serde(default)]
    pub url: Option<String>,
}

/// `POST /rag/search` のレスポンスペイロード
#[derive(Debug, Clone, Deserialize)]
pub struct SearchData {
    /// 検索ヒット一覧
    #[serde(default)]
    pub hits: Vec<SearchHit>,
    /// 生成された回答（`generate_answer` かつヒットありのとき）
    #[serde(default)]
    pub answer: Option<String>,
    /// 回答の引用元一覧
    #[serde(default)]
    pub citations: Vec<Citation>,
    /// 検索クエリ（エコーバック）
    #[serde(default)]
    pub query: String,
    /// ヒット総数
    pub total_hits: u32,
}

/// 検索拡張生成APIの名前空間アクセサ
#[derive(Debug, Clone, Copy)]
pub struct RagApi<'a> {
    pub(crate) client: &'a AiClient,
}

impl RagApi<'_> {
    /// `POST /rag/insert` — 文書をストアに登録
    pub async fn insert(&self, request: &InsertRequest) -> SmokeResult<InsertData> {
        self.client.post_json("/rag/insert", request).await
    }

    /// `POST /rag/search` — 検索（任意で回答生成）
    pub async fn search(&self, request: &SearchRequest) -> SmokeResult<SearchData> {
        self.client.post_json("/rag/search", request).await
    }
}
