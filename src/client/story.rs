//! ストーリー生成API（`/story/*`）

use serde::{Deserialize, Serialize};

use super::AiClient;
use crate::error::SmokeResult;

/// `POST /story/generate` のリクエスト
#[derive(Debug, Clone, Serialize)]
pub struct StoryGenerateRequest {
    /// ストーリーのプロンプト/テーマ
    pub prompt: String,
    /// ジャンル
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// 長さ（`short` / `medium` / `long`）
    pub length: String,
    /// 文体
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// 登場キャラクター名
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<Vec<String>>,
    /// 舞台設定
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting: Option<String>,
}

impl Default for StoryGenerateRequest {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            genre: None,
            length: "short".to_string(),
            style: None,
            characters: None,
            setting: None,
        }
    }
}

/// `POST /story/generate` のレスポンスペイロード
#[derive(Debug, Clone, Deserialize)]
pub struct StoryData {
    /// 生成されたストーリー本文
    pub story: String,
    /// プロンプト（エコーバック）
    #[serde(default)]
    pub prompt: String,
    /// 語数
    #[serde(default)]
    pub word_count: u32,
    /// 段落数
    #[serde(default)]
    pub paragraph_count: u32,
    /// ジャンル（エコーバック）
    #[serde(default)]
    pub genre: Option<String>,
}

/// `POST /story/continue` のリクエスト
#[derive(Debug, Clone, Serialize)]
pub struct StoryContinueRequest {
    /// ここまでのストーリー本文
    pub existing_story: String,
    /// 続きの方向性
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    /// 生成する語数（サービス側の下限は100）
    pub length: u32,
}

impl Default for StoryContinueRequest {
    fn default() -> Self {
        Self {
            existing_story: String::new(),
            direction: None,
            length: 150,
        }
    }
}

/// `POST /story/continue` のレスポンスペイロード
#[derive(Debug, Clone, Deserialize)]
pub struct StoryContinueData {
    /// 生成された続き
    pub continuation: String,
    /// 既存本文と続きを結合した全文
    #[serde(default)]
    pub full_story: String,
    /// 続き部分の語数
    #[serde(default)]
    pub continuation_word_count: u32,
}

/// `POST /story/dialogue` のリクエスト
#[derive(Debug, Clone, Serialize)]
pub struct DialogueRequest {
    /// 会話するキャラクター（2名以上）
    pub characters: Vec<String>,
    /// 会話のコンテキスト/シナリオ
    pub context: String,
    /// 会話のトーン
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    /// 会話の往復数（サービス側の下限は2）
    pub turns: u32,
}

impl Default for DialogueRequest {
    fn default() -> Self {
        Self {
            characters: Vec::new(),
            context: String::new(),
            tone: None,
            turns: 3,
        }
    }
}

/// `POST /story/dialogue` のレスポンスペイロード
#[derive(Debug, Clone, Deserialize)]
pub struct DialogueData {
    /// 生成された会話全文
    pub dialogue: String,
    /// `CHARACTER: "..."` 形式にパースされた行
    #[serde(default)]
    pub lines: Vec<String>,
    /// キャラクター一覧（エコーバック）
    #[serde(default)]
    pub characters: Vec<String>,
    /// パースされた行数
    #[serde(default)]
    pub total_lines: u32,
}

/// ストーリー生成APIの名前空間アクセサ
#[derive(Debug, Clone, Copy)]
pub struct StoryApi<'a> {
    pub(crate) client: &'a AiClient,
}

impl StoryApi<'_> {
    /// `POST /story/generate` — プロンプトからストーリーを生成
    pub async fn generate(&self, request: &StoryGenerateRequest) -> SmokeResult<StoryData> {
        self.client.post_json("/story/generate", request).await
    }

    /// `POST /story/continue` — 既存ストーリーの続きを生成
    pub async fn continue_story(
        &self,
        request: &StoryContinueRequest,
    ) -> SmokeResult<StoryContinueData> {
        self.client.post_json("/story/continue", request).await
    }

    /// `POST /story/dialogue` — キャラクター会話を生成
    pub async fn dialogue(&self, request: &DialogueRequest) -> SmokeResult<DialogueData> {
        self.client.post_json("/story/dialogue", request).await
    }
}
