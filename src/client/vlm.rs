//! 画像理解API（`/vlm/*`）
//!
//! サービス側のルートは `/vlm/describe` 1つで、`task` フィールドにより
//! キャプション生成と詳細分析を切り替える。`describe` / `analyze` は
//! このファサード上の呼び分け。

use serde::{Deserialize, Serialize};

use super::AiClient;
use crate::error::SmokeResult;

/// `POST /vlm/describe` のリクエスト
#[derive(Debug, Clone, Serialize)]
pub struct DescribeRequest {
    /// 対象画像URL
    pub image_url: String,
    /// タスク種別（`caption` / `describe` / `react`）
    pub task: String,
    /// 出力トーン（`neutral` / `playful` / `dramatic`）
    pub tone: String,
    /// タスク種別の代わりに使う自由質問
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

impl DescribeRequest {
    /// キャプション生成リクエストを作る
    pub fn caption(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            task: "caption".to_string(),
            tone: "neutral".to_string(),
            question: None,
        }
    }

    /// 詳細分析リクエストを作る
    pub fn analysis(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            task: "describe".to_string(),
            tone: "neutral".to_string(),
            question: None,
        }
    }
}

/// 安全性判定フラグ
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SafetyCheck {
    /// NSFW表現の検知
    #[serde(default)]
    pub nsfw: bool,
    /// 暴力表現の検知
    #[serde(default)]
    pub violence: bool,
    /// ヘイト表現の検知
    #[serde(default)]
    pub hate: bool,
}

/// `POST /vlm/describe` のレスポンスペイロード
///
/// `task` に応じて `caption` / `description` / `reaction` のいずれかが埋まる。
#[derive(Debug, Clone, Deserialize)]
pub struct DescribeData {
    /// キャプション（task=caption のとき）
    #[serde(default)]
    pub caption: Option<String>,
    /// 詳細説明（task=describe のとき）
    #[serde(default)]
    pub description: Option<String>,
    /// リアクション（task=react のとき）
    #[serde(default)]
    pub reaction: Option<String>,
    /// 安全性判定
    #[serde(default)]
    pub safety: SafetyCheck,
    /// 使用モデル名
    #[serde(default)]
    pub model: String,
}

/// 画像理解APIの名前空間アクセサ
#[derive(Debug, Clone, Copy)]
pub struct VlmApi<'a> {
    pub(crate) client: &'a AiClient,
}

impl VlmApi<'_> {
    /// `POST /vlm/describe`（task=caption）— 画像キャプション生成
    pub async fn describe(&self, request: &DescribeRequest) -> SmokeResult<DescribeData> {
        self.client.post_json("/vlm/describe", request).await
    }

    /// `POST /vlm/describe`（task=describe）— 画像の詳細分析
    pub async fn analyze(&self, image_url: &str) -> SmokeResult<DescribeData> {
        let request = DescribeRequest::analysis(image_url);
        self.client.post_json("/vlm/describe", &request).await
    }
}
