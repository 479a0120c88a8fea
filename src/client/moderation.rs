//! コンテンツモデレーションAPI（`/moderation/*`）
//!
//! サービス側のルートは1件スキャンのみ。`batch_scan` はファサード側で
//! 逐次ループして結果を集約する。

use serde::{Deserialize, Serialize};

use super::AiClient;
use crate::error::SmokeResult;

/// `POST /moderation/scan` のリクエスト
#[derive(Debug, Clone, Serialize)]
pub struct ScanRequest {
    /// スキャン対象テキスト
    pub text: String,
    /// 厳格モード（閾値を下げる）
    pub strict_mode: bool,
}

/// `POST /moderation/scan` のレスポンスペイロード
///
/// 各スコアは `0.0..=1.0`。
#[derive(Debug, Clone, Deserialize)]
pub struct ScanData {
    /// 総合安全判定
    pub is_safe: bool,
    /// 毒性スコア
    pub toxicity: f32,
    /// ヘイトスコア
    pub hate: f32,
    /// 性的表現スコア
    pub sexual: f32,
    /// 暴力表現スコア
    pub violence: f32,
    /// 閾値超過したカテゴリ
    #[serde(default)]
    pub flags: Vec<String>,
}

/// バッチスキャンの集約結果
#[derive(Debug, Clone)]
pub struct BatchScanData {
    /// 入力順のスキャン結果
    pub results: Vec<ScanData>,
    /// 全テキストが安全と判定されたか
    pub all_safe: bool,
}

/// コンテンツモデレーションAPIの名前空間アクセサ
#[derive(Debug, Clone, Copy)]
pub struct ModerationApi<'a> {
    pub(crate) client: &'a AiClient,
}

impl ModerationApi<'_> {
    /// `POST /moderation/scan` — テキスト1件のスキャン
    pub async fn scan(&self, request: &ScanRequest) -> SmokeResult<ScanData> {
        self.client.post_json("/moderation/scan", request).await
    }

    /// 複数テキストの逐次スキャン
    ///
    /// 1件でも失敗したらバッチ全体をエラーにする。
    pub async fn batch_scan(&self, texts: &[String], strict_mode: bool) -> SmokeResult<BatchScanData> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            let request = ScanRequest {
                text: text.clone(),
                strict_mode,
            };
            results.push(self.scan(&request).await?);
        }

        let all_safe = results.iter().all(|r| r.is_safe);
        Ok(BatchScanData { results, all_safe })
    }
}
