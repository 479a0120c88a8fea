//! ファインチューニング管理API（`/finetune/*`）

use serde::Deserialize;

use super::AiClient;
use crate::error::SmokeResult;

/// `GET /finetune/list-jobs` のレスポンスペイロード
///
/// ジョブの形状はタスク種別により異なるため `Value` のまま保持する。
#[derive(Debug, Clone, Deserialize)]
pub struct ListJobsData {
    /// 登録済みジョブ一覧（作成日時の降順）
    #[serde(default)]
    pub jobs: Vec<serde_json::Value>,
    /// 返却件数
    pub total: u32,
}

/// ファインチューニング管理APIの名前空間アクセサ
#[derive(Debug, Clone, Copy)]
pub struct FinetuneApi<'a> {
    pub(crate) client: &'a AiClient,
}

impl FinetuneApi<'_> {
    /// `GET /finetune/list-jobs` — トレーニングジョブの一覧取得
    pub async fn list_jobs(&self) -> SmokeResult<ListJobsData> {
        self.client.get_json("/finetune/list-jobs").await
    }
}
