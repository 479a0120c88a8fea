//! ヘルスチェック
//!
//! 必須の先頭チェック。失敗したらラン全体を中断する。

use futures::future::{BoxFuture, FutureExt};

use super::CheckOutcome;
use crate::client::AiClient;
use crate::config::RunConfig;
use crate::error::{SmokeError, SmokeResult};

/// `GET /health` を呼び出し、サービスの稼働を確認する
pub fn probe<'a>(
    client: &'a AiClient,
    _config: &'a RunConfig,
) -> BoxFuture<'a, SmokeResult<CheckOutcome>> {
    async move {
        let data = client.health().await?;

        if data.status.trim().is_empty() {
            return Err(SmokeError::assertion("health response has empty status"));
        }

        Ok(CheckOutcome::passed(format!(
            "status={} llm={} vlm={} embed={} device={}",
            data.status, data.llm_model, data.vlm_model, data.embed_model, data.device
        )))
    }
    .boxed()
}
