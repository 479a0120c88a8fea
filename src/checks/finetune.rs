//! ファインチューニング管理チェック

use futures::future::{BoxFuture, FutureExt};

use super::CheckOutcome;
use crate::client::AiClient;
use crate::config::RunConfig;
use crate::error::{SmokeError, SmokeResult};

/// ジョブ一覧が取得できること
///
/// ジョブが0件でも正常。`total` と配列長の整合のみ確認する。
pub fn list_jobs<'a>(
    client: &'a AiClient,
    _config: &'a RunConfig,
) -> BoxFuture<'a, SmokeResult<CheckOutcome>> {
    async move {
        let data = client.finetune().list_jobs().await?;

        if data.jobs.len() != data.total as usize {
            return Err(SmokeError::assertion(format!(
                "job list inconsistent: total={} but {} entries",
                data.total,
                data.jobs.len()
            )));
        }

        Ok(CheckOutcome::passed(format!("{} jobs", data.total)))
    }
    .boxed()
}
