//! 画像理解チェック

use futures::future::{BoxFuture, FutureExt};

use super::{excerpt, CheckOutcome};
use crate::client::vlm::DescribeRequest;
use crate::client::AiClient;
use crate::config::RunConfig;
use crate::error::{SmokeError, SmokeResult};

/// スモークテスト用の固定画像URL
const SMOKE_IMAGE_URL: &str = "https://picsum.photos/seed/communiverse/512/512";

/// キャプション生成が非空のキャプションを返すこと
pub fn describe<'a>(
    client: &'a AiClient,
    _config: &'a RunConfig,
) -> BoxFuture<'a, SmokeResult<CheckOutcome>> {
    async move {
        let request = DescribeRequest::caption(SMOKE_IMAGE_URL);
        let data = client.vlm().describe(&request).await?;

        let caption = data.caption.unwrap_or_default();
        if caption.trim().is_empty() {
            return Err(SmokeError::assertion("empty image caption"));
        }

        Ok(CheckOutcome::passed(excerpt(&caption, 80)))
    }
    .boxed()
}

/// 詳細分析が非空の説明と安全性判定を返すこと
pub fn analyze<'a>(
    client: &'a AiClient,
    _config: &'a RunConfig,
) -> BoxFuture<'a, SmokeResult<CheckOutcome>> {
    async move {
        let data = client.vlm().analyze(SMOKE_IMAGE_URL).await?;

        let description = data.description.unwrap_or_default();
        if description.trim().is_empty() {
            return Err(SmokeError::assertion("empty image description"));
        }

        Ok(CheckOutcome::passed(format!(
            "nsfw={} violence={} {}",
            data.safety.nsfw,
            data.safety.violence,
            excerpt(&description, 60)
        )))
    }
    .boxed()
}
