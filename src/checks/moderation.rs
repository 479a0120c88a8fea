//! コンテンツモデレーションチェック

use futures::future::{BoxFuture, FutureExt};

use super::CheckOutcome;
use crate::client::moderation::ScanRequest;
use crate::client::AiClient;
use crate::config::RunConfig;
use crate::error::{SmokeError, SmokeResult};

fn score_in_range(name: &str, score: f32) -> SmokeResult<()> {
    if (0.0..=1.0).contains(&score) {
        Ok(())
    } else {
        Err(SmokeError::assertion(format!(
            "{} score out of range: {}",
            name, score
        )))
    }
}

/// 無害なテキストが安全判定されること
pub fn scan<'a>(
    client: &'a AiClient,
    _config: &'a RunConfig,
) -> BoxFuture<'a, SmokeResult<CheckOutcome>> {
    async move {
        let request = ScanRequest {
            text: "The stars above the boardwalk glowed softly while the crew waved hello."
                .to_string(),
            strict_mode: false,
        };
        let data = client.moderation().scan(&request).await?;

        score_in_range("toxicity", data.toxicity)?;
        score_in_range("hate", data.hate)?;
        score_in_range("sexual", data.sexual)?;
        score_in_range("violence", data.violence)?;

        if !data.is_safe {
            return Err(SmokeError::assertion(format!(
                "benign text flagged unsafe: {:?}",
                data.flags
            )));
        }

        Ok(CheckOutcome::passed(format!(
            "is_safe={} toxicity={:.2}",
            data.is_safe, data.toxicity
        )))
    }
    .boxed()
}

/// バッチスキャンが入力と同数の結果を返すこと
pub fn batch_scan<'a>(
    client: &'a AiClient,
    _config: &'a RunConfig,
) -> BoxFuture<'a, SmokeResult<CheckOutcome>> {
    async move {
        let texts = vec![
            "Welcome to the weekly watch party!".to_string(),
            "Remember to be kind to new members.".to_string(),
            "The next episode drops on Friday.".to_string(),
        ];
        let data = client.moderation().batch_scan(&texts, false).await?;

        if data.results.len() != texts.len() {
            return Err(SmokeError::assertion(format!(
                "expected {} scan results, got {}",
                texts.len(),
                data.results.len()
            )));
        }

        Ok(CheckOutcome::passed(format!(
            "{} texts, all_safe={}",
            data.results.len(),
            data.all_safe
        )))
    }
    .boxed()
}
