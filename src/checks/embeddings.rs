//! テキストベクトル化チェック

use futures::future::{BoxFuture, FutureExt};

use super::CheckOutcome;
use crate::client::embeddings::EmbedRequest;
use crate::client::AiClient;
use crate::config::RunConfig;
use crate::error::{SmokeError, SmokeResult};

/// 入力と同数の非空ベクトルが返ること
pub fn embed<'a>(
    client: &'a AiClient,
    _config: &'a RunConfig,
) -> BoxFuture<'a, SmokeResult<CheckOutcome>> {
    async move {
        let texts = vec![
            "Hello from the smoke test.".to_string(),
            "The Communiverse welcomes every civilization.".to_string(),
        ];
        let request = EmbedRequest {
            texts: texts.clone(),
            ..Default::default()
        };
        let data = client.embeddings().embed(&request).await?;

        if data.vectors.len() != texts.len() {
            return Err(SmokeError::assertion(format!(
                "expected {} vectors, got {}",
                texts.len(),
                data.vectors.len()
            )));
        }
        if data.dim == 0 {
            return Err(SmokeError::assertion("embedding dimension is 0"));
        }
        if data.vectors.iter().any(|v| v.len() != data.dim as usize) {
            return Err(SmokeError::assertion("vector length does not match dim"));
        }

        Ok(CheckOutcome::passed(format!(
            "{} vectors, dim={}",
            data.vectors.len(),
            data.dim
        )))
    }
    .boxed()
}

/// モデル情報が名前と次元数を返すこと
pub fn model_info<'a>(
    client: &'a AiClient,
    _config: &'a RunConfig,
) -> BoxFuture<'a, SmokeResult<CheckOutcome>> {
    async move {
        let data = client.embeddings().model_info().await?;

        if data.model.trim().is_empty() {
            return Err(SmokeError::assertion("model info has empty model name"));
        }
        if data.dimension == 0 {
            return Err(SmokeError::assertion("model info reports dimension 0"));
        }

        Ok(CheckOutcome::passed(format!(
            "{} dim={} max_length={}",
            data.model, data.dimension, data.max_length
        )))
    }
    .boxed()
}
