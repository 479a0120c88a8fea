//! テキスト生成チェック

use futures::future::{BoxFuture, FutureExt};

use super::{excerpt, CheckOutcome};
use crate::client::llm::{GenerateRequest, PersonaReplyRequest, SummarizeNewsRequest};
use crate::client::AiClient;
use crate::config::RunConfig;
use crate::error::{SmokeError, SmokeResult};

/// 汎用テキスト生成が非空の補完を返すこと
pub fn generate<'a>(
    client: &'a AiClient,
    _config: &'a RunConfig,
) -> BoxFuture<'a, SmokeResult<CheckOutcome>> {
    async move {
        let request = GenerateRequest {
            prompt: "Reply with one short sentence greeting the Communiverse crew.".to_string(),
            max_tokens: 64,
            ..Default::default()
        };
        let data = client.llm().generate(&request).await?;

        if data.text.trim().is_empty() {
            return Err(SmokeError::assertion("empty completion text"));
        }

        Ok(CheckOutcome::passed(excerpt(&data.text, 80)))
    }
    .boxed()
}

/// ペルソナ返答が非空で、要求したペルソナ名を返すこと
pub fn persona_reply<'a>(
    client: &'a AiClient,
    _config: &'a RunConfig,
) -> BoxFuture<'a, SmokeResult<CheckOutcome>> {
    async move {
        let request = PersonaReplyRequest {
            persona_name: "Elio".to_string(),
            context: "The crew just landed on a glowing asteroid.".to_string(),
            user_message: "What do you see out there?".to_string(),
            max_tokens: 128,
            ..Default::default()
        };
        let data = client.llm().persona_reply(&request).await?;

        if data.reply.trim().is_empty() {
            return Err(SmokeError::assertion("empty persona reply"));
        }
        if !data.persona.is_empty() && data.persona != "Elio" {
            return Err(SmokeError::assertion(format!(
                "persona mismatch: expected Elio, got {}",
                data.persona
            )));
        }

        Ok(CheckOutcome::passed(excerpt(&data.reply, 80)))
    }
    .boxed()
}

/// ニュースダイジェスト生成（Webサーチ設定が無ければスキップ）
pub fn summarize_news<'a>(
    client: &'a AiClient,
    config: &'a RunConfig,
) -> BoxFuture<'a, SmokeResult<CheckOutcome>> {
    async move {
        if !config.web_search.is_configured() {
            return Ok(CheckOutcome::skipped(
                "WEB_SEARCH_ENABLED / WEB_SEARCH_API_KEY not configured",
            ));
        }

        let request = SummarizeNewsRequest {
            topics: vec!["space exploration".to_string()],
            max_items: 3,
            ..Default::default()
        };
        let data = client.llm().summarize_news(&request).await?;

        if data.digest.trim().is_empty() && data.items.is_empty() {
            return Err(SmokeError::assertion("news summary has no digest and no items"));
        }

        Ok(CheckOutcome::passed(format!(
            "{} items, digest: {}",
            data.items.len(),
            excerpt(&data.digest, 60)
        )))
    }
    .boxed()
}
