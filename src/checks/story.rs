//! ストーリー生成チェック

use futures::future::{BoxFuture, FutureExt};

use super::{excerpt, CheckOutcome};
use crate::client::story::{DialogueRequest, StoryContinueRequest, StoryGenerateRequest};
use crate::client::AiClient;
use crate::config::RunConfig;
use crate::error::{SmokeError, SmokeResult};

/// ストーリー生成が非空の本文と語数を返すこと
pub fn generate<'a>(
    client: &'a AiClient,
    _config: &'a RunConfig,
) -> BoxFuture<'a, SmokeResult<CheckOutcome>> {
    async move {
        let request = StoryGenerateRequest {
            prompt: "A lonely lighthouse keeper receives a message from the stars.".to_string(),
            genre: Some("science fiction".to_string()),
            ..Default::default()
        };
        let data = client.story().generate(&request).await?;

        if data.story.trim().is_empty() {
            return Err(SmokeError::assertion("empty story text"));
        }
        if data.word_count == 0 {
            return Err(SmokeError::assertion("story word_count is 0"));
        }

        Ok(CheckOutcome::passed(format!(
            "{} words: {}",
            data.word_count,
            excerpt(&data.story, 60)
        )))
    }
    .boxed()
}

/// ストーリー継続が非空の続きを返すこと
pub fn continue_story<'a>(
    client: &'a AiClient,
    _config: &'a RunConfig,
) -> BoxFuture<'a, SmokeResult<CheckOutcome>> {
    async move {
        let request = StoryContinueRequest {
            existing_story: "The lighthouse keeper climbed the spiral stairs one last time. \
                             Outside, the sea was strangely silent."
                .to_string(),
            direction: Some("A light appears on the horizon.".to_string()),
            ..Default::default()
        };
        let data = client.story().continue_story(&request).await?;

        if data.continuation.trim().is_empty() {
            return Err(SmokeError::assertion("empty story continuation"));
        }

        Ok(CheckOutcome::passed(excerpt(&data.continuation, 80)))
    }
    .boxed()
}

/// 会話生成が非空の会話を返すこと
pub fn dialogue<'a>(
    client: &'a AiClient,
    _config: &'a RunConfig,
) -> BoxFuture<'a, SmokeResult<CheckOutcome>> {
    async move {
        let request = DialogueRequest {
            characters: vec!["Elio".to_string(), "Glordon".to_string()],
            context: "They are watching a meteor shower from the observation deck.".to_string(),
            ..Default::default()
        };
        let data = client.story().dialogue(&request).await?;

        if data.dialogue.trim().is_empty() {
            return Err(SmokeError::assertion("empty dialogue text"));
        }

        Ok(CheckOutcome::passed(format!(
            "{} lines: {}",
            data.total_lines,
            excerpt(&data.dialogue, 60)
        )))
    }
    .boxed()
}
