//! エージェント推論チェック

use futures::future::{BoxFuture, FutureExt};

use super::{excerpt, CheckOutcome};
use crate::client::agent::{ReasoningRequest, TaskPlanningRequest, WebSearchRequest};
use crate::client::AiClient;
use crate::config::RunConfig;
use crate::error::{SmokeError, SmokeResult};

/// 構造化推論が非空の推論全文を返すこと
pub fn reasoning<'a>(
    client: &'a AiClient,
    _config: &'a RunConfig,
) -> BoxFuture<'a, SmokeResult<CheckOutcome>> {
    async move {
        let request = ReasoningRequest {
            problem: "If a signal takes 8 minutes to reach Earth from the Sun, \
                      how long does a round trip take?"
                .to_string(),
            ..Default::default()
        };
        let data = client.agent().reasoning(&request).await?;

        if data.full_reasoning.trim().is_empty() {
            return Err(SmokeError::assertion("empty reasoning output"));
        }

        Ok(CheckOutcome::passed(format!(
            "{} steps: {}",
            data.steps.len(),
            excerpt(&data.full_reasoning, 60)
        )))
    }
    .boxed()
}

/// タスク分解が少なくとも1件のタスクを返すこと
pub fn task_planning<'a>(
    client: &'a AiClient,
    _config: &'a RunConfig,
) -> BoxFuture<'a, SmokeResult<CheckOutcome>> {
    async move {
        let request = TaskPlanningRequest {
            goal: "Prepare a weekly community digest for the fan server.".to_string(),
            available_tools: Some(vec![
                "llm.generate".to_string(),
                "rag.search".to_string(),
                "web.search".to_string(),
            ]),
            max_tasks: 5,
            ..Default::default()
        };
        let data = client.agent().task_planning(&request).await?;

        if data.total_tasks == 0 || data.tasks.is_empty() {
            return Err(SmokeError::assertion("task plan is empty"));
        }

        Ok(CheckOutcome::passed(format!("{} tasks", data.total_tasks)))
    }
    .boxed()
}

/// Webサーチ（Webサーチ設定が無ければスキップ）
pub fn web_search<'a>(
    client: &'a AiClient,
    config: &'a RunConfig,
) -> BoxFuture<'a, SmokeResult<CheckOutcome>> {
    async move {
        if !config.web_search.is_configured() {
            return Ok(CheckOutcome::skipped(
                "WEB_SEARCH_ENABLED / WEB_SEARCH_API_KEY not configured",
            ));
        }

        let request = WebSearchRequest {
            query: "latest space telescope discoveries".to_string(),
            num_results: 3,
            ..Default::default()
        };
        let data = client.agent().web_search(&request).await?;

        if data.results.is_empty() {
            return Err(SmokeError::assertion("web search returned no results"));
        }

        Ok(CheckOutcome::passed(format!(
            "{} results, summary: {}",
            data.total_results,
            excerpt(data.summary.as_deref().unwrap_or(""), 60)
        )))
    }
    .boxed()
}
