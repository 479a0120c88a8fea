//! エージェント推論API（`/agent/*`）

use serde::{Deserialize, Serialize};

use super::AiClient;
use crate::error::SmokeResult;

/// `POST /agent/reasoning` のリクエスト
#[derive(Debug, Clone, Serialize)]
pub struct ReasoningRequest {
    /// 推論対象の問題
    pub problem: String,
    /// 追加コンテキスト
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// 推論タイプ（`chain-of-thought` / `tree-of-thought` / `step-by-step`）
    pub reasoning_type: String,
    /// 最大ステップ数
    pub max_steps: u32,
}

impl Default for ReasoningRequest {
    fn default() -> Self {
        Self {
            problem: String::new(),
            context: None,
            reasoning_type: "chain-of-thought".to_string(),
            max_steps: 5,
        }
    }
}

/// `POST /agent/reasoning` のレスポンスペイロード
#[derive(Debug, Clone, Deserialize)]
pub struct ReasoningData {
    /// 問題（エコーバック）
    #[serde(default)]
    pub problem: String,
    /// 推論タイプ（エコーバック）
    #[serde(default)]
    pub reasoning_type: String,
    /// パースされた推論ステップ
    #[serde(default)]
    pub steps: Vec<serde_json::Value>,
    /// 抽出された結論
    #[serde(default)]
    pub conclusion: Option<String>,
    /// 推論の全文
    pub full_reasoning: String,
}

/// `POST /agent/task-planning` のリクエスト
#[derive(Debug, Clone, Serialize)]
pub struct TaskPlanningRequest {
    /// 達成したいゴール
    pub goal: String,
    /// 制約条件
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<String>>,
    /// 使用可能なツール
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_tools: Option<Vec<String>>,
    /// タスク数上限
    pub max_tasks: u32,
}

impl Default for TaskPlanningRequest {
    fn default() -> Self {
        Self {
            goal: String::new(),
            constraints: None,
            available_tools: None,
            max_tasks: 10,
        }
    }
}

/// `POST /agent/task-planning` のレスポンスペイロード
#[derive(Debug, Clone, Deserialize)]
pub struct TaskPlanningData {
    /// ゴール（エコーバック）
    #[serde(default)]
    pub goal: String,
    /// 計画されたタスク一覧
    #[serde(default)]
    pub tasks: Vec<serde_json::Value>,
    /// タスク総数
    pub total_tasks: u32,
    /// 見積もり所要時間の合計（秒）
    #[serde(default)]
    pub estimated_total_duration: u64,
}

/// `POST /agent/web-search` のリクエスト
#[derive(Debug, Clone, Serialize)]
pub struct WebSearchRequest {
    /// 検索クエリ
    pub query: String,
    /// 取得件数
    pub num_results: u32,
    /// 新しさフィルタ（日数）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recency_days: Option<u32>,
    /// ドメイン制限
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,
    /// 結果を要約するか
    pub summarize: bool,
}

impl Default for WebSearchRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            num_results: 5,
            recency_days: None,
            domains: None,
            summarize: true,
        }
    }
}

/// `POST /agent/web-search` のレスポンスペイロード
#[derive(Debug, Clone, Deserialize)]
pub struct WebSearchData {
    /// クエリ（エコーバック）
    #[serde(default)]
    pub query: String,
    /// 検索結果一覧
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
    /// 結果総数
    pub total_results: u32,
    /// LLMによる要約
    #[serde(default)]
    pub summary: Option<String>,
    /// 要約が付いているか
    #[serde(default)]
    pub has_summary: bool,
}

/// エージェント推論APIの名前空間アクセサ
#[derive(Debug, Clone, Copy)]
pub struct AgentApi<'a> {
    pub(crate) client: &'a AiClient,
}

impl AgentApi<'_> {
    /// `POST /agent/reasoning` — 構造化推論の実行
    pub async fn reasoning(&self, request: &ReasoningRequest) -> SmokeResult<ReasoningData> {
        self.client.post_json("/agent/reasoning", request).await
    }

    /// `POST /agent/task-planning` — ゴールのタスク分解
    pub async fn task_planning(
        &self,
        request: &TaskPlanningRequest,
    ) -> SmokeResult<TaskPlanningData> {
        self.client.post_json("/agent/task-planning", request).await
    }

    /// `POST /agent/web-search` — Webサーチ（任意で要約）
    pub async fn web_search(&self, request: &WebSearchRequest) -> SmokeResult<WebSearchData> {
        self.client.post_json("/agent/web-search", request).await
    }
}
