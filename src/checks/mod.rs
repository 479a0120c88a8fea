//! スモークチェック定義
//!
//! 各ケイパビリティのチェック関数と、実行順を規定するレジストリ。
//! ヘルスチェックはレジストリに含めず、ランナーが常に最初に実行する。

pub mod agent;
pub mod embeddings;
pub mod finetune;
pub mod health;
pub mod llm;
pub mod moderation;
pub mod rag;
pub mod story;
pub mod vlm;

use futures::future::BoxFuture;

use crate::client::AiClient;
use crate::config::RunConfig;
use crate::error::SmokeResult;

/// チェックの成功系アウトカム
///
/// 失敗は `SmokeResult` の `Err` 側で表現する。スキップは独立した
/// アウトカムであり、パス扱いにはしない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// チェック成功（verbose表示用のペイロード抜粋つき）
    Passed {
        /// ペイロードの抜粋（verboseモードで表示）
        detail: Option<String>,
    },
    /// 必要な設定が無いため未実行
    Skipped {
        /// スキップ理由
        reason: String,
    },
}

impl CheckOutcome {
    /// 抜粋つきの成功アウトカムを作る
    pub fn passed(detail: impl Into<String>) -> Self {
        Self::Passed {
            detail: Some(detail.into()),
        }
    }

    /// スキップアウトカムを作る
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }
}

/// チェック関数のシグネチャ
pub type CheckFn =
    for<'a> fn(&'a AiClient, &'a RunConfig) -> BoxFuture<'a, SmokeResult<CheckOutcome>>;

/// 名前つきチェック
#[derive(Clone, Copy)]
pub struct Check {
    /// 表示名（`--only` フィルタの対象）
    pub name: &'static str,
    /// チェック本体
    pub run: CheckFn,
}

/// 実行順のチェックレジストリを返す
///
/// 宣言順がそのまま実行順になる。ヘルスチェックは含まない。
pub fn registry() -> Vec<Check> {
    vec![
        Check {
            name: "llm.generate",
            run: llm::generate,
        },
        Check {
            name: "llm.persona_reply",
            run: llm::persona_reply,
        },
        Check {
            name: "llm.summarize_news",
            run: llm::summarize_news,
        },
        Check {
            name: "vlm.describe",
            run: vlm::describe,
        },
        Check {
            name: "vlm.analyze",
            run: vlm::analyze,
        },
        Check {
            name: "rag.insert",
            run: rag::insert,
        },
        Check {
            name: "rag.search",
            run: rag::search,
        },
        Check {
            name: "embeddings.embed",
            run: embeddings::embed,
        },
        Check {
            name: "embeddings.model_info",
            run: embeddings::model_info,
        },
        Check {
            name: "story.generate",
            run: story::generate,
        },
        Check {
            name: "story.continue",
            run: story::continue_story,
        },
        Check {
            name: "story.dialogue",
            run: story::dialogue,
        },
        Check {
            name: "agent.reasoning",
            run: agent::reasoning,
        },
        Check {
            name: "agent.task_planning",
            run: agent::task_planning,
        },
        Check {
            name: "agent.web_search",
            run: agent::web_search,
        },
        Check {
            name: "finetune.list_jobs",
            run: finetune::list_jobs,
        },
        Check {
            name: "moderation.scan",
            run: moderation::scan,
        },
        Check {
            name: "moderation.batch_scan",
            run: moderation::batch_scan,
        },
    ]
}

/// ペイロード抜粋を作る（verbose表示用）
///
/// 改行を潰して `max` 文字に切り詰める。
pub(crate) fn excerpt(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        flat
    } else {
        let truncated: String = flat.chars().take(max).collect();
        format!("{}…", truncated)
    }
}
