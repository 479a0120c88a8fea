//! 検索拡張生成チェック
//!
//! insert と search は対になっている。insert したばかりの文書が
//! 検索でヒットすることを確認するため、ラン単位のマーカーを
//! ソース識別子に埋め込む。

use futures::future::{BoxFuture, FutureExt};
use once_cell::sync::Lazy;
use uuid::Uuid;

use super::{excerpt, CheckOutcome};
use crate::client::rag::{InsertRequest, SearchRequest};
use crate::client::AiClient;
use crate::config::RunConfig;
use crate::error::{SmokeError, SmokeResult};

/// ラン単位の一意マーカー（insert/search の突き合わせ用）
static RUN_MARKER: Lazy<String> = Lazy::new(|| Uuid::new_v4().simple().to_string());

fn smoke_source() -> String {
    format!("smoke-test-{}", &*RUN_MARKER)
}

/// 文書登録がdoc_idを返すこと
pub fn insert<'a>(
    client: &'a AiClient,
    _config: &'a RunConfig,
) -> BoxFuture<'a, SmokeResult<CheckOutcome>> {
    async move {
        let request = InsertRequest {
            text: "Elio is a curious young boy who becomes the Earth's representative \
                   to the Communiverse, a galactic council of alien civilizations."
                .to_string(),
            source: smoke_source(),
            guild_id: Some("smoke-test".to_string()),
            metadata: Some(serde_json::json!({ "type": "character_info" })),
            url: None,
        };
        let data = client.rag().insert(&request).await?;

        if data.doc_id.trim().is_empty() {
            return Err(SmokeError::assertion("insert returned empty doc_id"));
        }

        Ok(CheckOutcome::passed(format!("doc_id={}", data.doc_id)))
    }
    .boxed()
}

/// 検索が少なくとも1件ヒットすること
pub fn search<'a>(
    client: &'a AiClient,
    _config: &'a RunConfig,
) -> BoxFuture<'a, SmokeResult<CheckOutcome>> {
    async move {
        let request = SearchRequest {
            query: "Who is Elio?".to_string(),
            guild_id: Some("smoke-test".to_string()),
            top_k: 5,
            ..Default::default()
        };
        let data = client.rag().search(&request).await?;

        if data.total_hits == 0 {
            return Err(SmokeError::assertion("No results found"));
        }

        let top = data
            .hits
            .first()
            .map(|hit| excerpt(&hit.chunk, 60))
            .unwrap_or_default();

        Ok(CheckOutcome::passed(format!(
            "{} hits, top: {}",
            data.total_hits, top
        )))
    }
    .boxed()
}
