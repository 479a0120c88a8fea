//! テスト共通ユーティリティ

pub mod service;

use std::time::Duration;

use aismoke::config::{RunConfig, WebSearchConfig};

/// モックサービス向けのRunConfigを作る
///
/// 環境変数には依存せず、Webサーチチェックはデフォルトで未設定
/// （= スキップされる）状態にする。
#[allow(dead_code)]
pub fn test_config(base_url: &str) -> RunConfig {
    RunConfig {
        base_url: base_url.trim_end_matches('/').to_string(),
        timeout: Duration::from_secs(5),
        verbose: false,
        only: None,
        web_search: WebSearchConfig::default(),
    }
}

/// Webサーチチェックが実行される設定を作る
#[allow(dead_code)]
pub fn test_config_with_web_search(base_url: &str) -> RunConfig {
    let mut config = test_config(base_url);
    config.web_search = WebSearchConfig {
        enabled: true,
        api_key: "test-brave-key".to_string(),
    };
    config
}
