//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with fallback
//! to deprecated variable names with warning logs, plus the resolved
//! configuration for a smoke run.

use std::time::Duration;

use crate::error::{SmokeError, SmokeResult};

/// デフォルトのサービスベースURL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// デフォルトのHTTPタイムアウト（秒）
///
/// 生成系エンドポイントはモデル推論を伴うため長めに取る。
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Get an environment variable with fallback to a deprecated name
///
/// If the new variable name is set, returns its value.
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
pub fn env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable, parsing to a specific type
///
/// Returns the default if the variable is unset or fails to parse.
pub fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Webサーチ連携チェックの設定
///
/// `WEB_SEARCH_ENABLED` と `WEB_SEARCH_API_KEY` はサービス側と共有の変数名の
/// ため、`AISMOKE_` プレフィックスを付けずそのまま読む。
#[derive(Debug, Clone, Default)]
pub struct WebSearchConfig {
    /// `WEB_SEARCH_ENABLED` が `"true"` のとき有効
    pub enabled: bool,
    /// `WEB_SEARCH_API_KEY` の値（空文字は未設定扱い）
    pub api_key: String,
}

impl WebSearchConfig {
    /// Load the web search configuration from environment variables.
    pub fn from_env() -> Self {
        let enabled = std::env::var("WEB_SEARCH_ENABLED")
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let api_key = std::env::var("WEB_SEARCH_API_KEY").unwrap_or_default();
        Self { enabled, api_key }
    }

    /// 有効フラグとAPIキーの両方が揃っているか
    pub fn is_configured(&self) -> bool {
        self.enabled && !self.api_key.trim().is_empty()
    }
}

/// スモークラン全体の設定
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// 対象サービスのベースURL
    pub base_url: String,
    /// HTTPクライアントのタイムアウト
    pub timeout: Duration,
    /// ペイロード抜粋と完全なエラーチェーンを表示するか
    pub verbose: bool,
    /// チェック名の部分一致フィルタ（ヘルスチェックは常に実行）
    pub only: Option<String>,
    /// Webサーチ連携チェックの設定
    pub web_search: WebSearchConfig,
}

impl RunConfig {
    /// Build the run configuration from environment variables.
    ///
    /// `base_url` は `AISMOKE_BASE_URL`（旧: `AI_SERVICE_URL`）から取得し、
    /// 未設定の場合は [`DEFAULT_BASE_URL`] を使用する。
    pub fn from_env() -> SmokeResult<Self> {
        let base_url = env_with_fallback("AISMOKE_BASE_URL", "AI_SERVICE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs: u64 = env_parse("AISMOKE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);

        Self::validate_base_url(&base_url)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
            verbose: false,
            only: None,
            web_search: WebSearchConfig::from_env(),
        })
    }

    /// ベースURLを上書きする（`--base-url` フラグ用）
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> SmokeResult<Self> {
        let base_url = base_url.into();
        Self::validate_base_url(&base_url)?;
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    fn validate_base_url(base_url: &str) -> SmokeResult<()> {
        if base_url.starts_with("http://") || base_url.starts_with("https://") {
            Ok(())
        } else {
            Err(SmokeError::Config(format!(
                "base URL must start with http:// or https://: {}",
                base_url
            )))
        }
    }
}
