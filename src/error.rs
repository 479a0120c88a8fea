//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! チェック本体のアサーション失敗（`Assertion`）と、サービス/トランスポート起因の
//! 失敗（`Api` / `Http`）を変種レベルで区別する。

use thiserror::Error;

/// Smoke runner error type
#[derive(Debug, Error)]
pub enum SmokeError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP transport error (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(String),

    /// The service answered with an error envelope
    #[error("Service error ({}): {message}", .code.as_deref().unwrap_or("unknown"))]
    Api {
        /// Service error code (e.g. `AI_MODEL_ERROR`), if present in the body
        code: Option<String>,
        /// Human-readable message from the error envelope
        message: String,
    },

    /// The response decoded but an expected field was missing, empty or falsy
    #[error("{0}")]
    Assertion(String),
}

impl SmokeError {
    /// アサーション失敗を生成するショートハンド
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::Assertion(message.into())
    }
}

/// Result type alias for the smoke runner
pub type SmokeResult<T> = Result<T, SmokeError>;
