//! ロギング初期化ユーティリティ
//!
//! 診断ログは `tracing` 経由でstderrに出力し、ユーザー向けのチェック結果
//! 出力（stdout）とは分離する。フィルタは `AISMOKE_LOG`（なければ
//! `RUST_LOG`、どちらも未設定なら `warn`）。

use tracing_subscriber::EnvFilter;

/// ロギングを初期化する
pub fn init() -> anyhow::Result<()> {
    let filter = std::env::var("AISMOKE_LOG")
        .map(EnvFilter::new)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set global tracing subscriber: {}", e))
}
