//! AI service smoke tester
//!
//! Communiverse AIサービスの各ケイパビリティエンドポイントを直列に
//! 叩いて疎通確認するインテグレーションスモークテストランナー
#![warn(missing_docs)]

/// スモークチェック定義（ケイパビリティごとのチェック関数とレジストリ）
pub mod checks;

/// CLIインターフェース
pub mod cli;

/// AIサービスクライアント（reqwestベースのファサード）
pub mod client;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// エラー型定義
pub mod error;

/// ロギング初期化ユーティリティ
pub mod logging;

/// チェック実行ドライバーとレポート出力
pub mod runner;
