//! コンソールレポート出力
//!
//! ユーザー向けのチェック結果はstdoutへ、診断ログはtracing経由で
//! stderrへ出す。機械可読フォーマットは提供しない。

use super::{CheckResult, CheckStatus, RunSummary};
use crate::config::RunConfig;

const SEPARATOR_WIDTH: usize = 60;

fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// ランのヘッダーを表示する
pub(crate) fn print_header(config: &RunConfig) {
    println!("{}", separator());
    println!("🚀 Communiverse AI service smoke test");
    println!(
        "   target: {}  started: {}",
        config.base_url,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!("{}", separator());
}

/// 1チェックの結果行を表示する
pub(crate) fn print_check_result(result: &CheckResult, verbose: bool) {
    let millis = result.duration.as_millis();
    match result.status {
        CheckStatus::Passed => {
            println!("✅ {} ({}ms)", result.name, millis);
            if verbose {
                if let Some(detail) = &result.detail {
                    println!("   {}", detail);
                }
            }
        }
        CheckStatus::Failed => {
            println!(
                "❌ {}: {} ({}ms)",
                result.name,
                result.error.as_deref().unwrap_or("unknown error"),
                millis
            );
            if verbose {
                if let Some(detail) = &result.detail {
                    println!("   {}", detail);
                }
            }
        }
        CheckStatus::Skipped => {
            println!(
                "⏭️  {}: {}",
                result.name,
                result.detail.as_deref().unwrap_or("skipped")
            );
        }
    }
}

/// ヘルスチェック失敗時のガイダンスを表示する
pub(crate) fn print_abort_guidance(config: &RunConfig) {
    println!();
    println!("The AI service did not answer the health check at {}.", config.base_url);
    println!("Make sure the service is running, or point the runner elsewhere with");
    println!("--base-url / AISMOKE_BASE_URL. No further checks were executed.");
}

/// ランのサマリーを表示する
pub(crate) fn print_summary(summary: &RunSummary) {
    println!("{}", separator());
    println!(
        "📊 {} executed: {} passed, {} failed, {} skipped",
        summary.executed, summary.passed, summary.failed, summary.skipped
    );
    println!(
        "⏱  total {}ms, average {}ms",
        summary.total_duration.as_millis(),
        summary.average_duration().as_millis()
    );

    if !summary.failures.is_empty() {
        println!();
        for (name, message) in &summary.failures {
            println!("❌ {}: {}", name, message);
        }
    }

    println!("{}", separator());
    if summary.failed == 0 {
        println!("🎉 All executed checks passed!");
    } else {
        println!("❌ {} check(s) failed", summary.failed);
    }
}
