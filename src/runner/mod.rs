//! チェック実行ドライバー
//!
//! ヘルスチェックを先頭に、レジストリのチェックを宣言順に直列実行する。
//! チェック間には固定100msのポーズを挟む（対象サービスへのレート
//! 制限的な配慮であり、正しさの要件ではない）。
//!
//! 結果はappend-onlyの列に蓄積し、ラン終了時にサマリーを導出する。
//! ヘルスチェックが失敗した場合は以降のチェックを実行せず、結果列は
//! 長さ1のまま中断する。

pub mod report;

use std::time::{Duration, Instant};

use futures::future::BoxFuture;
use tracing::{debug, warn};

use crate::checks::{self, Check, CheckOutcome};
use crate::client::AiClient;
use crate::config::RunConfig;
use crate::error::{SmokeError, SmokeResult};

/// チェック間の固定ポーズ
const INTER_CHECK_DELAY: Duration = Duration::from_millis(100);

/// ヘルスチェックの表示名
pub const HEALTH_CHECK_NAME: &str = "health";

/// 1チェックの最終ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// アサーションまで成功
    Passed,
    /// トランスポート/サービス/アサーションいずれかの失敗
    Failed,
    /// 必要な設定が無く未実行
    Skipped,
}

/// 1チェックの実行結果レコード
///
/// 作成後に変更されることはない。
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// チェック名
    pub name: String,
    /// 最終ステータス
    pub status: CheckStatus,
    /// 実測経過時間
    pub duration: Duration,
    /// 失敗メッセージ（Failedのみ）
    pub error: Option<String>,
    /// ペイロード抜粋またはスキップ理由
    pub detail: Option<String>,
}

impl CheckResult {
    /// 成功したか
    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Passed
    }
}

/// ラン全体のサマリー（ヘルスチェックを除く）
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// 実行されたチェック数（スキップを除く）
    pub executed: usize,
    /// 成功数
    pub passed: usize,
    /// 失敗数
    pub failed: usize,
    /// スキップ数
    pub skipped: usize,
    /// 実行チェックの合計時間
    pub total_duration: Duration,
    /// 失敗したチェックの（名前, メッセージ）一覧
    pub failures: Vec<(String, String)>,
}

impl RunSummary {
    /// 結果列からサマリーを導出する
    ///
    /// 渡すスライスにはヘルスチェックの結果を含めないこと。
    pub fn from_results(results: &[CheckResult]) -> Self {
        let mut summary = Self::default();

        for result in results {
            match result.status {
                CheckStatus::Passed => {
                    summary.executed += 1;
                    summary.passed += 1;
                    summary.total_duration += result.duration;
                }
                CheckStatus::Failed => {
                    summary.executed += 1;
                    summary.failed += 1;
                    summary.total_duration += result.duration;
                    summary.failures.push((
                        result.name.clone(),
                        result.error.clone().unwrap_or_default(),
                    ));
                }
                CheckStatus::Skipped => {
                    summary.skipped += 1;
                }
            }
        }

        summary
    }

    /// 実行チェック1件あたりの平均時間
    pub fn average_duration(&self) -> Duration {
        if self.executed == 0 {
            Duration::ZERO
        } else {
            self.total_duration / self.executed as u32
        }
    }
}

/// ラン全体の結果
#[derive(Debug)]
pub struct RunReport {
    /// 実行順の結果列（先頭は常にヘルスチェック）
    pub results: Vec<CheckResult>,
    /// サマリー（ヘルスチェック失敗による中断時はNone）
    pub summary: Option<RunSummary>,
    /// ヘルスチェック失敗で中断したか
    pub aborted: bool,
}

impl RunReport {
    /// プロセス終了コードを返す
    ///
    /// 中断または1件以上の失敗で1、それ以外は0。
    pub fn exit_code(&self) -> i32 {
        if self.aborted {
            return 1;
        }
        match &self.summary {
            Some(summary) if summary.failed == 0 => 0,
            _ => 1,
        }
    }
}

/// スモークランナー
pub struct SmokeRunner {
    client: AiClient,
    config: RunConfig,
}

impl SmokeRunner {
    /// 設定からランナーを作成する（HTTPクライアント込み）
    pub fn new(config: RunConfig) -> SmokeResult<Self> {
        let client = AiClient::new(&config.base_url, config.timeout)?;
        Ok(Self { client, config })
    }

    /// ラン全体を実行する
    ///
    /// コンソールへの進捗/サマリー出力もここで行う。プロセスの終了は
    /// 呼び出し側（`main`）の責務。
    pub async fn run(self) -> RunReport {
        report::print_header(&self.config);

        let mut results: Vec<CheckResult> = Vec::new();

        let health = self
            .run_check(
                HEALTH_CHECK_NAME,
                checks::health::probe(&self.client, &self.config),
            )
            .await;
        report::print_check_result(&health, self.config.verbose);

        let health_failed = health.status == CheckStatus::Failed;
        results.push(health);

        if health_failed {
            report::print_abort_guidance(&self.config);
            return RunReport {
                results,
                summary: None,
                aborted: true,
            };
        }

        for check in self.selected_checks() {
            tokio::time::sleep(INTER_CHECK_DELAY).await;

            let result = self
                .run_check(check.name, (check.run)(&self.client, &self.config))
                .await;
            report::print_check_result(&result, self.config.verbose);
            results.push(result);
        }

        let summary = RunSummary::from_results(&results[1..]);
        report::print_summary(&summary);

        RunReport {
            results,
            summary: Some(summary),
            aborted: false,
        }
    }

    /// `--only` フィルタを適用したチェック一覧
    fn selected_checks(&self) -> Vec<Check> {
        let checks = checks::registry();
        match &self.config.only {
            Some(pattern) => {
                let needle = pattern.to_ascii_lowercase();
                let selected: Vec<Check> = checks
                    .into_iter()
                    .filter(|c| c.name.to_ascii_lowercase().contains(&needle))
                    .collect();
                if selected.is_empty() {
                    warn!("no check matches --only pattern '{}'", pattern);
                }
                selected
            }
            None => checks,
        }
    }

    /// 1チェックを実行し、時間計測とエラー捕捉を行う
    async fn run_check(
        &self,
        name: &str,
        fut: BoxFuture<'_, SmokeResult<CheckOutcome>>,
    ) -> CheckResult {
        let start = Instant::now();
        let outcome = fut.await;
        let duration = start.elapsed();

        match outcome {
            Ok(CheckOutcome::Passed { detail }) => {
                debug!(check = name, duration_ms = duration.as_millis() as u64, "check passed");
                CheckResult {
                    name: name.to_string(),
                    status: CheckStatus::Passed,
                    duration,
                    error: None,
                    detail,
                }
            }
            Ok(CheckOutcome::Skipped { reason }) => {
                debug!(check = name, reason = %reason, "check skipped");
                CheckResult {
                    name: name.to_string(),
                    status: CheckStatus::Skipped,
                    duration,
                    error: None,
                    detail: Some(reason),
                }
            }
            Err(error) => {
                warn!(check = name, error = %error, "check failed");
                CheckResult {
                    name: name.to_string(),
                    status: CheckStatus::Failed,
                    duration,
                    error: Some(error.to_string()),
                    detail: verbose_error_detail(&error),
                }
            }
        }
    }
}

/// verbose表示用にエラーの詳細表現を返す
fn verbose_error_detail(error: &SmokeError) -> Option<String> {
    Some(format!("{:?}", error))
}
