//! 把設定組裝成可執行的 runner，CLI 與整合測試共用。

use crate::config::cli::LocalStorage;
use crate::config::settings::Settings;
use crate::core::client::ApiClient;
use crate::core::report::ReportWriter;
use crate::core::results::ResultLog;
use crate::core::runner::SmokeRunner;
use crate::suites::{builtin_suites, custom};
use crate::utils::error::Result;
use std::sync::Arc;

/// 建立包含內建 suite 與自訂案例的 runner（尚未套用 --suite/--skip）
pub fn build_runner(settings: &Settings) -> Result<SmokeRunner> {
    let client = ApiClient::new(&settings.base_url, &settings.token, settings.timeout)?;
    let mut runner =
        SmokeRunner::new(Arc::new(client)).with_suites(builtin_suites(&settings.suite_options()));

    if !settings.cases.is_empty() {
        runner.add_suite(Box::new(custom::suite(&settings.cases)?));
    }
    Ok(runner)
}

pub fn default_run_id() -> String {
    format!("smoke_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
}

/// 執行選定的 suite，回傳累積的結果
pub async fn execute(settings: &Settings, log: &mut ResultLog) -> Result<()> {
    let mut runner = build_runner(settings)?;
    runner.select(&settings.suites, &settings.skip)?;

    tracing::info!("🎯 Target: {}", settings.base_url);
    runner.run_all(log).await
}

/// 依設定輸出報告；沒有設定輸出目錄時回傳空清單
pub async fn write_reports(settings: &Settings, log: &ResultLog) -> Result<Vec<String>> {
    let Some(dir) = settings.report_dir.as_deref() else {
        return Ok(Vec::new());
    };

    let storage = LocalStorage::new(dir);
    let writer = ReportWriter::new(storage.clone());
    let written = writer.write(log, &settings.report_formats).await?;

    Ok(written
        .into_iter()
        .map(|name| storage.base_path().join(name).display().to_string())
        .collect())
}
