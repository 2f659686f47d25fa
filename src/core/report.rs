use crate::core::results::ResultLog;
use crate::domain::model::{RunSummary, TestResult};
use crate::domain::ports::Storage;
use crate::utils::error::{Result, SmokeError};
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Csv,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = SmokeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            other => Err(SmokeError::InvalidConfigValueError {
                field: "report.formats".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: json, csv".to_string(),
            }),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: RunSummary,
    results: &'a [TestResult],
}

pub fn render_json(log: &ResultLog) -> Result<Vec<u8>> {
    let report = JsonReport {
        summary: log.summary(),
        results: log.results(),
    };
    Ok(serde_json::to_vec_pretty(&report)?)
}

pub fn render_csv(results: &[TestResult]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for result in results {
        writer.serialize(result)?;
    }
    writer
        .into_inner()
        .map_err(|e| SmokeError::IoError(e.into_error()))
}

/// 把結果寫到 Storage，回傳寫入的檔名
pub struct ReportWriter<S: Storage> {
    storage: S,
}

impl<S: Storage> ReportWriter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn file_name(run_id: &str, format: ReportFormat) -> String {
        format!("smoke-report-{}.{}", run_id, format.extension())
    }

    pub async fn write(&self, log: &ResultLog, formats: &[ReportFormat]) -> Result<Vec<String>> {
        let mut written = Vec::with_capacity(formats.len());
        for format in formats {
            let data = match format {
                ReportFormat::Json => render_json(log)?,
                ReportFormat::Csv => render_csv(log.results())?,
            };
            let name = Self::file_name(log.run_id(), *format);
            tracing::debug!("Writing {} report ({} bytes)", name, data.len());
            self.storage.write_file(&name, &data).await?;
            written.push(name);
        }
        Ok(written)
    }
}
