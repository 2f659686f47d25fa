use crate::config::toml_config::SmokeConfig;
use crate::core::report::ReportFormat;
use crate::suites::custom::CaseDefinition;
use crate::suites::SuiteOptions;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, validate_url, Validate};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_TOKEN: &str = "mock-bearer-token";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// 命令列覆寫值；`None` 代表沿用設定檔或預設值
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub suites: Vec<String>,
    pub skip: Vec<String>,
    pub concurrency: Option<usize>,
    pub report_dir: Option<String>,
    pub report_formats: Vec<String>,
}

/// 合併 CLI 與設定檔後的最終設定
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub token: String,
    pub timeout: Duration,
    pub suites: Vec<String>,
    pub skip: Vec<String>,
    pub concurrency: usize,
    pub report_dir: Option<String>,
    pub report_formats: Vec<ReportFormat>,
    pub cases: Vec<CaseDefinition>,
}

impl Settings {
    pub fn resolve(overrides: Overrides, file: Option<SmokeConfig>) -> Result<Self> {
        let file = file.unwrap_or_default();

        let report_dir = overrides
            .report_dir
            .or_else(|| file.report.as_ref().map(|r| r.output_path.clone()));

        let format_names = if !overrides.report_formats.is_empty() {
            overrides.report_formats
        } else {
            file.report
                .as_ref()
                .and_then(|r| r.formats.clone())
                .unwrap_or_else(|| vec!["json".to_string()])
        };
        let report_formats = format_names
            .iter()
            .map(|f| f.parse::<ReportFormat>())
            .collect::<Result<Vec<_>>>()?;

        let pick_list = |cli: Vec<String>, from_file: Option<Vec<String>>| {
            if cli.is_empty() {
                from_file.unwrap_or_default()
            } else {
                cli
            }
        };

        Ok(Self {
            base_url: overrides
                .base_url
                .or(file.target.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            token: overrides
                .token
                .or(file.target.token)
                .unwrap_or_else(|| DEFAULT_TOKEN.to_string()),
            timeout: Duration::from_secs(
                overrides
                    .timeout_seconds
                    .or(file.target.timeout_seconds)
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            suites: pick_list(overrides.suites, file.run.suites),
            skip: pick_list(overrides.skip, file.run.skip),
            concurrency: overrides
                .concurrency
                .or(file.run.concurrency)
                .unwrap_or(SuiteOptions::default().concurrency),
            report_dir,
            report_formats,
            cases: file.cases,
        })
    }

    pub fn suite_options(&self) -> SuiteOptions {
        SuiteOptions {
            concurrency: self.concurrency,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("token", &self.token)?;
        validate_positive_number("timeout_seconds", self.timeout.as_secs() as usize, 1)?;
        validate_positive_number("concurrency", self.concurrency, 1)?;
        for (index, case) in self.cases.iter().enumerate() {
            case.validate(index)?;
        }
        Ok(())
    }
}
