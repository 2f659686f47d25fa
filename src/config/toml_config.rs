use crate::suites::custom::CaseDefinition;
use crate::utils::error::{Result, SmokeError};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML 設定檔
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SmokeConfig {
    #[serde(default)]
    pub target: TargetConfig,
    #[serde(default)]
    pub run: RunConfig,
    pub report: Option<ReportConfig>,
    #[serde(default)]
    pub cases: Vec<CaseDefinition>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetConfig {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    pub suites: Option<Vec<String>>,
    pub skip: Option<Vec<String>>,
    pub concurrency: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub output_path: String,
    pub formats: Option<Vec<String>>,
}

impl SmokeConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SmokeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SmokeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// 替換 `${VAR}`；未設定的變數保留原樣
pub fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| SmokeError::ConfigError {
        message: format!("invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.into_owned())
}

impl Validate for SmokeConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.target.base_url {
            validate_url("target.base_url", base_url)?;
        }
        if let Some(timeout) = self.target.timeout_seconds {
            validate_positive_number("target.timeout_seconds", timeout as usize, 1)?;
        }
        if let Some(concurrency) = self.run.concurrency {
            validate_positive_number("run.concurrency", concurrency, 1)?;
        }
        for (index, case) in self.cases.iter().enumerate() {
            case.validate(index)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{HttpMethod, JsonCheck};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[target]
base_url = "https://preview.studio.example.com"
token = "mock-bearer-token"
timeout_seconds = 20

[run]
suites = ["bookings", "payments"]
concurrency = 5

[report]
output_path = "./smoke-reports"
formats = ["json", "csv"]

[[cases]]
name = "health"
path = "/server-api/health"
expect = [200]
checks = [{ check = "equals", pointer = "/status", value = "ok" }]

[[cases]]
name = "create waitlist entry"
method = "POST"
path = "/server-api/waitlist"
auth = false
expect = [401, 403]
json = { classId = "c-1", position = 3 }
"#;

        let config = SmokeConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.target.timeout_seconds, Some(20));
        assert_eq!(config.run.concurrency, Some(5));
        assert_eq!(config.report.as_ref().unwrap().output_path, "./smoke-reports");
        assert_eq!(config.cases.len(), 2);
        assert_eq!(config.cases[0].method, HttpMethod::Get);
        assert_eq!(
            config.cases[0].checks,
            vec![JsonCheck::equals("/status", serde_json::json!("ok"))]
        );
        assert_eq!(config.cases[1].json.as_ref().unwrap()["position"], 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("STUDIO_SMOKE_TEST_TOKEN", "from-env");

        let config = SmokeConfig::from_toml_str(
            r#"
[target]
token = "${STUDIO_SMOKE_TEST_TOKEN}"
base_url = "${STUDIO_SMOKE_TEST_UNSET_VAR}"
"#,
        )
        .unwrap();

        assert_eq!(config.target.token.as_deref(), Some("from-env"));
        assert_eq!(
            config.target.base_url.as_deref(),
            Some("${STUDIO_SMOKE_TEST_UNSET_VAR}")
        );
        // 未替換的 placeholder 不是合法 URL
        assert!(config.validate().is_err());

        std::env::remove_var("STUDIO_SMOKE_TEST_TOKEN");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let config = SmokeConfig::from_toml_str("[run]\nconcurrency = 0\n").unwrap();
        assert!(config.validate().is_err());

        assert!(SmokeConfig::from_toml_str("[target\nbase_url = 1").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[target]\nbase_url = \"http://localhost:4000\"\n")
            .unwrap();

        let config = SmokeConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.target.base_url.as_deref(), Some("http://localhost:4000"));
        assert!(config.cases.is_empty());
    }
}
