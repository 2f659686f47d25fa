use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmokeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown suite '{name}' (known suites: {known})")]
    UnknownSuiteError { name: String, known: String },

    #[error("Probe task failed: {message}")]
    TaskError { message: String },
}

/// 錯誤分類，供 CLI 決定提示訊息與退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    System,
}

impl SmokeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SmokeError::HttpError(_) | SmokeError::TaskError { .. } => ErrorCategory::Network,
            SmokeError::UrlError(_)
            | SmokeError::ConfigError { .. }
            | SmokeError::ConfigValidationError { .. }
            | SmokeError::InvalidConfigValueError { .. }
            | SmokeError::UnknownSuiteError { .. } => ErrorCategory::Configuration,
            SmokeError::CsvError(_) | SmokeError::SerializationError(_) => ErrorCategory::Data,
            SmokeError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check that the base URL is reachable and the preview deployment is up"
            }
            ErrorCategory::Configuration => {
                "Review the CLI flags and the TOML config file (run with --list to see suites)"
            }
            ErrorCategory::Data => "The response or report data could not be encoded; rerun with --verbose",
            ErrorCategory::System => "Check file permissions for the report directory",
        }
    }

    /// 單行錯誤描述，用於 FAIL 結果的 details
    pub fn short_message(&self) -> String {
        match self {
            // reqwest 的 Display 不包含底層原因，補上 timeout/connect 標記
            SmokeError::HttpError(e) if e.is_timeout() => format!("request timed out: {}", e),
            SmokeError::HttpError(e) if e.is_connect() => format!("connection failed: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SmokeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let err = SmokeError::UnknownSuiteError {
            name: "nope".to_string(),
            known: "bookings, payments".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.to_string().contains("bookings, payments"));

        let err = SmokeError::IoError(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert_eq!(err.category(), ErrorCategory::System);
        assert!(err.recovery_suggestion().contains("report directory"));
    }

    #[test]
    fn test_short_message_falls_back_to_display() {
        let err = SmokeError::TaskError {
            message: "join failed".to_string(),
        };
        assert_eq!(err.short_message(), "Probe task failed: join failed");
    }
}
