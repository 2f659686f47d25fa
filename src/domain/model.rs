use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// 支援的 HTTP 方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 請求的授權方式
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// 使用設定中的 mock bearer token
    #[default]
    Bearer,
    /// 不帶 Authorization header
    None,
    /// 使用指定的 token（例如格式錯誤的 token）
    Token(String),
}

/// multipart 上傳的檔案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub field_name: String,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    #[default]
    None,
    Json(serde_json::Value),
    Multipart(UploadFile),
}

/// 回應 JSON 的欄位檢查，pointer 採用 RFC 6901 語法
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "check")]
pub enum JsonCheck {
    HasKey { pointer: String },
    Equals { pointer: String, value: serde_json::Value },
    IsArray { pointer: String },
    NonEmpty { pointer: String },
    OneOf { pointer: String, values: Vec<serde_json::Value> },
    /// 任一子檢查通過即可
    Any { checks: Vec<JsonCheck> },
}

impl JsonCheck {
    pub fn has_key(pointer: &str) -> Self {
        JsonCheck::HasKey {
            pointer: pointer.to_string(),
        }
    }

    pub fn equals(pointer: &str, value: serde_json::Value) -> Self {
        JsonCheck::Equals {
            pointer: pointer.to_string(),
            value,
        }
    }

    pub fn is_array(pointer: &str) -> Self {
        JsonCheck::IsArray {
            pointer: pointer.to_string(),
        }
    }

    pub fn non_empty(pointer: &str) -> Self {
        JsonCheck::NonEmpty {
            pointer: pointer.to_string(),
        }
    }

    pub fn one_of(pointer: &str, values: Vec<serde_json::Value>) -> Self {
        JsonCheck::OneOf {
            pointer: pointer.to_string(),
            values,
        }
    }

    pub fn any(checks: Vec<JsonCheck>) -> Self {
        JsonCheck::Any { checks }
    }
}

/// 單一 smoke 測試案例：一個請求加上預期的狀態碼與欄位檢查
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeCase {
    pub name: String,
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub auth: AuthMode,
    pub body: RequestBody,
    pub expect: Vec<u16>,
    pub checks: Vec<JsonCheck>,
}

impl ProbeCase {
    pub fn new(name: &str, method: HttpMethod, path: &str) -> Self {
        Self {
            name: name.to_string(),
            method,
            path: path.to_string(),
            query: Vec::new(),
            auth: AuthMode::Bearer,
            body: RequestBody::None,
            expect: vec![200],
            checks: Vec::new(),
        }
    }

    pub fn get(name: &str, path: &str) -> Self {
        Self::new(name, HttpMethod::Get, path)
    }

    pub fn post(name: &str, path: &str) -> Self {
        Self::new(name, HttpMethod::Post, path)
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_auth(mut self, auth: AuthMode) -> Self {
        self.auth = auth;
        self
    }

    pub fn without_auth(self) -> Self {
        self.with_auth(AuthMode::None)
    }

    pub fn with_json(mut self, body: serde_json::Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn with_upload(mut self, file: UploadFile) -> Self {
        self.body = RequestBody::Multipart(file);
        self
    }

    pub fn expect(mut self, codes: &[u16]) -> Self {
        self.expect = codes.to_vec();
        self
    }

    pub fn check(mut self, check: JsonCheck) -> Self {
        self.checks.push(check);
        self
    }

    pub fn accepts(&self, status: u16) -> bool {
        self.expect.contains(&status)
    }
}

/// 實際收到的 HTTP 回應
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub status: u16,
    pub elapsed: Duration,
    pub body: String,
    pub json: Option<serde_json::Value>,
}

impl ProbeResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 截斷後的 body，用於失敗訊息
    pub fn body_excerpt(&self, max_chars: usize) -> String {
        let trimmed = self.body.trim();
        if trimmed.chars().count() <= max_chars {
            trimmed.to_string()
        } else {
            let cut: String = trimmed.chars().take(max_chars).collect();
            format!("{}…", cut)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    pub suite: String,
    pub case: String,
    pub passed: bool,
    pub details: String,
    pub status: Option<u16>,
    pub elapsed_ms: u64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuiteTally {
    pub passed: usize,
    pub failed: usize,
}

impl SuiteTally {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub success_rate: f64,
    pub per_suite: BTreeMap<String, SuiteTally>,
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_case_builder() {
        let case = ProbeCase::post("create booking", "/server-api/bookings")
            .with_json(serde_json::json!({"classId": "c-1"}))
            .expect(&[200, 201, 401])
            .check(JsonCheck::has_key("/id"));

        assert_eq!(case.method, HttpMethod::Post);
        assert_eq!(case.auth, AuthMode::Bearer);
        assert!(case.accepts(201));
        assert!(!case.accepts(500));
        assert_eq!(case.checks.len(), 1);
    }

    #[test]
    fn test_body_excerpt_truncates() {
        let response = ProbeResponse {
            status: 500,
            elapsed: Duration::from_millis(5),
            body: "x".repeat(300),
            json: None,
        };
        let excerpt = response.body_excerpt(200);
        assert_eq!(excerpt.chars().count(), 201);
        assert!(excerpt.ends_with('…'));
        assert!(!response.is_success());
    }

    #[test]
    fn test_json_check_deserializes_from_tagged_form() {
        let check: JsonCheck =
            serde_json::from_value(serde_json::json!({"check": "is_array", "pointer": "/items"}))
                .unwrap();
        assert_eq!(check, JsonCheck::is_array("/items"));
    }
}
