use crate::core::runner::CaseSuite;
use crate::domain::model::{AuthMode, HttpMethod, JsonCheck, ProbeCase, RequestBody};
use crate::utils::error::Result;
use crate::utils::validation::{validate_api_path, validate_non_empty_string, validate_status_codes};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const CUSTOM_SUITE: &str = "custom";

/// 設定檔中 `[[cases]]` 的定義
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseDefinition {
    pub name: String,
    #[serde(default = "default_method")]
    pub method: HttpMethod,
    pub path: String,
    /// `true`（預設）使用 mock token，`false` 不帶 Authorization
    pub auth: Option<bool>,
    /// 覆寫 token，優先於 `auth`
    pub token: Option<String>,
    pub query: Option<BTreeMap<String, String>>,
    pub json: Option<serde_json::Value>,
    pub expect: Vec<u16>,
    #[serde(default)]
    pub checks: Vec<JsonCheck>,
}

fn default_method() -> HttpMethod {
    HttpMethod::Get
}

impl CaseDefinition {
    pub fn validate(&self, index: usize) -> Result<()> {
        validate_non_empty_string(&format!("cases[{}].name", index), &self.name)?;
        validate_api_path(&format!("cases[{}].path", index), &self.path)?;
        validate_status_codes(&format!("cases[{}].expect", index), &self.expect)?;
        Ok(())
    }

    pub fn to_probe_case(&self) -> ProbeCase {
        let auth = match (&self.token, self.auth) {
            (Some(token), _) => AuthMode::Token(token.clone()),
            (None, Some(false)) => AuthMode::None,
            (None, _) => AuthMode::Bearer,
        };

        ProbeCase {
            name: self.name.clone(),
            method: self.method,
            path: self.path.clone(),
            query: self
                .query
                .iter()
                .flatten()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            auth,
            body: self
                .json
                .clone()
                .map(RequestBody::Json)
                .unwrap_or_default(),
            expect: self.expect.clone(),
            checks: self.checks.clone(),
        }
    }
}

pub fn suite(definitions: &[CaseDefinition]) -> Result<CaseSuite> {
    let mut cases = Vec::with_capacity(definitions.len());
    for (index, definition) in definitions.iter().enumerate() {
        definition.validate(index)?;
        cases.push(definition.to_probe_case());
    }
    Ok(CaseSuite::new(
        CUSTOM_SUITE,
        "cases declared in the configuration file",
        cases,
    ))
}
