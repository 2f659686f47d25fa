use crate::core::assertions::check_response;
use crate::core::results::{result_from_error, result_from_verdict, ResultLog};
use crate::domain::model::ProbeCase;
use crate::domain::ports::{Recorder, Suite, Transport};
use crate::utils::error::{Result, SmokeError};
use async_trait::async_trait;
use std::sync::Arc;

/// 送出單一案例並記錄結果；不論成功與否都不會回傳錯誤
pub async fn run_case(
    suite: &str,
    case: &ProbeCase,
    transport: &dyn Transport,
    recorder: &mut dyn Recorder,
) {
    match transport.send(case).await {
        Ok(response) => {
            let verdict = check_response(case, &response);
            recorder.record(result_from_verdict(suite, &case.name, &response, verdict));
        }
        Err(e) => {
            tracing::debug!("Request for '{}' failed: {}", case.name, e);
            recorder.record(result_from_error(suite, &case.name, &e));
        }
    }
}

/// 依序執行固定案例清單的 suite
#[derive(Debug, Clone)]
pub struct CaseSuite {
    name: String,
    description: String,
    cases: Vec<ProbeCase>,
}

impl CaseSuite {
    pub fn new(name: &str, description: &str, cases: Vec<ProbeCase>) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            cases,
        }
    }

    pub fn cases(&self) -> &[ProbeCase] {
        &self.cases
    }
}

#[async_trait]
impl Suite for CaseSuite {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    async fn execute(
        &self,
        transport: Arc<dyn Transport>,
        recorder: &mut dyn Recorder,
    ) -> Result<()> {
        for case in &self.cases {
            run_case(&self.name, case, transport.as_ref(), recorder).await;
        }
        Ok(())
    }
}

pub struct SmokeRunner {
    transport: Arc<dyn Transport>,
    suites: Vec<Box<dyn Suite>>,
}

impl SmokeRunner {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            suites: Vec::new(),
        }
    }

    pub fn with_suites(mut self, suites: Vec<Box<dyn Suite>>) -> Self {
        self.suites.extend(suites);
        self
    }

    pub fn add_suite(&mut self, suite: Box<dyn Suite>) {
        self.suites.push(suite);
    }

    pub fn suite_names(&self) -> Vec<&str> {
        self.suites.iter().map(|s| s.name()).collect()
    }

    pub fn suites(&self) -> &[Box<dyn Suite>] {
        &self.suites
    }

    fn ensure_known(&self, names: &[String]) -> Result<()> {
        for name in names {
            if !self.suites.iter().any(|s| s.name() == name) {
                return Err(SmokeError::UnknownSuiteError {
                    name: name.clone(),
                    known: self.suite_names().join(", "),
                });
            }
        }
        Ok(())
    }

    /// 只保留指定的 suite，順序維持註冊順序
    pub fn run_only(&mut self, names: &[String]) -> Result<()> {
        if names.is_empty() {
            return Ok(());
        }
        self.ensure_known(names)?;
        self.suites.retain(|s| names.iter().any(|n| n == s.name()));
        Ok(())
    }

    pub fn skip(&mut self, names: &[String]) -> Result<()> {
        self.ensure_known(names)?;
        self.suites.retain(|s| !names.iter().any(|n| n == s.name()));
        Ok(())
    }

    /// 同時套用 --suite 與 --skip；兩份清單都以完整的註冊清單驗證
    pub fn select(&mut self, only: &[String], skip: &[String]) -> Result<()> {
        self.ensure_known(only)?;
        self.ensure_known(skip)?;
        self.run_only(only)?;
        self.suites.retain(|s| !skip.iter().any(|n| n == s.name()));
        Ok(())
    }

    pub async fn run_all(&self, log: &mut ResultLog) -> Result<()> {
        tracing::info!("🚀 Running {} suite(s) [{}]", self.suites.len(), log.run_id());

        for suite in &self.suites {
            tracing::info!("🧪 Suite '{}': {}", suite.name(), suite.description());
            let before = log.results().len();

            if let Err(e) = suite.execute(Arc::clone(&self.transport), &mut *log).await {
                tracing::error!("Suite '{}' aborted: {}", suite.name(), e);
                log.log_error(suite.name(), "suite setup", &e);
            }

            let executed = &log.results()[before..];
            let failed = executed.iter().filter(|r| !r.passed).count();
            tracing::info!(
                "📋 Suite '{}' finished: {} case(s), {} failed",
                suite.name(),
                executed.len(),
                failed
            );
        }

        Ok(())
    }
}
