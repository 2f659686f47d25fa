use super::{api, fixtures};
use crate::core::concurrency::probe_concurrently;
use crate::core::results::result_from_error;
use crate::domain::model::{ProbeCase, TestResult};
use crate::domain::ports::{Recorder, Suite, Transport};
use crate::utils::error::{Result, SmokeError};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;

pub const DEFAULT_CONCURRENCY: usize = 3;

/// 同時送出重複的訂課請求，觀察伺服器在輕度併發下是否回傳一致、非 5xx 的狀態碼
pub struct ConcurrencySuite {
    requests: usize,
    case: ProbeCase,
}

impl ConcurrencySuite {
    pub fn new(requests: usize) -> Self {
        let case = ProbeCase::post("concurrent duplicate bookings", &api("/bookings"))
            .with_json(fixtures::booking_payload())
            .expect(&[200, 201, 400, 401, 403, 409, 429]);
        Self { requests, case }
    }

    pub fn with_case(mut self, case: ProbeCase) -> Self {
        self.case = case;
        self
    }
}

#[async_trait]
impl Suite for ConcurrencySuite {
    fn name(&self) -> &str {
        "concurrency"
    }

    fn description(&self) -> &str {
        "simultaneous duplicate requests return consistent non-5xx codes"
    }

    async fn execute(
        &self,
        transport: Arc<dyn Transport>,
        recorder: &mut dyn Recorder,
    ) -> Result<()> {
        if self.requests == 0 {
            let err = SmokeError::InvalidConfigValueError {
                field: "concurrency".to_string(),
                value: "0".to_string(),
                reason: "Value must be at least 1".to_string(),
            };
            recorder.record(result_from_error(self.name(), &self.case.name, &err));
            return Ok(());
        }

        let started = Instant::now();
        let outcome = probe_concurrently(transport, &self.case, self.requests).await;
        let verdict = outcome.verdict(&self.case);

        recorder.record(TestResult {
            suite: self.name().to_string(),
            case: self.case.name.clone(),
            passed: verdict.passed(),
            details: verdict.details().to_string(),
            status: None,
            elapsed_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            timestamp: Utc::now(),
        });
        Ok(())
    }
}
