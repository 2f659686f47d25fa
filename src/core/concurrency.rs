use crate::core::assertions::{format_codes, Verdict};
use crate::domain::model::ProbeCase;
use crate::domain::ports::Transport;
use crate::utils::error::SmokeError;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::task::JoinSet;

/// 同時送出多個相同請求後收集到的狀態碼與錯誤
#[derive(Debug, Clone, Default)]
pub struct ConcurrentOutcome {
    pub requested: usize,
    pub statuses: Vec<u16>,
    pub errors: Vec<String>,
}

impl ConcurrentOutcome {
    pub fn status_counts(&self) -> BTreeMap<u16, usize> {
        let mut counts = BTreeMap::new();
        for status in &self.statuses {
            *counts.entry(*status).or_insert(0) += 1;
        }
        counts
    }

    fn describe(&self) -> String {
        let counts: Vec<String> = self
            .status_counts()
            .iter()
            .map(|(status, count)| format!("{}×{}", status, count))
            .collect();
        let mut details = format!("{} requests: {}", self.requested, counts.join(", "));
        if !self.errors.is_empty() {
            details.push_str(&format!(" | {} error(s): {}", self.errors.len(), self.errors.join("; ")));
        }
        details
    }

    pub fn verdict(&self, case: &ProbeCase) -> Verdict {
        let details = self.describe();

        if !self.errors.is_empty() || self.statuses.len() != self.requested {
            return Verdict::Fail(details);
        }
        if self.statuses.iter().any(|s| *s >= 500) {
            return Verdict::Fail(format!("server error under concurrent load | {}", details));
        }
        if let Some(unexpected) = self.statuses.iter().find(|s| !case.accepts(**s)) {
            return Verdict::Fail(format!(
                "status {} not in {} | {}",
                unexpected,
                format_codes(&case.expect),
                details
            ));
        }
        Verdict::Pass(details)
    }
}

/// 在 tokio runtime 上同時發出 `n` 個相同請求
pub async fn probe_concurrently(
    transport: Arc<dyn Transport>,
    case: &ProbeCase,
    n: usize,
) -> ConcurrentOutcome {
    let mut tasks = JoinSet::new();
    for _ in 0..n {
        let transport = Arc::clone(&transport);
        let case = case.clone();
        tasks.spawn(async move { transport.send(&case).await });
    }

    let mut outcome = ConcurrentOutcome {
        requested: n,
        ..Default::default()
    };

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(response)) => outcome.statuses.push(response.status),
            Ok(Err(e)) => outcome.errors.push(e.short_message()),
            Err(e) => outcome.errors.push(
                SmokeError::TaskError {
                    message: e.to_string(),
                }
                .short_message(),
            ),
        }
    }

    tracing::debug!("Concurrent probe '{}' collected {:?}", case.name, outcome.status_counts());
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(statuses: &[u16], errors: &[&str]) -> ConcurrentOutcome {
        ConcurrentOutcome {
            requested: statuses.len() + errors.len(),
            statuses: statuses.to_vec(),
            errors: errors.iter().map(|e| e.to_string()).collect(),
        }
    }

    #[test]
    fn test_duplicate_booking_codes_pass() {
        let case = ProbeCase::post("dup", "/server-api/bookings").expect(&[200, 201, 409, 401]);
        let verdict = outcome(&[409, 201, 409], &[]).verdict(&case);
        assert_eq!(verdict, Verdict::Pass("3 requests: 201×1, 409×2".to_string()));
    }

    #[test]
    fn test_server_error_fails() {
        let case = ProbeCase::post("dup", "/server-api/bookings").expect(&[200, 500]);
        let verdict = outcome(&[200, 500, 200], &[]).verdict(&case);
        assert!(!verdict.passed());
        assert!(verdict.details().starts_with("server error under concurrent load"));
    }

    #[test]
    fn test_errors_and_unexpected_codes_fail() {
        let case = ProbeCase::post("dup", "/server-api/bookings").expect(&[201]);
        assert!(!outcome(&[201, 201], &["connection reset"]).verdict(&case).passed());

        let verdict = outcome(&[201, 404, 201], &[]).verdict(&case);
        assert!(verdict.details().starts_with("status 404 not in 201"));
    }
}
