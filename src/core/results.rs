use crate::core::assertions::Verdict;
use crate::domain::model::{ProbeResponse, RunSummary, SuiteTally, TestResult};
use crate::domain::ports::Recorder;
use crate::utils::error::SmokeError;
use chrono::Utc;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::time::{Duration, Instant};

/// 由比對結果建立 TestResult
pub fn result_from_verdict(
    suite: &str,
    case: &str,
    response: &ProbeResponse,
    verdict: Verdict,
) -> TestResult {
    let passed = verdict.passed();
    let details = match verdict {
        Verdict::Pass(d) | Verdict::Fail(d) => d,
    };
    TestResult {
        suite: suite.to_string(),
        case: case.to_string(),
        passed,
        details,
        status: Some(response.status),
        elapsed_ms: duration_ms(response.elapsed),
        timestamp: Utc::now(),
    }
}

/// 網路錯誤與狀態碼不符一樣記為 FAIL
pub fn result_from_error(suite: &str, case: &str, err: &SmokeError) -> TestResult {
    TestResult {
        suite: suite.to_string(),
        case: case.to_string(),
        passed: false,
        details: err.short_message(),
        status: None,
        elapsed_ms: 0,
        timestamp: Utc::now(),
    }
}

fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// 累積所有測試結果並輸出摘要
pub struct ResultLog {
    run_id: String,
    results: Vec<TestResult>,
    started: Instant,
    echo: bool,
}

impl ResultLog {
    pub fn new(run_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            results: Vec::new(),
            started: Instant::now(),
            echo: true,
        }
    }

    /// 不把每一行結果印到 stdout（測試用）
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn log_result(&mut self, suite: &str, case: &str, passed: bool, details: &str) {
        self.record(TestResult {
            suite: suite.to_string(),
            case: case.to_string(),
            passed,
            details: details.to_string(),
            status: None,
            elapsed_ms: 0,
            timestamp: Utc::now(),
        });
    }

    pub fn log_error(&mut self, suite: &str, case: &str, err: &SmokeError) {
        self.record(result_from_error(suite, case, err));
    }

    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    pub fn failures(&self) -> impl Iterator<Item = &TestResult> {
        self.results.iter().filter(|r| !r.passed)
    }

    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    pub fn summary(&self) -> RunSummary {
        let mut per_suite: BTreeMap<String, SuiteTally> = BTreeMap::new();
        for result in &self.results {
            let tally = per_suite.entry(result.suite.clone()).or_default();
            if result.passed {
                tally.passed += 1;
            } else {
                tally.failed += 1;
            }
        }

        let total = self.results.len();
        let passed = self.results.iter().filter(|r| r.passed).count();
        let success_rate = if total == 0 {
            0.0
        } else {
            passed as f64 / total as f64 * 100.0
        };

        RunSummary {
            run_id: self.run_id.clone(),
            total,
            passed,
            failed: total - passed,
            success_rate,
            per_suite,
            duration_ms: duration_ms(self.started.elapsed()),
        }
    }

    pub fn render_summary(&self) -> String {
        let summary = self.summary();
        let mut out = String::new();

        let _ = writeln!(out, "{}", "=".repeat(60));
        let _ = writeln!(out, "📊 SMOKE TEST SUMMARY ({})", summary.run_id);
        let _ = writeln!(out, "{}", "=".repeat(60));
        let _ = writeln!(out, "Total tests: {}", summary.total);
        let _ = writeln!(out, "✅ Passed: {}", summary.passed);
        let _ = writeln!(out, "❌ Failed: {}", summary.failed);
        let _ = writeln!(out, "📈 Success rate: {:.1}%", summary.success_rate);
        let _ = writeln!(out, "⏱️  Duration: {} ms", summary.duration_ms);

        if !summary.per_suite.is_empty() {
            let _ = writeln!(out, "\nPer suite:");
            for (suite, tally) in &summary.per_suite {
                let _ = writeln!(out, "  - {}: {}/{} passed", suite, tally.passed, tally.total());
            }
        }

        let failures: Vec<&TestResult> = self.failures().collect();
        if !failures.is_empty() {
            let _ = writeln!(out, "\nFailed tests:");
            for failure in failures {
                let _ = writeln!(out, "  ❌ [{}] {}: {}", failure.suite, failure.case, failure.details);
            }
        }

        out
    }

    pub fn print_summary(&self) {
        println!("\n{}", self.render_summary());
    }
}

impl Recorder for ResultLog {
    fn record(&mut self, result: TestResult) {
        let mark = if result.passed { "✅ PASS" } else { "❌ FAIL" };
        if self.echo {
            println!("{} [{}] {}: {}", mark, result.suite, result.case, result.details);
        }
        if result.passed {
            tracing::debug!(suite = %result.suite, case = %result.case, "{}", result.details);
        } else {
            tracing::warn!(suite = %result.suite, case = %result.case, "{}", result.details);
        }
        self.results.push(result);
    }
}
