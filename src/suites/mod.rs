//! 內建的 smoke suites，每個模組對應平台的一組 server-api 端點。
//!
//! 預期狀態碼刻意放寬（例如 `[200, 401]`），因為 mock bearer token
//! 在 preview 部署上不一定會被接受。

pub mod ai;
pub mod analytics;
pub mod auth;
pub mod bookings;
pub mod classes;
pub mod concurrency;
pub mod custom;
pub mod fixtures;
pub mod notifications;
pub mod onboarding;
pub mod payments;
pub mod staffing;
pub mod upload;

use crate::domain::ports::Suite;

pub const API_PREFIX: &str = "/server-api";

pub(crate) fn api(path: &str) -> String {
    format!("{}{}", API_PREFIX, path)
}

#[derive(Debug, Clone)]
pub struct SuiteOptions {
    /// 併發探測同時送出的請求數
    pub concurrency: usize,
}

impl Default for SuiteOptions {
    fn default() -> Self {
        Self {
            concurrency: concurrency::DEFAULT_CONCURRENCY,
        }
    }
}

pub fn builtin_suites(options: &SuiteOptions) -> Vec<Box<dyn Suite>> {
    vec![
        Box::new(auth::suite()),
        Box::new(bookings::suite()),
        Box::new(classes::suite()),
        Box::new(payments::suite()),
        Box::new(onboarding::suite()),
        Box::new(staffing::suite()),
        Box::new(ai::suite()),
        Box::new(upload::suite()),
        Box::new(notifications::suite()),
        Box::new(analytics::suite()),
        Box::new(concurrency::ConcurrencySuite::new(options.concurrency)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_suite_names_are_unique() {
        let suites = builtin_suites(&SuiteOptions::default());
        let names: HashSet<&str> = suites.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), suites.len());
        assert!(names.contains("bookings"));
        assert!(names.contains("concurrency"));
        assert!(!names.contains("custom"));
    }
}
