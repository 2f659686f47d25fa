pub mod assertions;
pub mod client;
pub mod concurrency;
pub mod report;
pub mod results;
pub mod runner;

pub use crate::domain::model::{ProbeCase, ProbeResponse, RunSummary, TestResult};
pub use crate::domain::ports::{Recorder, Storage, Suite, Transport};
pub use crate::utils::error::Result;
