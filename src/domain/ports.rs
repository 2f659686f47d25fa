use crate::domain::model::{ProbeCase, ProbeResponse, TestResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// 送出單一 probe 請求
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, case: &ProbeCase) -> Result<ProbeResponse>;
}

/// 接收測試結果（`ResultLog` 為主要實作）
pub trait Recorder: Send {
    fn record(&mut self, result: TestResult);
}

#[async_trait]
pub trait Suite: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;

    /// 執行整個 suite。個別案例失敗只會產生 FAIL 結果，不會回傳 Err
    async fn execute(&self, transport: Arc<dyn Transport>, recorder: &mut dyn Recorder)
        -> Result<()>;
}
