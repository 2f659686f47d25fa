use crate::config::settings::Overrides;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "studio-smoke")]
#[command(about = "Smoke tests for the fitness-studio platform server-api")]
pub struct CliConfig {
    /// Base URL of the deployment under test
    #[arg(long, env = "SMOKE_BASE_URL")]
    pub base_url: Option<String>,

    /// Mock bearer token sent to auth-gated endpoints
    #[arg(long, env = "SMOKE_TOKEN")]
    pub token: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Run only these suites (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub suite: Vec<String>,

    /// Skip these suites (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Number of simultaneous requests for the concurrency probe
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Directory to write reports into
    #[arg(long)]
    pub report_dir: Option<String>,

    /// Report formats: json, csv
    #[arg(long, value_delimiter = ',')]
    pub report_format: Vec<String>,

    /// Identifier used in report file names
    #[arg(long)]
    pub run_id: Option<String>,

    /// List available suites and exit
    #[arg(long)]
    pub list: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.base_url.clone(),
            token: self.token.clone(),
            timeout_seconds: self.timeout_seconds,
            suites: self.suite.clone(),
            skip: self.skip.clone(),
            concurrency: self.concurrency,
            report_dir: self.report_dir.clone(),
            report_formats: self.report_format.clone(),
        }
    }
}
