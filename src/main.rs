use anyhow::Context;
use clap::Parser;
use studio_smoke::app;
use studio_smoke::utils::logger::{self, LogFormat};
use studio_smoke::utils::validation::Validate;
use studio_smoke::{CliConfig, ResultLog, Settings, SmokeConfig, SmokeError};

/// 退出碼：0 全部通過、1 有失敗、2 設定或系統錯誤
const EXIT_OK: i32 = 0;
const EXIT_FAILURES: i32 = 1;
const EXIT_ERROR: i32 = 2;

fn exit_code(outcome: &anyhow::Result<bool>) -> i32 {
    match outcome {
        Ok(true) => EXIT_OK,
        Ok(false) => EXIT_FAILURES,
        Err(_) => EXIT_ERROR,
    }
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(cli.verbose, format);

    tracing::info!("Starting studio-smoke");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let outcome = run(cli).await;
    if let Err(e) = &outcome {
        tracing::error!("❌ {:#}", e);
        eprintln!("❌ {:#}", e);
        if let Some(smoke_err) = e.downcast_ref::<SmokeError>() {
            eprintln!("💡 Suggestion: {}", smoke_err.recovery_suggestion());
        }
    }

    let code = exit_code(&outcome);
    if code != EXIT_OK {
        std::process::exit(code);
    }
}

async fn run(cli: CliConfig) -> anyhow::Result<bool> {
    let file = match cli.config.as_deref() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = SmokeConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?;
            config.validate()?;
            Some(config)
        }
        None => None,
    };

    let settings = Settings::resolve(cli.overrides(), file)?;
    settings.validate()?;

    if cli.list {
        let runner = app::build_runner(&settings)?;
        println!("Available suites:");
        for suite in runner.suites() {
            println!("  {:<14} {}", suite.name(), suite.description());
        }
        return Ok(true);
    }

    let run_id = cli.run_id.clone().unwrap_or_else(app::default_run_id);
    let mut log = ResultLog::new(run_id);

    println!("🚀 Smoke testing {}", settings.base_url);
    app::execute(&settings, &mut log).await?;
    log.print_summary();

    for path in app::write_reports(&settings, &log).await? {
        println!("📁 Report saved to: {}", path);
    }

    Ok(log.all_passed())
}
