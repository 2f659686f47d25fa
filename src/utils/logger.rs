use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日誌輸出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 終端機用的精簡格式
    #[default]
    Compact,
    /// CI 收集用的 JSON 格式
    Json,
}

fn default_filter(verbose: bool) -> EnvFilter {
    let directive = if verbose {
        "studio_smoke=debug,warn"
    } else {
        "studio_smoke=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

pub fn init_logger(verbose: bool, format: LogFormat) {
    let filter = default_filter(verbose);
    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    // PASS/FAIL 行已印到 stdout，日誌一律走 stderr
    match format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(layer.json().with_writer(std::io::stderr))
            .init(),
    }
}
