//! Logging Infrastructure
//!
//! Console output (plain or JSON) plus an optional daily rotating file.
//! `RUST_LOG` overrides the configured level when set.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize the global subscriber
///
/// # Arguments
/// * `level` - Default filter (e.g. "info", "employee_api=debug,tower_http=info")
/// * `json_format` - JSON lines instead of human-readable output
/// * `log_dir` - Optional directory for `employee-api.YYYY-MM-DD` files
///
/// The returned guard flushes the file writer on drop; keep it alive for
/// the lifetime of the process.
pub fn init_logger(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<Option<WorkerGuard>> {
    let mut layers: Vec<BoxedLayer> = Vec::new();

    let console: BoxedLayer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_filter(env_filter(level))
            .boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_filter(env_filter(level))
            .boxed()
    };
    layers.push(console);

    let mut guard = None;
    if let Some(dir) = log_dir {
        let dir = Path::new(dir);
        fs::create_dir_all(dir)?;

        let appender = tracing_appender::rolling::daily(dir, "employee-api");
        let (writer, worker_guard) = tracing_appender::non_blocking(appender);
        guard = Some(worker_guard);

        layers.push(
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(env_filter(level))
                .boxed(),
        );
    }

    tracing_subscriber::registry().with(layers).try_init()?;
    Ok(guard)
}
