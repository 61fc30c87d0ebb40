use chrono::Local;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Timestamped log file inside `log_dir`, with a `latest.log` link next to it
fn open_log_file(log_dir: &Path) -> Option<(PathBuf, std::fs::File)> {
    std::fs::create_dir_all(log_dir).ok()?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = log_dir.join(format!("text-tools_{}.log", timestamp));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok()?;

    #[cfg(unix)]
    {
        let latest_path = log_dir.join("latest.log");
        let _ = std::fs::remove_file(&latest_path);
        let _ = std::os::unix::fs::symlink(&log_path, &latest_path);
    }

    Some((log_path, file))
}

/// Initialize tracing.
///
/// Logs go to a timestamped file in `log_dir` when one can be opened, and to
/// stderr otherwise. `RUST_LOG` overrides the default `info` filter. Returns
/// the log file path, if any.
pub fn init_tracing(log_dir: Option<&Path>) -> Option<PathBuf> {
    let opened = log_dir.and_then(open_log_file);

    let (writer, log_path) = match opened {
        Some((path, file)) => (BoxMakeWriter::new(Mutex::new(file)), Some(path)),
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .compact();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A second initialization (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();

    tracing::info!(target: "logging", "Logging initialized");
    log_path
}
