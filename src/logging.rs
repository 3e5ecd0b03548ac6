use std::ffi::OsStr;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILE: &str = "restaurants.log";

/// Initialize the logging system
///
/// Logs always go to stderr so `query`/`mutate` output on stdout stays
/// machine-readable. `RUST_LOG` overrides the level chosen by `verbose`.
pub fn init(verbose: bool, log_file: Option<&Path>) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(stderr_layer);

    let Some(log_path) = log_file else {
        subscriber.init();
        return;
    };

    let (dir, file_name) = split_log_path(log_path);
    let _ = std::fs::create_dir_all(dir);

    let file_layer = fmt::layer()
        .with_writer(tracing_appender::rolling::daily(dir, file_name))
        .with_ansi(false)
        .json();

    subscriber.with(file_layer).init();
}

fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("restaurants={}", level)
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Directory and file name prefix for the rolling appender.
fn split_log_path(path: &Path) -> (&Path, &OsStr) {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE));
    (dir, file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "restaurants=info");
        assert_eq!(default_directive(true), "restaurants=debug");
    }

    #[test]
    fn test_split_log_path_with_directory() {
        let (dir, name) = split_log_path(Path::new("logs/api.log"));
        assert_eq!(dir, Path::new("logs"));
        assert_eq!(name, "api.log");
    }

    #[test]
    fn test_split_log_path_bare_file_uses_cwd() {
        let (dir, name) = split_log_path(Path::new("api.log"));
        assert_eq!(dir, Path::new("."));
        assert_eq!(name, "api.log");
    }

    #[test]
    fn test_split_log_path_without_file_name() {
        let (_, name) = split_log_path(Path::new("/"));
        assert_eq!(name, DEFAULT_LOG_FILE);
    }
}
