use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the console filter directives, e.g. `CONSOLE_LOG=tagsum::abort=error`.
pub const CONSOLE_LOG_ENV: &str = "CONSOLE_LOG";
/// Environment variable holding the log file filter directives.
pub const FILE_LOG_ENV: &str = "FILE_LOG";

/// Sets up a global tracing subscriber writing to standard error, and optionally to a log file.
///
/// Filters fall back to [`CONSOLE_LOG_ENV`] and [`FILE_LOG_ENV`] when not given explicitly. Abort reports are emitted
/// as `error` events on the `tagsum::abort` target before the process terminates.
#[derive(Default)]
pub struct AppTracingBuilder {
  console_filter: Option<EnvFilter>,
  log_file_path: Option<PathBuf>,
  file_filter: Option<EnvFilter>,
}
impl AppTracingBuilder {
  pub fn with_console_filter(mut self, console_filter: EnvFilter) -> Self {
    self.console_filter = Some(console_filter);
    self
  }

  pub fn with_log_file_path(mut self, log_file_path: impl Into<PathBuf>) -> Self {
    self.log_file_path = Some(log_file_path.into());
    self
  }
  pub fn with_log_file_path_opt(mut self, log_file_path: Option<impl Into<PathBuf>>) -> Self {
    self.log_file_path = log_file_path.map(Into::into);
    self
  }
  pub fn with_file_filter(mut self, file_filter: EnvFilter) -> Self {
    self.file_filter = Some(file_filter);
    self
  }

  /// Installs the subscriber. Must be called at most once per process; keep the returned [`AppTracing`] alive for as
  /// long as events should reach the log file.
  pub fn build(self) -> AppTracing {
    let console_filter = self.console_filter.unwrap_or_else(|| filter_from_env(CONSOLE_LOG_ENV));
    let file_filter = self.file_filter;
    let file = self.log_file_path.map(|p| (p, file_filter.unwrap_or_else(|| filter_from_env(FILE_LOG_ENV))));
    AppTracing::new(console_filter, file)
  }
}

fn filter_from_env(var: &str) -> EnvFilter {
  EnvFilter::try_from_env(var).unwrap_or_default()
}

pub struct AppTracing {
  _file_tracing: FileTracing,
}
#[cfg(feature = "app_tracing_file")]
#[derive(Default)]
struct FileTracing(Option<tracing_appender::non_blocking::WorkerGuard>);
#[cfg(not(feature = "app_tracing_file"))]
#[derive(Default)]
struct FileTracing;

impl AppTracing {
  fn new(console_filter: EnvFilter, file: Option<(PathBuf, EnvFilter)>) -> Self {
    let layered = tracing_subscriber::registry().with(
      tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(console_filter)
    );

    #[cfg(feature = "app_tracing_file")]
    let _file_tracing = match file.map(|(path, filter)| (open_log_file(&path), path, filter)) {
      Some((Ok(log_file), _, filter)) => {
        let (non_blocking, guard) = tracing_appender::non_blocking(std::io::BufWriter::new(log_file));
        layered
          .with(tracing_subscriber::fmt::layer().with_writer(non_blocking).with_ansi(false).with_filter(filter))
          .init();
        FileTracing(Some(guard))
      }
      Some((Err(e), path, _)) => {
        layered.init();
        tracing::warn!("Cannot log to file; could not truncate/create and open log file '{}' for writing: {}", path.display(), e);
        FileTracing::default()
      }
      None => {
        layered.init();
        FileTracing::default()
      }
    };
    #[cfg(not(feature = "app_tracing_file"))]
    let _file_tracing = {
      layered.init();
      if let Some((path, _)) = file {
        tracing::warn!("Cannot log to file '{}'; feature `app_tracing_file` is disabled", path.display());
      }
      FileTracing
    };

    Self { _file_tracing }
  }
}

/// Creates (or truncates) the log file at `path`, creating its parent directories first.
#[cfg(feature = "app_tracing_file")]
fn open_log_file(path: &std::path::Path) -> std::io::Result<std::fs::File> {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::File::create(path)
}


#[cfg(all(test, feature = "app_tracing_file"))]
mod tests {
  use super::*;

  #[test]
  fn log_file_parents_are_created() {
    let dir = std::env::temp_dir().join(format!("tagsum_core_tracing_test_{}", std::process::id()));
    let path = dir.join("nested").join("log.txt");
    assert!(open_log_file(&path).is_ok());
    assert!(path.is_file());
    std::fs::remove_dir_all(&dir).unwrap();
  }
}
