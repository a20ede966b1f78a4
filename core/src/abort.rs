//! Uniform process-terminating failure report.
//!
//! Every programmer-error condition in this crate (unwrapping an absent [`Optional`](crate::Optional), accessing the
//! wrong alternative of an [`Outcome`](crate::Outcome), ...) ends up in [`fail`] or [`fail!`](crate::fail). The
//! report is written to standard error as:
//!
//! ```text
//! panicked at <file> in function <function>:<line>:<column>:
//! <message>
//! ```
//!
//! The ` in function <function>` clause is omitted when the function name is unknown. If tracebacks are enabled
//! ([`set_traceback`], [`AbortConfig::install`]), a captured backtrace follows. The process is then aborted; nothing
//! unwinds.

use std::any::Any;
use std::backtrace::Backtrace;
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};
use std::panic::Location;
use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide traceback flag. Starts disabled.
static TRACEBACK: AtomicBool = AtomicBool::new(false);

/// Enables or disables backtrace capture in abort reports.
///
/// Meant to be set once at startup; concurrent toggling while another thread is aborting is not supported.
#[inline]
pub fn set_traceback(enabled: bool) {
  TRACEBACK.store(enabled, Ordering::Relaxed);
}

/// Whether abort reports currently include a backtrace.
#[inline]
pub fn traceback_enabled() -> bool {
  TRACEBACK.load(Ordering::Relaxed)
}


/// Environment variable read by [`AbortConfig::from_env`].
pub const TRACEBACK_ENV: &str = "TAGSUM_TRACEBACK";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("Invalid value '{value}' for flag '{var}'; expected one of 1/0, true/false, yes/no, on/off")]
  InvalidFlag { var: &'static str, value: String },
  #[error("Value of flag '{var}' is not valid unicode")]
  NotUnicode { var: &'static str },
}

/// Configuration of the abort primitive.
///
/// Build it at startup and [install](Self::install) it; the abort path only reads the installed state.
#[derive(Default, Clone, Copy, Eq, PartialEq, Debug)]
pub struct AbortConfig {
  traceback: bool,
}
impl AbortConfig {
  #[inline]
  pub const fn new() -> Self { Self { traceback: false } }

  #[inline]
  pub const fn with_traceback(mut self, traceback: bool) -> Self {
    self.traceback = traceback;
    self
  }

  #[inline]
  pub const fn traceback(&self) -> bool { self.traceback }

  /// Reads the configuration from [`TRACEBACK_ENV`]. An unset variable leaves the default (disabled).
  pub fn from_env() -> Result<Self, ConfigError> {
    match std::env::var(TRACEBACK_ENV) {
      Ok(value) => Ok(Self::new().with_traceback(parse_flag(TRACEBACK_ENV, &value)?)),
      Err(std::env::VarError::NotPresent) => Ok(Self::new()),
      Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { var: TRACEBACK_ENV }),
    }
  }

  /// Publishes this configuration process-wide.
  pub fn install(self) {
    set_traceback(self.traceback);
    #[cfg(feature = "tracing")]
    tracing::debug!(traceback = self.traceback, "installed abort configuration");
  }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
  match value.trim().to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Ok(true),
    "0" | "false" | "no" | "off" | "" => Ok(false),
    _ => Err(ConfigError::InvalidFlag { var, value: value.to_string() }),
  }
}


/// A single abort report: message plus the source location that triggered it.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Diagnostic {
  message: String,
  file: Cow<'static, str>,
  line: u32,
  column: u32,
  function: Option<&'static str>,
}
impl Diagnostic {
  #[inline]
  pub fn new(message: impl Into<String>, file: impl Into<Cow<'static, str>>, line: u32, column: u32) -> Self {
    Self { message: message.into(), file: file.into(), line, column, function: None }
  }

  #[inline]
  pub fn from_location(message: impl Into<String>, location: &'static Location<'static>) -> Self {
    Self::new(message, location.file(), location.line(), location.column())
  }

  #[inline]
  pub fn with_function(mut self, function: &'static str) -> Self {
    self.function = Some(function);
    self
  }

  #[inline]
  pub fn message(&self) -> &str { &self.message }
  #[inline]
  pub fn file(&self) -> &str { &self.file }
  #[inline]
  pub fn line(&self) -> u32 { self.line }
  #[inline]
  pub fn column(&self) -> u32 { self.column }
  #[inline]
  pub fn function(&self) -> Option<&'static str> { self.function }
}
impl Display for Diagnostic {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self.function {
      Some(function) => write!(f, "panicked at {} in function {}:{}:{}:\n{}", self.file, function, self.line,
        self.column, self.message),
      None => write!(f, "panicked at {}:{}:{}:\n{}", self.file, self.line, self.column, self.message),
    }
  }
}


/// Aborts the process, reporting `message` at the caller's location.
#[track_caller]
#[cold]
pub fn fail(message: impl AsRef<str>) -> ! {
  fail_with(Diagnostic::from_location(message.as_ref(), Location::caller()))
}

/// Aborts the process with an already composed `diagnostic`.
#[cold]
pub fn fail_with(diagnostic: Diagnostic) -> ! {
  #[cfg(feature = "tracing")]
  tracing::error!(
    target: "tagsum::abort",
    file = &*diagnostic.file,
    line = diagnostic.line,
    column = diagnostic.column,
    function = diagnostic.function,
    "{}", diagnostic.message
  );

  let stderr = io::stderr();
  let mut stderr = stderr.lock();
  // Ignore write errors: the process is going down regardless.
  let _ = writeln!(stderr, "{}", diagnostic);
  if traceback_enabled() {
    let _ = writeln!(stderr, "{}", Backtrace::force_capture());
  }
  let _ = stderr.flush();
  std::process::abort()
}

/// Text of a panic payload. Panics carry either `&'static str` or `String` unless raised with `panic_any`.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
  if let Some(message) = payload.downcast_ref::<&str>() {
    message.to_string()
  } else if let Some(message) = payload.downcast_ref::<String>() {
    message.clone()
  } else {
    String::from("Box<dyn Any>")
  }
}

/// Path of the function this macro is expanded in.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
  () => {{
    fn f() {}
    fn type_name_of<T>(_: T) -> &'static str { ::std::any::type_name::<T>() }
    let mut name = type_name_of(f);
    name = name.strip_suffix("::f").unwrap_or(name);
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
      name = stripped;
    }
    name
  }};
}

/// Aborts the process with a `format!`-style message, reporting the invocation site and enclosing function.
///
/// ```no_run
/// fn check(len: usize) {
///   if len == 0 { tagsum_core::fail!("expected a non-empty buffer, got {} bytes", len); }
/// }
/// ```
#[macro_export]
macro_rules! fail {
  ($($arg:tt)*) => {
    $crate::abort::fail_with(
      $crate::abort::Diagnostic::new(::std::format!($($arg)*), ::std::file!(), ::std::line!(), ::std::column!())
        .with_function($crate::__function_path!())
    )
  };
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn diagnostic_with_function() {
    let diagnostic = Diagnostic::new("Error and abort!", "src/main.rs", 5, 5).with_function("main");
    assert_eq!(diagnostic.to_string(), "panicked at src/main.rs in function main:5:5:\nError and abort!");
  }

  #[test]
  fn diagnostic_without_function() {
    let diagnostic = Diagnostic::new("Error and abort!", "src/main.rs", 5, 5);
    assert_eq!(diagnostic.to_string(), "panicked at src/main.rs:5:5:\nError and abort!");
  }

  #[test]
  fn diagnostic_from_caller_location() {
    #[track_caller]
    fn here() -> Diagnostic { Diagnostic::from_location("msg", Location::caller()) }
    let line = line!() + 1;
    let diagnostic = here();
    assert_eq!(diagnostic.file(), file!());
    assert_eq!(diagnostic.line(), line);
    assert_eq!(diagnostic.function(), None);
  }

  #[test]
  fn function_path_strips_helper() {
    let path = crate::__function_path!();
    assert!(path.ends_with("tests::function_path_strips_helper"), "{}", path);
    let in_closure = (|| crate::__function_path!())();
    assert_eq!(in_closure, path);
  }

  #[test]
  fn panic_payload_messages() {
    let borrowed: Box<dyn Any + Send> = Box::new("static message");
    assert_eq!(panic_message(borrowed.as_ref()), "static message");
    let owned: Box<dyn Any + Send> = Box::new(String::from("owned message"));
    assert_eq!(panic_message(owned.as_ref()), "owned message");
    let other: Box<dyn Any + Send> = Box::new(5u8);
    assert_eq!(panic_message(other.as_ref()), "Box<dyn Any>");
  }

  #[test]
  fn caught_panic_payload() {
    let payload = std::panic::catch_unwind(|| panic!("boom {}", 1)).unwrap_err();
    assert_eq!(panic_message(payload.as_ref()), "boom 1");
  }

  #[test]
  fn parse_flag_values() {
    for value in ["1", "true", "YES", " on "] {
      assert_eq!(parse_flag("X", value), Ok(true));
    }
    for value in ["0", "false", "No", "off", ""] {
      assert_eq!(parse_flag("X", value), Ok(false));
    }
    assert_eq!(parse_flag("X", "maybe"), Err(ConfigError::InvalidFlag { var: "X", value: "maybe".to_string() }));
  }

  #[test]
  fn config_builder() {
    let config = AbortConfig::new();
    assert!(!config.traceback());
    assert!(config.with_traceback(true).traceback());
    assert_eq!(AbortConfig::default(), AbortConfig::new());
  }
}
