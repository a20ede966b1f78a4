use crate::abort::{fail_with, panic_message, Diagnostic};

/// Routes ordinary Rust panics through the abort report: the panic message and location are written in the same
/// format as [`fail`](crate::abort::fail), honoring the traceback setting, and the process aborts.
///
/// Replaces any previously installed panic hook. Panics then abort before they unwind, so `catch_unwind` no longer
/// observes them.
pub fn install_panic_handler() {
  std::panic::set_hook(Box::new(|info| {
    let message = panic_message(info.payload());
    let diagnostic = match info.location() {
      Some(location) => Diagnostic::new(message, location.file().to_string(), location.line(), location.column()),
      None => Diagnostic::new(message, "<unknown>", 0, 0),
    };
    fail_with(diagnostic)
  }));
}
