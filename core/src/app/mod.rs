//! Application-side setup shared by binaries using this crate: environment loading, tracing subscribers, and routing
//! of ordinary panics into the abort report.

#[cfg(feature = "app_panic_handler")]
pub mod panic_handler;
#[cfg(feature = "app_env")]
pub mod env;
#[cfg(feature = "app_tracing")]
pub mod tracing;
