//! Tagged-sum value containers: [`Optional`] (present or absent) and [`Outcome`] (ok or err), a shared
//! combinator algebra over both, and a uniform [abort](abort::fail) path for invalid access.

pub mod abort;
pub mod diagnose;
pub mod optional;
pub mod outcome;
pub mod catch;
pub mod util;
pub mod app;

pub mod prelude;

pub use optional::{none, some, Optional};
pub use outcome::{err, ok, Outcome};
