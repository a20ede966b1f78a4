//! Glob-importable names: the containers, their factories, and the borrowed-combinator traits.

pub use crate::catch::Catch;
pub use crate::diagnose::Diagnose;
pub use crate::optional::{none, some, CopyingOptional, Optional};
pub use crate::outcome::{err, ok, CopyingOutcome, Outcome};
