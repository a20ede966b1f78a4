//! Runs a single abort scenario named on the command line, so abort reports can be observed from a parent process.
//!
//! ```text
//! tagsum_probe <scenario>
//! ```
//!
//! Scenarios that abort never return; the others print their result to standard output and exit successfully.

use std::error::Error;
use std::fmt;
use std::num::ParseIntError;

use tracing::debug;

use tagsum_core::abort::{AbortConfig, ConfigError};
use tagsum_core::app::env;
use tagsum_core::app::panic_handler::install_panic_handler;
use tagsum_core::app::tracing::AppTracingBuilder;
use tagsum_core::catch::Undeclared;
use tagsum_core::prelude::*;

#[derive(Debug, thiserror::Error)]
enum ProbeError {
  #[error("Missing scenario argument; expected one of: {}", SCENARIOS.join(", "))]
  MissingScenario,
  #[error("Unknown scenario '{0}'; expected one of: {}", SCENARIOS.join(", "))]
  UnknownScenario(String),
  #[error("Invalid abort configuration")]
  Config(#[from] ConfigError),
  #[error("Undeclared failure: {0}")]
  Undeclared(Undeclared),
}

const SCENARIOS: &[&str] = &[
  "unwrap-none",
  "expect-none",
  "get-none",
  "unwrap-err",
  "expect-err",
  "unwrap-err-on-ok",
  "get-wrong",
  "opaque-err",
  "fail-macro",
  "invoke-or-abort",
  "invoke-or-abort-panic",
  "expect-tuple",
  "expect-with",
  "panic",
  "invoke",
];

/// Error type that [`Catch`] is not asked to catch.
#[derive(Debug)]
struct Unexpected;
impl fmt::Display for Unexpected {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("unexpected failure") }
}
impl Error for Unexpected {}

/// Error type without a [`Diagnose`] text.
#[derive(Debug)]
struct Opaque;
impl Diagnose for Opaque {}

fn main() -> Result<(), Box<dyn Error>> {
  env::load_dotenv_into_env();
  AbortConfig::from_env().map_err(ProbeError::from)?.install();
  let _tracing = AppTracingBuilder::default().build();

  let scenario = std::env::args().nth(1).ok_or(ProbeError::MissingScenario)?;
  debug!(scenario = scenario.as_str(), "running probe scenario");
  run(&scenario)?;
  Ok(())
}

fn run(scenario: &str) -> Result<(), ProbeError> {
  match scenario {
    "unwrap-none" => {
      none::<u32>().unwrap();
    }
    "expect-none" => {
      none::<u32>().expect("Error and abort!");
    }
    "get-none" => {
      none::<u32>().get();
    }
    "unwrap-err" => {
      err::<u32, &str>("emergency failure").unwrap();
    }
    "expect-err" => {
      err::<u32, &str>("emergency failure").expect("Testing expect");
    }
    "unwrap-err-on-ok" => {
      ok::<u32, &str>(10).unwrap_err();
    }
    "get-wrong" => {
      ok::<u32, u32>(1).get_err();
    }
    "opaque-err" => {
      err::<u32, Opaque>(Opaque).expect("Opaque failure");
    }
    "fail-macro" => {
      tagsum_core::fail!("Error and abort!");
    }
    "invoke-or-abort" => {
      let _ = Catch::<ParseIntError>::invoke_or_abort(|| Err::<u32, _>(Unexpected));
    }
    "invoke-or-abort-panic" => {
      let _ = Catch::<ParseIntError>::invoke_or_abort(|| -> Result<u32, ParseIntError> { panic!("boom") });
    }
    "expect-tuple" => {
      err::<u32, (u8, &str)>((3, "three")).expect("Tuple failure");
    }
    "expect-with" => {
      err::<u32, Unexpected>(Unexpected).expect_with("Described failure", |e| Some(e.to_string()));
    }
    "panic" => {
      install_panic_handler();
      let values: Vec<u32> = Vec::new();
      let index = values.len() + 3;
      println!("{}", values[index]);
    }
    "invoke" => {
      for input in ["123456", "foo"] {
        let parsed = Catch::<ParseIntError>::invoke(|| input.parse::<u32>()).map_err(ProbeError::Undeclared)?;
        println!("{}", parsed.unwrap_or_default());
      }
    }
    other => return Err(ProbeError::UnknownScenario(other.to_string())),
  }
  Ok(())
}
