use std::path::{Path, PathBuf};

/// Loads a `.env` file from the current directory or its ancestors into the process environment. Variables that are
/// already set are not overridden. A missing file is not an error.
pub fn load_dotenv_into_env() -> Option<PathBuf> {
  loaded(dotenvy::dotenv())
}

/// Loads the env file at `path` into the process environment, like [`load_dotenv_into_env`]. Returns `path` if it was
/// loaded.
pub fn load_dotenv_file_into_env(path: impl AsRef<Path>) -> Option<PathBuf> {
  let path = path.as_ref();
  loaded(dotenvy::from_path(path).map(|()| path.to_path_buf()))
}

fn loaded(result: Result<PathBuf, dotenvy::Error>) -> Option<PathBuf> {
  match result {
    Ok(path) => Some(path),
    Err(e) if e.not_found() => None,
    Err(e) => {
      #[cfg(feature = "tracing")]
      tracing::warn!("Failed to load .env file: {}", e);
      #[cfg(not(feature = "tracing"))]
      let _ = e;
      None
    }
  }
}

/// Value of environment variable `key`, if set and valid unicode.
#[inline]
pub fn var(key: &str) -> Option<String> {
  dotenvy::var(key).ok()
}


#[cfg(test)]
mod tests {
  use std::fs;

  use super::*;

  #[test]
  fn unset_variable_is_none() {
    assert_eq!(var("TAGSUM_CORE_TEST_SURELY_UNSET_VARIABLE"), None);
  }

  #[test]
  fn missing_file_is_not_an_error() {
    let path = std::env::temp_dir().join("tagsum_core_env_test_missing").join(".env");
    assert_eq!(load_dotenv_file_into_env(&path), None);
  }

  #[test]
  fn file_is_loaded_into_env() {
    let dir = std::env::temp_dir().join(format!("tagsum_core_env_test_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(".env");
    fs::write(&path, "TAGSUM_CORE_TEST_LOADED_VARIABLE=loaded\n").unwrap();

    assert_eq!(load_dotenv_file_into_env(&path), Some(path.clone()));
    assert_eq!(var("TAGSUM_CORE_TEST_LOADED_VARIABLE").as_deref(), Some("loaded"));

    fs::remove_dir_all(&dir).unwrap();
  }
}
