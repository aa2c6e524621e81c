//! `.env` loading ahead of the credential lookup.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

/// Files tried in order. Earlier files win because loading never overrides.
pub const ENV_FILE_NAMES: &[&str] = &[".env", "config.env"];

#[derive(Debug, Default)]
pub struct EnvLoadResult {
    pub loaded: Vec<PathBuf>,
}

impl EnvLoadResult {
    pub fn any_loaded(&self) -> bool {
        !self.loaded.is_empty()
    }
}

/// Load each of [`ENV_FILE_NAMES`] found in `dir` into the process environment.
///
/// Variables already set are left alone. Missing or unparsable files are
/// skipped with a log line.
pub fn load_env_files(dir: &Path) -> EnvLoadResult {
    let mut result = EnvLoadResult::default();

    for name in ENV_FILE_NAMES {
        let path = dir.join(name);
        if !path.is_file() {
            debug!("No env file at {}", path.display());
            continue;
        }

        match dotenvy::from_path(&path) {
            Ok(()) => {
                info!("Loaded env file: {}", path.display());
                result.loaded.push(path);
            }
            Err(e) => warn!("Failed to parse env file {}: {e}", path.display()),
        }
    }

    result
}
