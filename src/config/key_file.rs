use std::path::PathBuf;

use crate::error::{AppError, AppResult};

use super::AppPaths;

pub fn resolve(explicit: Option<PathBuf>, paths: &AppPaths) -> AppResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    let candidates = paths.key_file_candidates();
    if let Some(found) = candidates.iter().find(|path| path.is_file()) {
        return Ok(found.clone());
    }

    let searched = candidates
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(AppError::Config(format!(
        "no service account key file found (searched {searched}). pass --key-file or set GMAIL_DELEGATER_KEY_FILE"
    )))
}
