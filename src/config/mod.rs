pub mod key_file;
pub mod paths;

pub use paths::AppPaths;

use std::path::PathBuf;

use crate::error::AppResult;

pub fn resolve_key_file(explicit: Option<PathBuf>, paths: &AppPaths) -> AppResult<PathBuf> {
    key_file::resolve(explicit, paths)
}
