use std::path::{Path, PathBuf};

const APP_DIR: &str = "gmail-delegater";
const KEY_FILE_NAME: &str = "service-account.json";
const LEGACY_KEY_FILE: &str = "gmail-delegater.json";

#[derive(Debug, Clone)]
pub struct AppPaths {
    working_dir: PathBuf,
    config_dir: Option<PathBuf>,
}

impl AppPaths {
    pub fn discover() -> Self {
        Self {
            working_dir: PathBuf::from("."),
            config_dir: dirs::config_dir().map(|root| root.join(APP_DIR)),
        }
    }

    pub fn new(working_dir: impl Into<PathBuf>, config_dir: Option<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            config_dir,
        }
    }

    /// Candidate key locations, in lookup order.
    pub fn key_file_candidates(&self) -> Vec<PathBuf> {
        let mut candidates = vec![self.working_dir.join(LEGACY_KEY_FILE)];
        if let Some(config_dir) = &self.config_dir {
            candidates.push(config_dir.join(KEY_FILE_NAME));
        }
        candidates
    }

    pub fn config_dir(&self) -> Option<&Path> {
        self.config_dir.as_deref()
    }
}
