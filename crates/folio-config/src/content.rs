//! Content source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_dir() -> String {
    "content/data".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Directory holding `profile.json`, `projects.json`, etc.
    /// Relative paths resolve against the working directory.
    #[serde(default = "default_dir")]
    pub dir: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}

impl ContentConfig {
    #[must_use]
    pub fn dir_path(&self) -> PathBuf {
        PathBuf::from(&self.dir)
    }
}
