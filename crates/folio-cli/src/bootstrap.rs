use std::path::Path;

use anyhow::Context;
use folio_config::FolioConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then layered config, then apply global flag overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<FolioConfig> {
    load_dotenv(Path::new(".env"))?;

    let mut config = FolioConfig::load().context("failed to load folio configuration")?;
    if let Some(dir) = &flags.content {
        config.content.dir = dir.display().to_string();
    }
    config.validate().context("invalid configuration after CLI overrides")?;

    tracing::debug!(content = %config.content.dir, "configuration loaded");
    Ok(config)
}

/// A missing `.env` is fine; an unreadable or malformed one is not.
fn load_dotenv(path: &Path) -> anyhow::Result<()> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(()),
        Err(error) if error.not_found() => Ok(()),
        Err(error) => {
            Err(error).with_context(|| format!("failed to load dotenv file at {}", path.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_dotenv_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_dotenv(&dir.path().join(".env")).is_ok());
    }

    #[test]
    fn malformed_dotenv_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "FOLIO_BROKEN='unterminated\n").unwrap();
        let err = load_dotenv(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load dotenv file"));
    }
}
