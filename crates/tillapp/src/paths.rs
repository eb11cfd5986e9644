use crate::error::{Result, TillError};
use directories::ProjectDirs;
use std::path::PathBuf;

/// OS-appropriate default location of the data file, e.g.
/// `~/.local/share/till/inventory.json` on Linux. UIs may override it
/// (the CLI takes `--data-file`).
pub fn default_data_file() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "till", "till").ok_or_else(|| {
        TillError::Store("could not determine a data directory for this OS".to_string())
    })?;
    Ok(dirs.data_dir().join("inventory.json"))
}
