use super::DataStore;
use crate::error::{Result, TillError};
use crate::model::Document;
use std::fs;
use std::path::{Path, PathBuf};

/// Production store: one JSON document file on disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(TillError::Io)?;
            }
        }
        Ok(())
    }

    /// Serialize and write the document, temp-file-then-rename so no
    /// reader can observe a partially written file.
    fn write_document(&self, doc: &Document) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(doc).map_err(TillError::Serialization)?;

        // The temp file must live in the same directory as the target for
        // the rename to stay atomic (no cross-filesystem moves).
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, content).map_err(TillError::Io)?;
        fs::rename(&tmp, &self.path).map_err(TillError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Document> {
        if !self.path.exists() {
            let doc = Document::default();
            self.write_document(&doc)?;
            return Ok(doc);
        }

        let content = fs::read_to_string(&self.path).map_err(TillError::Io)?;
        serde_json::from_str(&content).map_err(|source| TillError::CorruptStore {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&mut self, doc: &Document) -> Result<()> {
        self.write_document(doc)
    }
}
