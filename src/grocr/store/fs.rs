use super::Slot;
use crate::error::{GrocrError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed slot: each key is a `<key>.json` file under `root`.
///
/// The root directory is created lazily on first save, so a fresh install
/// reads as empty without any setup step.
pub struct FileSlot {
    root: PathBuf,
}

impl FileSlot {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(GrocrError::Io)?;
        }
        Ok(())
    }
}

impl Slot for FileSlot {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(GrocrError::Io)?;
        Ok(Some(content))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_root()?;
        fs::write(self.key_path(key), value).map_err(GrocrError::Io)?;
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path).map_err(GrocrError::Io)?;
        }
        Ok(())
    }
}
