use super::MemoSlot;
use crate::error::{MemozError, Result};
use crate::model::Memo;
use std::fs;
use std::path::{Path, PathBuf};

const SLOT_FILENAME: &str = "memos.json";

pub struct FileSlot {
    root: PathBuf,
}

impl FileSlot {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn slot_path(&self) -> PathBuf {
        self.root.join(SLOT_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(MemozError::Io)?;
        }
        Ok(())
    }
}

impl MemoSlot for FileSlot {
    fn load(&self) -> Result<Vec<Memo>> {
        let path = self.slot_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path).map_err(MemozError::Io)?;
        let memos: Vec<Memo> = serde_json::from_str(&content).map_err(MemozError::Serialization)?;
        Ok(memos)
    }

    fn save(&mut self, memos: &[Memo]) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let content = serde_json::to_string_pretty(memos).map_err(MemozError::Serialization)?;
        fs::write(self.slot_path(), content).map_err(MemozError::Io)?;
        Ok(())
    }
}
