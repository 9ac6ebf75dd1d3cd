use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppResult;

pub struct CommitMessageFile {
    path: PathBuf,
}

impl CommitMessageFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the message with surrounding whitespace removed.
    pub fn read(&self) -> AppResult<String> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(contents.trim().to_string())
    }

    /// Replaces the whole file with `message`.
    pub fn write(&self, message: &str) -> AppResult<()> {
        fs::write(&self.path, message)?;
        Ok(())
    }
}
