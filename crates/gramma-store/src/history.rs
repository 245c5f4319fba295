//! Grammar-check history persisted as a flat JSON array.
//!
//! One file, no schema version, no migration. The array is in insertion
//! (chronological) order.
//!
//! Two siblings travel with it: `<name>.lock` (see [`crate::lock`]) and
//! `<name>.generation`, a counter bumped on every clear so that a process
//! holding an older view can tell its history was reset underneath it.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use gramma_core::entities::GrammarResult;

use crate::error::StoreError;
use crate::lock::{self, HistoryLock};

/// Location of the persisted grammar history.
#[derive(Debug, Clone)]
pub struct HistoryFile {
    path: PathBuf,
}

impl HistoryFile {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the history. A missing file is an empty history.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be read and
    /// [`StoreError::Serde`] if it is not a JSON array of results.
    pub fn load(&self) -> Result<Vec<GrammarResult>, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(self.io_error(source)),
        };
        serde_json::from_str(&raw).map_err(|source| StoreError::Serde {
            path: self.display(),
            source,
        })
    }

    /// Replace the stored history.
    ///
    /// Writes to a sibling temp file and renames it over the target.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory or file cannot be written.
    pub fn save(&self, history: &[GrammarResult]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let json = serde_json::to_string(history).map_err(|source| StoreError::Serde {
            path: self.display(),
            source,
        })?;
        write_replacing(&self.path, &json).map_err(|source| self.io_error(source))
    }

    /// Remove the stored history and bump the generation.
    /// Removing a missing file is not an error.
    ///
    /// Returns the new generation.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the history cannot be removed or the
    /// generation cannot be written.
    pub fn clear(&self) -> Result<u64, StoreError> {
        let next = self.generation()? + 1;
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => return Err(self.io_error(source)),
        }
        let generation_path = self.sibling("generation");
        write_replacing(&generation_path, &next.to_string()).map_err(|source| StoreError::Io {
            path: generation_path.display().to_string(),
            source,
        })?;
        Ok(next)
    }

    /// How many times the history has been cleared. Zero when never cleared.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] or [`StoreError::Serde`] if the generation
    /// file exists but cannot be read as a number.
    pub fn generation(&self) -> Result<u64, StoreError> {
        let path = self.sibling("generation");
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.display().to_string(),
                    source,
                });
            }
        };
        serde_json::from_str(raw.trim()).map_err(|source| StoreError::Serde {
            path: path.display().to_string(),
            source,
        })
    }

    /// Take the cross-process write lock for this history.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Locked`] if another process keeps holding it.
    pub async fn lock(&self) -> Result<HistoryLock, StoreError> {
        lock::acquire(&self.sibling("lock")).await
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map_or_else(|| OsString::from("history"), ToOwned::to_owned);
        name.push(".");
        name.push(suffix);
        self.path.with_file_name(name)
    }

    fn display(&self) -> String {
        self.path.display().to_string()
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.display(),
            source,
        }
    }
}

/// Write `contents` to a temp sibling and rename it over `path`.
/// The temp file is removed if the rename fails.
fn write_replacing(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut tmp_name = path.file_name().map(ToOwned::to_owned).unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path).inspect_err(|_| {
        let _ = std::fs::remove_file(&tmp);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample(sentence: &str, correct: bool) -> GrammarResult {
        GrammarResult {
            sentence: sentence.to_string(),
            ll1_valid: correct,
            dependency_valid: correct,
            language_tool_issues: Vec::new(),
            is_grammatically_correct: correct,
        }
    }

    #[test]
    fn missing_file_is_empty_history() {
        let dir = TempDir::new().unwrap();
        let file = HistoryFile::new(dir.path().join("history.json"));
        assert!(file.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_preserves_order() {
        let dir = TempDir::new().unwrap();
        let file = HistoryFile::new(dir.path().join("nested").join("history.json"));
        let history = vec![sample("one", true), sample("two", false)];
        file.save(&history).unwrap();
        assert_eq!(file.load().unwrap(), history);
    }

    #[test]
    fn stored_as_flat_json_array() {
        let dir = TempDir::new().unwrap();
        let file = HistoryFile::new(dir.path().join("history.json"));
        file.save(&[sample("one", true)]).unwrap();
        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
        assert!(raw.is_array());
        assert_eq!(raw[0]["sentence"], "one");
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, r#"{"version": 2}"#).unwrap();
        let err = HistoryFile::new(path).load().unwrap_err();
        assert!(matches!(err, StoreError::Serde { .. }));
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let file = HistoryFile::new(dir.path().join("history.json"));
        file.save(&[sample("one", true)]).unwrap();
        file.clear().unwrap();
        file.clear().unwrap();
        assert!(file.load().unwrap().is_empty());
    }

    #[test]
    fn clear_bumps_generation() {
        let dir = TempDir::new().unwrap();
        let file = HistoryFile::new(dir.path().join("history.json"));
        assert_eq!(file.generation().unwrap(), 0);
        assert_eq!(file.clear().unwrap(), 1);
        assert_eq!(file.clear().unwrap(), 2);
        assert_eq!(
            HistoryFile::new(file.path().to_path_buf()).generation().unwrap(),
            2
        );
        assert!(dir.path().join("history.json.generation").is_file());
    }

    #[test]
    fn failed_rename_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        // A non-empty directory at the target makes the rename fail.
        std::fs::create_dir_all(path.join("occupied")).unwrap();

        let err = HistoryFile::new(path).save(&[sample("one", true)]).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert!(!dir.path().join("history.json.tmp").exists());
    }
}
