//! Writing generated files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::diagnostic::GeneratorError;

/// Destination of generated files.
pub trait FileWriter {
    fn write(&mut self, path: &Path, content: &str) -> Result<(), GeneratorError>;
}

/// Writes files to disk.
///
/// Content goes to a temporary sibling first and is renamed into place, so a file
/// is either complete or untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsWriter;

impl FileWriter for FsWriter {
    fn write(&mut self, path: &Path, content: &str) -> Result<(), GeneratorError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GeneratorError::IoError {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }

        let file_name = path
            .file_name()
            .ok_or_else(|| GeneratorError::io(path, "not a file path"))?;
        let mut temp_name = std::ffi::OsString::from(".");
        temp_name.push(file_name);
        temp_name.push(".tmp");
        let temp = path.with_file_name(temp_name);

        std::fs::write(&temp, content).map_err(|e| GeneratorError::IoError {
            path: temp.clone(),
            message: e.to_string(),
        })?;

        std::fs::rename(&temp, path).map_err(|e| {
            let _ = std::fs::remove_file(&temp);
            GeneratorError::IoError {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })
    }
}

/// Keeps files in memory; used for dry runs and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryWriter {
    files: BTreeMap<PathBuf, String>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    pub fn files(&self) -> &BTreeMap<PathBuf, String> {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FileWriter for MemoryWriter {
    fn write(&mut self, path: &Path, content: &str) -> Result<(), GeneratorError> {
        self.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
