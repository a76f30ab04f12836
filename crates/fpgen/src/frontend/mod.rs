//! Front ends loading definition files into a [`DefinitionCollection`].
//!
//! Each front end is responsible for:
//! 1. Discovering definition files in a directory
//! 2. Parsing them into the common model
//!
//! Validation and generation do not depend on the source format.

pub mod json;

use std::path::Path;
use crate::diagnostic::GeneratorError;
use crate::ir::DefinitionCollection;

/// Trait for definition front ends.
pub trait Frontend {
    /// Returns the format name (e.g., "json").
    fn format(&self) -> &str;

    /// Returns file extensions this front end handles.
    fn extensions(&self) -> &[&str];

    /// Parses one definition file's text.
    fn parse(&self, source: &str, path: &Path) -> Result<DefinitionCollection, GeneratorError>;

    /// Parses every matching file below `dir`, in file-name order.
    fn parse_directory(&self, dir: &Path) -> Result<DefinitionCollection, GeneratorError> {
        if !dir.is_dir() {
            return Err(GeneratorError::io(dir, "definitions directory does not exist"));
        }

        let mut collection = DefinitionCollection::new();

        for entry in walkdir::WalkDir::new(dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            let matches = path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| self.extensions().contains(&ext.to_string_lossy().as_ref()));
            if !matches {
                continue;
            }

            let source = std::fs::read_to_string(path).map_err(|e| GeneratorError::IoError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

            let parsed = self.parse(&source, path)?;
            tracing::debug!(
                format = self.format(),
                path = %path.display(),
                definitions = parsed.len(),
                "Parsed definition file"
            );

            for definition in parsed.iter().cloned() {
                collection.add(definition)?;
            }
        }

        Ok(collection)
    }
}

/// Creates a front end for the given format.
pub fn create_frontend(format: &str) -> Result<Box<dyn Frontend>, GeneratorError> {
    match format {
        "json" => Ok(Box::new(json::JsonFrontend)),
        _ => Err(GeneratorError::UnsupportedFormat {
            format: format.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const USER_ID: &str = r#"{"definitions": [{"namespace": "My", "name": "UserId", "constructors": [{"name": "My\\UserId"}], "derivings": ["Uuid"]}]}"#;
    const EMAIL: &str = r#"{"definitions": [{"namespace": "My", "name": "Email", "constructors": [{"name": "String"}]}]}"#;

    #[test]
    fn test_parse_directory_in_file_name_order() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("b.json"), USER_ID).unwrap();
        std::fs::write(dir.path().join("nested").join("a.json"), EMAIL).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let collection = create_frontend("json").unwrap().parse_directory(dir.path()).unwrap();

        let names: Vec<String> = collection.iter().map(|d| d.qualified_name()).collect();
        assert_eq!(names, vec!["My\\UserId", "My\\Email"]);
    }

    #[test]
    fn test_duplicate_across_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.json"), EMAIL).unwrap();
        std::fs::write(dir.path().join("b.json"), EMAIL).unwrap();

        let result = create_frontend("json").unwrap().parse_directory(dir.path());
        assert!(matches!(result, Err(GeneratorError::DuplicateDefinition { .. })));
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let result = create_frontend("json").unwrap().parse_directory(&dir.path().join("missing"));
        assert!(matches!(result, Err(GeneratorError::IoError { .. })));
    }

    #[test]
    fn test_unsupported_format() {
        assert!(matches!(
            create_frontend("fpp"),
            Err(GeneratorError::UnsupportedFormat { .. })
        ));
    }
}
