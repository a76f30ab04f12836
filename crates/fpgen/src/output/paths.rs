//! Output path resolution by PSR-4 and PSR-0 prefixes.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::diagnostic::GeneratorError;
use crate::ir::{split_qualified, Constructor, Definition, NAMESPACE_SEPARATOR};

/// Maps a generated class to the file it is written to.
pub trait PathResolver {
    fn resolve(&self, definition: &Definition, constructor: Option<&Constructor>) -> Result<PathBuf, GeneratorError>;
}

/// Resolves paths from namespace prefixes.
///
/// PSR-4 prefixes are tried first, longest match wins, and the part of the class
/// name after the prefix becomes the relative path. PSR-0 prefixes map the whole
/// class name, with underscores in the short name becoming directories.
#[derive(Debug, Default, Clone)]
pub struct PsrPathResolver {
    psr4: BTreeMap<String, PathBuf>,
    psr0: BTreeMap<String, PathBuf>,
}

impl PsrPathResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_psr4(mut self, prefix: impl AsRef<str>, dir: impl Into<PathBuf>) -> Self {
        self.psr4.insert(normalize_prefix(prefix.as_ref()), dir.into());
        self
    }

    pub fn with_psr0(mut self, prefix: impl AsRef<str>, dir: impl Into<PathBuf>) -> Self {
        self.psr0.insert(normalize_prefix(prefix.as_ref()), dir.into());
        self
    }

    /// Path of the file holding `class`.
    pub fn locate(&self, class: &str) -> Result<PathBuf, GeneratorError> {
        let class = class.trim_start_matches(NAMESPACE_SEPARATOR);

        if let Some((prefix, dir)) = longest_prefix(&self.psr4, class) {
            return Ok(join_segments(dir.clone(), class[prefix.len()..].split(NAMESPACE_SEPARATOR)));
        }

        if let Some((_, dir)) = longest_prefix(&self.psr0, class) {
            let (namespace, short_name) = split_qualified(class);
            let namespace_segments = namespace.split(NAMESPACE_SEPARATOR).filter(|s| !s.is_empty());
            return Ok(join_segments(dir.clone(), namespace_segments.chain(short_name.split('_'))));
        }

        Err(GeneratorError::UnresolvablePath {
            class: class.to_string(),
        })
    }
}

impl PathResolver for PsrPathResolver {
    fn resolve(&self, definition: &Definition, constructor: Option<&Constructor>) -> Result<PathBuf, GeneratorError> {
        self.locate(&definition.target_class(constructor))
    }
}

/// Prefixes are stored without a leading separator and with a trailing one.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches(NAMESPACE_SEPARATOR);
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{}{}", trimmed, NAMESPACE_SEPARATOR)
    }
}

fn longest_prefix<'m>(prefixes: &'m BTreeMap<String, PathBuf>, class: &str) -> Option<(&'m String, &'m PathBuf)> {
    prefixes
        .iter()
        .filter(|(prefix, _)| class.starts_with(prefix.as_str()))
        .max_by_key(|(prefix, _)| prefix.len())
}

fn join_segments<'s>(mut path: PathBuf, segments: impl Iterator<Item = &'s str>) -> PathBuf {
    let segments: Vec<&str> = segments.collect();
    if let Some((last, parents)) = segments.split_last() {
        for segment in parents {
            path.push(segment);
        }
        path.push(format!("{}.php", last));
    }
    path
}
