//! Local file to repository path mappings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between the local path and the target path.
const SEPARATOR: char = ':';

/// A local file and the path it is written to in each destination repository.
///
/// Parsed from either a bare path (`README.md`, used for both sides) or
/// `local:target`. Only the first separator splits; everything after it is
/// the target path, so `a:b:c` writes `a` to `b:c` instead of dropping `:c`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FileMapping {
    /// Path of the file on the local filesystem.
    pub local: String,

    /// Path of the file inside the target repository.
    pub target: String,
}

/// An empty file mapping entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("file mapping entry cannot be empty")]
pub struct EmptyFileMapping;

impl FileMapping {
    /// Creates a mapping with distinct local and target paths.
    pub fn new(local: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            local: local.into(),
            target: target.into(),
        }
    }
}

impl FromStr for FileMapping {
    type Err = EmptyFileMapping;

    fn from_str(entry: &str) -> Result<Self, Self::Err> {
        if entry.is_empty() {
            return Err(EmptyFileMapping);
        }

        Ok(match entry.split_once(SEPARATOR) {
            Some((local, target)) => Self::new(local, target),
            None => Self::new(entry, entry),
        })
    }
}

impl TryFrom<String> for FileMapping {
    type Error = EmptyFileMapping;

    fn try_from(entry: String) -> Result<Self, Self::Error> {
        entry.parse()
    }
}

impl From<FileMapping> for String {
    fn from(mapping: FileMapping) -> Self {
        mapping.to_string()
    }
}

impl fmt::Display for FileMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.local == self.target {
            f.write_str(&self.local)
        } else {
            write!(f, "{}{SEPARATOR}{}", self.local, self.target)
        }
    }
}
