//! Local file loading.

use crate::client::{FileMode, TreeEntry};
use crate::config::FileMapping;
use crate::jobs::JobError;
use std::io;
use tracing::debug;

/// A local file read into memory, ready to be written at its target path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    /// Path inside the target repository.
    pub target: String,

    /// File content.
    pub content: String,

    /// Git file mode.
    pub mode: FileMode,
}

impl LoadedFile {
    /// Converts the file into an inline blob tree entry.
    #[must_use]
    pub fn into_tree_entry(self) -> TreeEntry {
        TreeEntry::blob(self.target, self.mode, self.content)
    }
}

/// Reads the local side of a mapping.
///
/// Content is sent inline, so it must be UTF-8.
///
/// # Errors
///
/// Returns [`JobError::FileRead`] naming the local path if the file can't be
/// read or isn't valid UTF-8.
pub async fn load_file(mapping: &FileMapping) -> Result<LoadedFile, JobError> {
    let read_error = |source: io::Error| JobError::FileRead {
        path: mapping.local.clone(),
        source,
    };

    let bytes = tokio::fs::read(&mapping.local).await.map_err(read_error)?;
    let content =
        String::from_utf8(bytes).map_err(|e| read_error(io::Error::new(io::ErrorKind::InvalidData, e)))?;
    let metadata = tokio::fs::metadata(&mapping.local)
        .await
        .map_err(read_error)?;
    let mode = file_mode(&metadata);

    debug!(
        local = %mapping.local,
        target = %mapping.target,
        mode = mode.as_str(),
        bytes = content.len(),
        "Loaded file"
    );

    Ok(LoadedFile {
        target: mapping.target.clone(),
        content,
        mode,
    })
}

/// Reads every mapping in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the [`JobError::FileRead`] of the first unreadable file.
pub async fn load_files(mappings: &[FileMapping]) -> Result<Vec<LoadedFile>, JobError> {
    let mut files = Vec::with_capacity(mappings.len());
    for mapping in mappings {
        files.push(load_file(mapping).await?);
    }
    Ok(files)
}

#[cfg(unix)]
fn file_mode(metadata: &std::fs::Metadata) -> FileMode {
    use std::os::unix::fs::PermissionsExt;

    if metadata.permissions().mode() & 0o111 != 0 {
        FileMode::Executable
    } else {
        FileMode::Regular
    }
}

#[cfg(not(unix))]
fn file_mode(_metadata: &std::fs::Metadata) -> FileMode {
    FileMode::Regular
}
