use std::io;
use std::path::Path;

use tokio::fs;

use crate::errors::{FileOperation, IoError};

/// What a target directory looks like before scaffolding into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preflight {
    /// Whether the directory exists at all.
    pub exists: bool,
    /// Whether the directory has no entries. A missing directory counts as
    /// empty.
    pub empty: bool,
    /// Number of direct entries. A subdirectory counts as one entry no
    /// matter what it contains.
    pub file_count: usize,
}

/// Inspects `project_dir` without touching it.
///
/// Scaffolding does not require an empty directory; this exists so callers
/// can warn before files get overwritten.
///
/// # Errors
///
/// Returns an [`IoError`] if the directory exists but cannot be listed.
pub async fn check(project_dir: &Path) -> Result<Preflight, IoError> {
    let mut entries = match fs::read_dir(project_dir).await {
        Ok(entries) => entries,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            return Ok(Preflight {
                exists: false,
                empty: true,
                file_count: 0,
            });
        }
        Err(error) => {
            return Err(IoError::new(
                FileOperation::ReadDir,
                project_dir.to_path_buf(),
                error,
            ));
        }
    };

    let mut file_count = 0;
    while entries
        .next_entry()
        .await
        .map_err(|error| IoError::new(FileOperation::ReadDir, project_dir.to_path_buf(), error))?
        .is_some()
    {
        file_count += 1;
    }

    Ok(Preflight {
        exists: true,
        empty: file_count == 0,
        file_count,
    })
}
