use std::path::{Path, PathBuf};

use futures_util::future;
use tokio::fs;

use crate::errors::{FileOperation, IoError};
use crate::pending::PendingFile;

/// Writes every staged file underneath `project_dir`.
///
/// Parent directories are created as needed and existing files are
/// overwritten. Writes run concurrently; the returned paths keep the order
/// the files were staged in.
///
/// # Errors
///
/// Returns an [`IoError`] if a directory cannot be created or a file cannot
/// be written.
pub async fn output_files(
    project_dir: &Path,
    files: Vec<PendingFile>,
) -> Result<Vec<PathBuf>, IoError> {
    future::try_join_all(files.iter().map(|file| output_file(project_dir, file))).await
}

async fn output_file(project_dir: &Path, file: &PendingFile) -> Result<PathBuf, IoError> {
    let path = project_dir.join(&file.destination);

    // create parent if necessary
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|error| IoError::new(FileOperation::Mkdir, parent.to_path_buf(), error))?;
    }

    fs::write(&path, &file.content)
        .await
        .map_err(|error| IoError::new(FileOperation::Write, path.clone(), error))?;

    log::debug!("wrote file: {}", path.display());

    Ok(path)
}
