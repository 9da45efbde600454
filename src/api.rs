use std::path::{Path, PathBuf};

use crate::{
    config::{Config, ConfigError, ScaffoldOptions},
    errors::IoError,
    preflight::{self, Preflight},
    prepare::{self, PrepareError},
    writer,
};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum GroundworkError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Prepare(#[from] PrepareError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),
}

/// Generates a front-end starting point inside `project_dir`.
///
/// Missing options fall back to their defaults, every bundled source is
/// rendered in memory, and only then is anything written to disk. Returns
/// the full paths of the written files in staging order: markup, stylesheet,
/// script, then any enabled extras.
///
/// # Errors
///
/// Returns a [`GroundworkError`] if:
///
/// - A resolved source has no bundled template behind it.
/// - Tera fails to build the render context or render the markup.
/// - A directory or file cannot be created or written to.
pub async fn scaffold(
    project_dir: impl AsRef<Path>,
    options: ScaffoldOptions,
) -> Result<Vec<PathBuf>, GroundworkError> {
    let project_dir = project_dir.as_ref();
    let config = Config::resolve(options);

    log::debug!(
        "Attempting to scaffold {}/{}/{} project into: {}",
        config.html.r#type,
        config.styles.r#type,
        config.scripts.r#type,
        project_dir.display()
    );

    let files = prepare::prepare_files(&config).await?;

    let written = writer::output_files(project_dir, files).await?;

    Ok(written)
}

/// Reports whether `project_dir` exists and how many entries it holds.
///
/// Handy for warning a user before [`scaffold`] overwrites anything; a
/// missing directory reads as empty.
///
/// # Errors
///
/// Returns a [`GroundworkError`] if the directory exists but cannot be
/// listed.
pub async fn preflight(project_dir: impl AsRef<Path>) -> Result<Preflight, GroundworkError> {
    let report = preflight::check(project_dir.as_ref()).await?;

    Ok(report)
}
